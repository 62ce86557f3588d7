use std::ops::RangeInclusive;

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::{Rng, RngCore};

use crate::defs::{BodyPart, DefCatalog, RecipeDef};
use crate::host::{Hediff, HediffKind, PawnHealth};

use super::RaidError;

/// How many augmentations each raider receives.
pub const AUGMENT_COUNT_RANGE: RangeInclusive<u32> = 3..=8;

/// Attempts to find a body part matching a recipe before giving up. Bounds
/// what would otherwise be an unbounded rejection-sampling loop when the
/// pawn has no part the recipe targets.
pub const PART_SAMPLE_LIMIT: usize = 32;

fn sample_part(
    health: &PawnHealth,
    recipe: &RecipeDef,
    rng: &mut dyn RngCore,
) -> Result<BodyPart, RaidError> {
    let present: Vec<BodyPart> = health
        .parts
        .iter()
        .filter(|p| !p.missing)
        .map(|p| p.part)
        .collect();
    if !present.is_empty() {
        for _ in 0..PART_SAMPLE_LIMIT {
            let part = present[rng.random_range(0..present.len())];
            if recipe.targets(part) {
                return Ok(part);
            }
        }
    }
    Err(RaidError::NoEligiblePart {
        recipe: recipe.name.clone(),
    })
}

/// Apply a random number of augmentations (uniform in
/// [`AUGMENT_COUNT_RANGE`]) to the pawn. Each application picks a random
/// augmentation recipe from the catalog and a random non-missing body part
/// the recipe targets, then records the installed part. Returns the number
/// applied.
pub fn apply_augments(
    world: &mut World,
    pawn: Entity,
    rng: &mut dyn RngCore,
) -> Result<u32, RaidError> {
    let recipes: Vec<RecipeDef> = world
        .resource::<DefCatalog>()
        .recipes()
        .filter(|r| r.is_augmentation())
        .cloned()
        .collect();
    if recipes.is_empty() {
        return Err(RaidError::NoRecipes);
    }

    let count = rng.random_range(AUGMENT_COUNT_RANGE);
    for _ in 0..count {
        let recipe = &recipes[rng.random_range(0..recipes.len())];
        let health = world.get::<PawnHealth>(pawn).unwrap();
        let part = sample_part(health, recipe, rng)?;
        world.get_mut::<PawnHealth>(pawn).unwrap().hediffs.push(Hediff {
            label: recipe.added_part_label.clone(),
            part,
            kind: HediffKind::AddedPart,
        });
    }
    Ok(count)
}
