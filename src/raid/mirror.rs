use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;

use crate::host::{
    AgeSnapshot, ApparelItem, PawnAge, PawnApparel, PawnBody, PawnHealth, PawnIdentity,
    PawnRecords, PawnSkills, PawnStory, PawnTraits,
};

use super::RaidError;

/// Copy the mirrored attribute set from each `sources[i]` onto
/// `targets[i]`.
///
/// Copied: name, traits, life-stage history, skills, added-part hediffs
/// (wounds stay behind), body and appearance, records, and the age state via
/// [`AgeSnapshot`]. The target keeps its own id, kind, faction, and any
/// forced-incap state set during composition. Target starting apparel is
/// destroyed and replaced with a fresh copy of each source worn item,
/// quality preserved.
///
/// A length mismatch is an invariant violation and fails before any pawn is
/// touched.
pub fn mirror_roster(
    world: &mut World,
    sources: &[Entity],
    targets: &[Entity],
) -> Result<(), RaidError> {
    if sources.len() != targets.len() {
        return Err(RaidError::RosterMismatch {
            sources: sources.len(),
            targets: targets.len(),
        });
    }

    for (&source, &target) in sources.iter().zip(targets.iter()) {
        let name = world.get::<PawnIdentity>(source).unwrap().name.clone();
        let traits = world.get::<PawnTraits>(source).unwrap().clone();
        let story = world.get::<PawnStory>(source).unwrap().clone();
        let skills = world.get::<PawnSkills>(source).unwrap().clone();
        let body = world.get::<PawnBody>(source).unwrap().clone();
        let records = world.get::<PawnRecords>(source).unwrap().clone();
        let age = AgeSnapshot::capture(world.get::<PawnAge>(source).unwrap());
        let added_parts: Vec<_> = world
            .get::<PawnHealth>(source)
            .unwrap()
            .added_parts()
            .cloned()
            .collect();
        let worn: Vec<ApparelItem> = world
            .get::<PawnApparel>(source)
            .unwrap()
            .worn
            .iter()
            .map(|item| ApparelItem {
                def: item.def.clone(),
                quality: item.quality,
            })
            .collect();

        world.get_mut::<PawnIdentity>(target).unwrap().name = name;
        *world.get_mut::<PawnTraits>(target).unwrap() = traits;
        *world.get_mut::<PawnStory>(target).unwrap() = story;
        *world.get_mut::<PawnSkills>(target).unwrap() = skills;
        *world.get_mut::<PawnBody>(target).unwrap() = body;
        *world.get_mut::<PawnRecords>(target).unwrap() = records;
        age.apply(&mut world.get_mut::<PawnAge>(target).unwrap());
        world.get_mut::<PawnHealth>(target).unwrap().hediffs = added_parts;
        world.get_mut::<PawnApparel>(target).unwrap().worn = worn;
    }
    Ok(())
}
