use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::{Rng, RngCore};

use crate::defs::{DefCatalog, ThingDef};
use crate::host::{EquippedWeapon, PawnApparel, PawnEquipment, roll_quality};

use super::RaidError;

/// Pick one weapon from `pool`, weighted toward candidates whose market
/// value is near `target_value`.
///
/// Each candidate's weight is `max_distance - its_distance` from the target
/// value, so the farthest candidate weighs zero. When every candidate is
/// equally distant all weights collapse to zero and the pick falls back to
/// uniform.
pub fn pick_weapon<'a>(
    pool: &[&'a ThingDef],
    target_value: f32,
    rng: &mut dyn RngCore,
) -> Result<&'a ThingDef, RaidError> {
    if pool.is_empty() {
        return Err(RaidError::EmptyWeaponPool);
    }

    let distances: Vec<f32> = pool
        .iter()
        .map(|def| (def.market_value - target_value).abs())
        .collect();
    let max_distance = distances.iter().fold(0.0f32, |a, &d| a.max(d));
    let weights: Vec<f32> = distances.iter().map(|d| max_distance - d).collect();
    let total: f32 = weights.iter().sum();

    if total <= f32::EPSILON {
        return Ok(pool[rng.random_range(0..pool.len())]);
    }

    let mut roll: f32 = rng.random::<f32>() * total;
    for (def, weight) in pool.iter().zip(weights.iter()) {
        roll -= weight;
        if roll <= 0.0 {
            return Ok(def);
        }
    }
    Ok(pool.last().unwrap())
}

/// Give the pawn a weighted-random weapon near `target_value` with a rolled
/// quality tier. Ranged weapons strip any shield apparel first; the two
/// cannot coexist on one pawn.
pub fn equip_raider(
    world: &mut World,
    pawn: Entity,
    target_value: f32,
    rng: &mut dyn RngCore,
) -> Result<(), RaidError> {
    let catalog = world.resource::<DefCatalog>();
    let pool: Vec<&ThingDef> = catalog
        .things()
        .filter(|def| def.player_usable_weapon())
        .collect();
    let chosen = pick_weapon(&pool, target_value, rng)?;
    let weapon = EquippedWeapon {
        def: chosen.name.clone(),
        quality: chosen.has_quality.then(|| roll_quality(rng)),
    };
    let ranged = chosen.ranged;
    let shield_defs: Vec<String> = if ranged {
        catalog
            .things()
            .filter(|def| def.shield)
            .map(|def| def.name.clone())
            .collect()
    } else {
        Vec::new()
    };

    if ranged {
        world
            .get_mut::<PawnApparel>(pawn)
            .unwrap()
            .worn
            .retain(|item| !shield_defs.contains(&item.def));
    }
    world.get_mut::<PawnEquipment>(pawn).unwrap().primary = Some(weapon);
    Ok(())
}
