use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use rand::RngCore;

use crate::defs::DefCatalog;
use crate::host::{Faction, PawnHealth, PawnMind, generate_pawn};

use super::RaidError;

/// Request for a generated opposing group.
#[derive(Debug, Clone)]
pub struct GroupParms {
    /// Pawn kind to generate.
    pub kind: String,
    pub faction: Faction,
    /// Power budget; generation continues until it is exhausted.
    pub points: f32,
    /// Hard cap on generated units, `None` for budget-only sizing.
    pub max_count: Option<usize>,
    /// Force exactly one unit (the first) to go down instead of dying, and
    /// never flee.
    pub force_one_incap: bool,
}

/// Pluggable group-composition policy.
pub trait GroupComposer {
    fn compose(
        &self,
        world: &mut World,
        rng: &mut dyn RngCore,
        parms: &GroupParms,
    ) -> Result<Vec<Entity>, RaidError>;
}

/// Default policy: generate units of one kind until the budget runs out.
///
/// Each generated unit subtracts its kind's combat power from the remaining
/// budget; generation stops the instant the remainder reaches zero, so the
/// group may overshoot the budget but never undershoots it.
pub struct AssaultComposer;

impl GroupComposer for AssaultComposer {
    fn compose(
        &self,
        world: &mut World,
        rng: &mut dyn RngCore,
        parms: &GroupParms,
    ) -> Result<Vec<Entity>, RaidError> {
        let power = world
            .resource::<DefCatalog>()
            .pawn_kind(&parms.kind)
            .ok_or_else(|| crate::defs::DefError::Unknown {
                kind: "pawn_kind",
                name: parms.kind.clone(),
            })?
            .combat_power;
        if power <= 0.0 {
            return Err(RaidError::NonPositivePower(parms.kind.clone()));
        }

        let mut out = Vec::new();
        let mut points = parms.points;
        let mut incap_done = false;
        while points > 0.0 && parms.max_count.is_none_or(|max| out.len() < max) {
            let pawn = generate_pawn(world, &parms.kind, parms.faction, rng)?;
            if parms.force_one_incap && !incap_done {
                world.get_mut::<PawnHealth>(pawn).unwrap().forced_incap = true;
                world.get_mut::<PawnMind>(pawn).unwrap().can_flee = false;
                incap_done = true;
            }
            points -= power;
            out.push(pawn);
        }
        Ok(out)
    }
}
