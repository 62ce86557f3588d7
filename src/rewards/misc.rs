use crate::host::{IncidentFlags, LetterKind, LetterStack, PawnMood};
use crate::raid::living_colonists;

use super::{Reward, RewardContext, home_map_ready, map_disabled};

/// Mood boost applied by [`HappyThoughts`].
const OPTIMISM_MEMORY: &str = "new_colony_optimism";

/// Calls an orbital trade ship into comms range.
pub struct OrbitalTrader;

impl Reward for OrbitalTrader {
    fn name(&self) -> &str {
        "orbital_trader"
    }

    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        map_disabled(ctx)
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        if !home_map_ready(ctx) {
            return false;
        }
        ctx.world.resource_mut::<IncidentFlags>().orbital_trader_arrivals += 1;
        ctx.world.resource_mut::<LetterStack>().post(
            "Trader in orbit",
            "An orbital trade ship has arrived in comms range.",
            LetterKind::Neutral,
        );
        true
    }
}

/// Gives every living colonist a positive memory.
pub struct HappyThoughts;

impl Reward for HappyThoughts {
    fn name(&self) -> &str {
        "happy_thoughts"
    }

    fn try_execute(&self, ctx: &mut RewardContext) -> bool {
        let colonists = living_colonists(ctx.world);
        if colonists.is_empty() {
            return false;
        }
        for pawn in colonists {
            if let Some(mut mood) = ctx.world.get_mut::<PawnMood>(pawn) {
                mood.memories.push(OPTIMISM_MEMORY.to_string());
            }
        }
        true
    }
}

/// No-op placeholder so point spending can be exercised without touching the
/// world. Always succeeds.
pub struct DebugGivePoints;

impl Reward for DebugGivePoints {
    fn name(&self) -> &str {
        "debug_give_points"
    }

    fn try_execute(&self, _ctx: &mut RewardContext) -> bool {
        true
    }
}
