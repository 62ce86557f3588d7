//! Reward handlers invoked by the external achievement framework.
//!
//! Each reward is a thin adapter over the host surface: `try_execute`
//! performs the whole effect synchronously and reports consumption with a
//! bool, `disabled` supplies advisory text for the framework's UI. There is
//! no inheritance chain: map-gated rewards share the [`map_disabled`]
//! guard and the [`drop_things_near_home`] helper by composition.

mod animal;
mod context;
mod evil_raid;
mod give_things;
mod misc;

pub use animal::GiveAnimal;
pub use context::RewardContext;
pub use evil_raid::{EvilRaid, RAIDER_KIND, WEAPON_VALUE_TARGET};
pub use give_things::{GiveApparel, GiveArt, GiveWeapon, PendingThing, drop_things_near_home};
pub use misc::{DebugGivePoints, HappyThoughts, OrbitalTrader};

use crate::host::Map;

/// A reward the achievement framework can fire.
pub trait Reward {
    fn name(&self) -> &str;

    /// Why the reward is currently unavailable, if it is. Advisory text
    /// only; `try_execute` re-checks its own preconditions.
    fn disabled(&self, ctx: &RewardContext) -> Option<String> {
        let _ = ctx;
        None
    }

    /// Execute the reward. `true` means the triggering event is consumed;
    /// `false` means it could not run and the framework decides what to do
    /// with the unspent reward.
    fn try_execute(&self, ctx: &mut RewardContext) -> bool;
}

/// Shared guard for map-gated rewards.
pub(crate) fn map_disabled(ctx: &RewardContext) -> Option<String> {
    if ctx.world.resource::<Map>().player_home {
        None
    } else {
        Some("no valid target map".to_string())
    }
}

pub(crate) fn home_map_ready(ctx: &RewardContext) -> bool {
    ctx.world.resource::<Map>().player_home
}
