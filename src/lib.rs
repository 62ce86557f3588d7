pub mod defs;
pub mod host;
pub mod raid;
pub mod rewards;

pub use defs::{DefCatalog, DefError};
pub use raid::RaidError;
pub use rewards::{
    DebugGivePoints, EvilRaid, GiveAnimal, GiveApparel, GiveArt, GiveWeapon, HappyThoughts,
    OrbitalTrader, Reward, RewardContext,
};
