//! The mirrored-raid core: converts the live colonist roster into a
//! same-size opposing force whose members copy the colonists' names, traits,
//! skills, bodies, and augmentations, then hands the force to the host's
//! drop and group-command subsystems.
//!
//! Pipeline (see `rewards::evil_raid`): roster snapshot -> force generation
//! -> attribute mirror -> equipment + augmentation -> deployment. Every step
//! returns `Result` and the whole procedure fails without retry; a failure
//! after force generation can leave generated pawns in the world (accepted
//! host-side limitation, there is no rollback).

mod augment;
mod deploy;
mod equipment;
mod force;
mod mirror;
mod roster;

pub use augment::{AUGMENT_COUNT_RANGE, PART_SAMPLE_LIMIT, apply_augments};
pub use deploy::{RAID_DROP_DELAY_TICKS, deploy_raid};
pub use equipment::{equip_raider, pick_weapon};
pub use force::{AssaultComposer, GroupComposer, GroupParms};
pub use mirror::mirror_roster;
pub use roster::living_colonists;

use crate::defs::DefError;

#[derive(Debug, thiserror::Error)]
pub enum RaidError {
    #[error("no living colonists to mirror")]
    EmptyRoster,
    #[error("roster mismatch: {sources} sources vs {targets} targets")]
    RosterMismatch { sources: usize, targets: usize },
    #[error("no weapon candidates in pool")]
    EmptyWeaponPool,
    #[error("no augmentation recipes available")]
    NoRecipes,
    #[error("no eligible body part for recipe {recipe}")]
    NoEligiblePart { recipe: String },
    #[error("no standable drop cell")]
    NoDropCell,
    #[error("pawn kind {0} has non-positive combat power")]
    NonPositivePower(String),
    #[error(transparent)]
    Def(#[from] DefError),
}
