//! Modeled host-engine surface.
//!
//! The reward handlers run inside a host simulation that owns the map, the
//! pawns, and the notification systems. This module carries a compact model
//! of exactly the surface the handlers consume: pawns are entities with
//! per-concern components, and the map, letter stack, drop queue, and lord
//! manager are world resources. There is no tick loop here; every mutation
//! happens synchronously inside a single reward invocation.

mod components;
mod map;
mod names;
mod quality;
mod resources;
mod spawn;

pub use components::{
    AgeSnapshot, ApparelItem, BodyPartState, BodyType, EquippedWeapon, Faction, Hediff,
    HediffKind, Job, Passion, Pawn, PawnAge, PawnApparel, PawnBody, PawnEquipment, PawnHealth,
    PawnIdentity, PawnMind, PawnMood, PawnPosition, PawnRecords, PawnSkills, PawnStory,
    PawnTraining, PawnTraits, Skill,
};
pub use map::{Cell, Map};
pub use names::generate_pawn_name;
pub use quality::{Quality, roll_quality};
pub use resources::{
    DropGroup, DropQueue, IncidentFlags, Letter, LetterKind, LetterStack, Lord, LordManager,
    LordStrategy, PawnIds,
};
pub use spawn::{ThingMarker, ThingState, generate_pawn, spawn_thing};
