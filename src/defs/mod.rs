//! Static content definitions consumed by the reward handlers.
//!
//! Mirrors the host engine's def database: things, pawn kinds, and surgery
//! recipes are authored as JSON content files and looked up by name at
//! runtime. The catalog itself is immutable during reward execution.

mod body;
mod catalog;
mod pawn_kind;
mod recipe;
mod thing;

pub use body::BodyPart;
pub use catalog::{DefCatalog, DefError};
pub use pawn_kind::PawnKindDef;
pub use recipe::RecipeDef;
pub use thing::{EquipmentSlot, ThingDef};
