use std::collections::BTreeMap;

use bevy_ecs::component::Component;

use crate::defs::BodyPart;
use crate::host::map::Cell;
use crate::host::quality::Quality;

/// Faction allegiance of a pawn or thing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Faction {
    Player,
    Raider,
    Wild,
}

/// Marker for every pawn entity.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Pawn;

/// Core pawn identity, present on every pawn.
#[derive(Component, Debug, Clone)]
pub struct PawnIdentity {
    /// Monotonic id; roster display order is ascending id.
    pub id: u64,
    pub name: String,
    /// Pawn kind def name.
    pub kind: String,
    pub faction: Faction,
    pub dead: bool,
}

impl PawnIdentity {
    pub fn is_alive(&self) -> bool {
        !self.dead
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Passion {
    None,
    Minor,
    Major,
}

#[derive(Debug, Clone)]
pub struct Skill {
    pub name: String,
    pub level: u8,
    pub passion: Passion,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PawnSkills {
    pub skills: Vec<Skill>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PawnTraits {
    /// Trait def names with degree (e.g. industriousness -1..2).
    pub traits: Vec<(String, i8)>,
}

/// Life-stage history (backstories).
#[derive(Component, Debug, Clone, Default)]
pub struct PawnStory {
    pub childhood: String,
    pub adulthood: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyType {
    Thin,
    Standard,
    Hulk,
    Fat,
}

/// Body shape and appearance descriptors.
#[derive(Component, Debug, Clone)]
pub struct PawnBody {
    pub body_type: BodyType,
    pub head_path: String,
    pub hair: String,
    pub skin_tone: u8,
}

pub const TICKS_PER_YEAR: i64 = 3_600_000;

/// Biological/chronological age state.
///
/// Copied between pawns only through [`AgeSnapshot`], never field-by-field
/// at call sites, so the copy contract lives in one place.
#[derive(Component, Debug, Clone)]
pub struct PawnAge {
    pub biological_ticks: i64,
    pub chronological_ticks: i64,
    pub growth: f32,
    pub life_stage: u8,
}

impl PawnAge {
    pub fn from_years(years: u32) -> Self {
        let ticks = years as i64 * TICKS_PER_YEAR;
        Self {
            biological_ticks: ticks,
            chronological_ticks: ticks,
            growth: 1.0,
            life_stage: if years < 13 { 2 } else { 4 },
        }
    }

    pub fn biological_years(&self) -> u32 {
        (self.biological_ticks / TICKS_PER_YEAR) as u32
    }
}

/// Explicit copy contract for [`PawnAge`].
///
/// Every copied field is declared here; the owning pawn itself is the one
/// thing deliberately not part of the snapshot. Bump the version when the
/// field set changes.
#[derive(Debug, Clone, PartialEq)]
pub struct AgeSnapshot {
    pub biological_ticks: i64,
    pub chronological_ticks: i64,
    pub growth: f32,
    pub life_stage: u8,
}

impl AgeSnapshot {
    pub const VERSION: u16 = 1;

    pub fn capture(age: &PawnAge) -> Self {
        Self {
            biological_ticks: age.biological_ticks,
            chronological_ticks: age.chronological_ticks,
            growth: age.growth,
            life_stage: age.life_stage,
        }
    }

    pub fn apply(&self, age: &mut PawnAge) {
        age.biological_ticks = self.biological_ticks;
        age.chronological_ticks = self.chronological_ticks;
        age.growth = self.growth;
        age.life_stage = self.life_stage;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HediffKind {
    /// Ordinary injury, never mirrored.
    Wound,
    /// Installed augmentation.
    AddedPart,
}

#[derive(Debug, Clone)]
pub struct Hediff {
    pub label: String,
    pub part: BodyPart,
    pub kind: HediffKind,
}

#[derive(Debug, Clone)]
pub struct BodyPartState {
    pub part: BodyPart,
    pub missing: bool,
}

#[derive(Component, Debug, Clone)]
pub struct PawnHealth {
    pub parts: Vec<BodyPartState>,
    pub hediffs: Vec<Hediff>,
    /// Downed instead of killed when defeated.
    pub forced_incap: bool,
}

impl PawnHealth {
    pub fn humanlike() -> Self {
        Self {
            parts: BodyPart::humanlike_set()
                .into_iter()
                .map(|part| BodyPartState {
                    part,
                    missing: false,
                })
                .collect(),
            hediffs: Vec::new(),
            forced_incap: false,
        }
    }

    pub fn added_parts(&self) -> impl Iterator<Item = &Hediff> {
        self.hediffs
            .iter()
            .filter(|h| h.kind == HediffKind::AddedPart)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    GotoWander(Cell),
}

#[derive(Component, Debug, Clone)]
pub struct PawnMind {
    pub can_flee: bool,
    pub job: Option<Job>,
}

impl Default for PawnMind {
    fn default() -> Self {
        Self {
            can_flee: true,
            job: None,
        }
    }
}

/// Memories feeding the mood need.
#[derive(Component, Debug, Clone, Default)]
pub struct PawnMood {
    pub memories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApparelItem {
    pub def: String,
    pub quality: Option<Quality>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PawnApparel {
    pub worn: Vec<ApparelItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EquippedWeapon {
    pub def: String,
    pub quality: Option<Quality>,
}

#[derive(Component, Debug, Clone, Default)]
pub struct PawnEquipment {
    pub primary: Option<EquippedWeapon>,
}

/// Lifetime record counters (kills, crafted items, time as colonist...).
#[derive(Component, Debug, Clone, Default)]
pub struct PawnRecords {
    pub entries: BTreeMap<String, f64>,
}

/// Learned training progress for animals, lesson name -> completed steps.
#[derive(Component, Debug, Clone, Default)]
pub struct PawnTraining {
    pub steps: BTreeMap<String, u32>,
}

/// Map placement; `None` until the host places the pawn (e.g. drop pods in
/// transit).
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PawnPosition {
    pub cell: Option<Cell>,
}
