use bevy_ecs::entity::Entity;
use bevy_ecs::resource::Resource;

use crate::host::components::Faction;
use crate::host::map::Cell;

/// Monotonic pawn id counter; ascending ids define roster display order.
#[derive(Resource, Debug, Default)]
pub struct PawnIds {
    next: u64,
}

impl PawnIds {
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterKind {
    Positive,
    Neutral,
    ThreatBig,
}

#[derive(Debug, Clone)]
pub struct Letter {
    pub label: String,
    pub text: String,
    pub kind: LetterKind,
}

/// Host notification stack; rewards post narrative letters here.
#[derive(Resource, Debug, Default)]
pub struct LetterStack {
    pub letters: Vec<Letter>,
}

impl LetterStack {
    pub fn post(&mut self, label: impl Into<String>, text: impl Into<String>, kind: LetterKind) {
        self.letters.push(Letter {
            label: label.into(),
            text: text.into(),
            kind,
        });
    }
}

/// A group of pawns scheduled to arrive by drop pod.
#[derive(Debug, Clone)]
pub struct DropGroup {
    pub pawns: Vec<Entity>,
    pub cell: Cell,
    pub delay_ticks: u32,
}

/// Host drop-pod subsystem; the host resolves pending groups on arrival.
#[derive(Resource, Debug, Default)]
pub struct DropQueue {
    pub pending: Vec<DropGroup>,
}

impl DropQueue {
    pub fn enqueue(&mut self, group: DropGroup) {
        self.pending.push(group);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LordStrategy {
    AssaultColony,
    DefendSpot,
}

/// A strategy-driven group command over a set of pawns.
#[derive(Debug, Clone)]
pub struct Lord {
    pub strategy: LordStrategy,
    pub faction: Faction,
    pub pawns: Vec<Entity>,
}

/// Host group-command subsystem.
#[derive(Resource, Debug, Default)]
pub struct LordManager {
    pub lords: Vec<Lord>,
}

impl LordManager {
    pub fn register(&mut self, lord: Lord) {
        self.lords.push(lord);
    }
}

/// Incidents fired into the host, visible for the caller to inspect.
#[derive(Resource, Debug, Default)]
pub struct IncidentFlags {
    pub orbital_trader_arrivals: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pawn_ids_monotonic() {
        let mut ids = PawnIds::default();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(b > a);
    }

    #[test]
    fn letter_stack_appends() {
        let mut stack = LetterStack::default();
        stack.post("Gift", "A weapon has arrived.", LetterKind::Positive);
        stack.post("Raid", "They look familiar.", LetterKind::ThreatBig);
        assert_eq!(stack.letters.len(), 2);
        assert_eq!(stack.letters[1].kind, LetterKind::ThreatBig);
    }
}
