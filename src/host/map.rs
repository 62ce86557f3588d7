use std::collections::BTreeSet;

use bevy_ecs::resource::Resource;
use rand::{Rng, RngCore};

/// A map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

const ADJACENT_8: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The current map: bounds, home area, and blocked cells.
///
/// The host owns terrain, buildings, and pathing; the reward handlers only
/// need standability and home-area queries, so that is all this models.
#[derive(Resource, Debug, Clone)]
pub struct Map {
    pub width: i32,
    pub height: i32,
    /// Whether this map is a player home (rewards require one).
    pub player_home: bool,
    home: BTreeSet<Cell>,
    blocked: BTreeSet<Cell>,
}

impl Map {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            player_home: false,
            home: BTreeSet::new(),
            blocked: BTreeSet::new(),
        }
    }

    pub fn in_bounds(&self, c: Cell) -> bool {
        c.x >= 0 && c.y >= 0 && c.x < self.width && c.y < self.height
    }

    pub fn standable(&self, c: Cell) -> bool {
        self.in_bounds(c) && !self.blocked.contains(&c)
    }

    pub fn block(&mut self, c: Cell) {
        self.blocked.insert(c);
    }

    pub fn add_home_cell(&mut self, c: Cell) {
        self.home.insert(c);
    }

    pub fn add_home_rect(&mut self, from: Cell, to: Cell) {
        for x in from.x..=to.x {
            for y in from.y..=to.y {
                self.home.insert(Cell::new(x, y));
            }
        }
    }

    pub fn home_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.home.iter().copied()
    }

    /// Random standable cell inside the home area.
    pub fn random_standable_home_cell(&self, rng: &mut dyn RngCore) -> Option<Cell> {
        let candidates: Vec<Cell> = self
            .home
            .iter()
            .copied()
            .filter(|c| self.standable(*c))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }

    /// Random standable cell on the map edge, where walk-in arrivals enter.
    pub fn random_edge_entry_cell(&self, rng: &mut dyn RngCore) -> Option<Cell> {
        let mut candidates = Vec::new();
        for x in 0..self.width {
            for y in [0, self.height - 1] {
                let c = Cell::new(x, y);
                if self.standable(c) {
                    candidates.push(c);
                }
            }
        }
        for y in 1..self.height - 1 {
            for x in [0, self.width - 1] {
                let c = Cell::new(x, y);
                if self.standable(c) {
                    candidates.push(c);
                }
            }
        }
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }

    /// A random 8-way neighbor, clamped to bounds. May be non-standable;
    /// callers that care should re-check.
    pub fn random_adjacent8(&self, c: Cell, rng: &mut dyn RngCore) -> Cell {
        let (dx, dy) = ADJACENT_8[rng.random_range(0..ADJACENT_8.len())];
        Cell::new(
            (c.x + dx).clamp(0, self.width - 1),
            (c.y + dy).clamp(0, self.height - 1),
        )
    }

    /// Random standable cell within a square radius of `center`.
    pub fn random_cell_near(
        &self,
        center: Cell,
        radius: i32,
        rng: &mut dyn RngCore,
    ) -> Option<Cell> {
        let candidates: Vec<Cell> = ((center.x - radius)..=(center.x + radius))
            .flat_map(|x| {
                ((center.y - radius)..=(center.y + radius)).map(move |y| Cell::new(x, y))
            })
            .filter(|c| self.standable(*c))
            .collect();
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.random_range(0..candidates.len())])
    }
}
