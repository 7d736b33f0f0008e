//! Hand-authored hex map of the derelict ship.
//!
//! A fixed 15-row layout of 92 cells with explicit per-cell adjacency
//! lists. The grid is irregular (rows widen and narrow with the hull), so
//! adjacency is authored data rather than a coordinate formula. Three
//! bulkhead doors and the escape bay are locked behind activation codes.
//!
//! The topology is read-only after construction; per-session exploration
//! state lives in the engine, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A cell position on the hex grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// What a cell is — determines its first-visit effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// The boarding point; explored from the start.
    Start,
    /// A plain room with no special effect.
    Explorable,
    /// Hull breach or debris; can never be entered.
    Inaccessible,
    /// A bulkhead door requiring activation codes to pass.
    LockedDoor,
    /// Restores oxygen on first visit.
    OxygenStation,
    /// Reloads every weapon on first visit.
    Armory,
    /// Holds one activation code.
    Control,
    /// Holds a random item.
    CargoBay,
    /// Triggers an entry from the event table.
    RandomEvent,
    /// The ship's security office.
    Security,
    /// The exit; victory once all codes are collected.
    EscapeBay,
}

/// One cell of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub coord: Coord,
    pub kind: CellKind,
    /// Whether entry requires activation codes.
    pub locked: bool,
    /// Codes needed to pass (0 when unlocked).
    pub required_codes: u32,
}

use CellKind as K;

/// The ship layout: kind, x, y, and the cells reachable in one move.
const LAYOUT: &[(CellKind, i32, i32, &[(i32, i32)])] = &[
    // Row 0 — boarding airlock
    (K::Start, 0, 0, &[(0, 1), (1, 1)]),
    // Row 1
    (K::Explorable, 0, 1, &[(0, 0), (1, 1), (0, 2), (1, 2)]),
    (K::Explorable, 1, 1, &[(0, 0), (0, 1), (1, 2), (2, 2)]),
    // Row 2
    (K::Explorable, 0, 2, &[(0, 1), (1, 3), (1, 2), (0, 3)]),
    (K::Explorable, 1, 2, &[(0, 1), (1, 1), (0, 2), (2, 2), (1, 3), (2, 3)]),
    (K::Explorable, 2, 2, &[(1, 1), (1, 2), (2, 3), (3, 3)]),
    // Row 3
    (K::Explorable, 0, 3, &[(0, 2), (1, 3), (1, 4), (0, 4)]),
    (K::Explorable, 1, 3, &[(1, 2), (0, 2), (0, 3), (2, 3), (2, 4), (1, 4)]),
    (K::Explorable, 2, 3, &[(1, 2), (2, 2), (1, 3), (3, 3), (3, 4), (2, 4)]),
    (K::Explorable, 3, 3, &[(2, 2), (2, 3), (4, 4), (3, 4)]),
    // Row 4
    (K::Explorable, 0, 4, &[(0, 3), (1, 4), (0, 5), (1, 5)]),
    (K::Explorable, 1, 4, &[(0, 3), (1, 3), (0, 4), (2, 4), (1, 5), (2, 5)]),
    (K::Explorable, 2, 4, &[(1, 3), (2, 3), (1, 4), (3, 4), (2, 5), (3, 5)]),
    (K::Explorable, 3, 4, &[(2, 3), (3, 3), (2, 4), (4, 4), (3, 5), (4, 5)]),
    (K::Explorable, 4, 4, &[(3, 3), (3, 4), (4, 5), (5, 5)]),
    // Row 5
    (K::RandomEvent, 0, 5, &[(0, 4), (1, 6), (1, 5), (0, 6)]),
    (K::Inaccessible, 1, 5, &[(0, 4), (1, 4), (0, 5), (2, 5), (2, 6), (1, 6)]),
    (K::Explorable, 2, 5, &[(1, 4), (2, 4), (1, 5), (3, 5), (3, 6), (2, 6)]),
    (K::Explorable, 3, 5, &[(2, 4), (3, 4), (2, 5), (4, 5), (4, 6), (3, 6)]),
    (K::Explorable, 4, 5, &[(3, 4), (4, 4), (3, 5), (5, 5), (4, 6), (5, 6)]),
    (K::RandomEvent, 5, 5, &[(4, 4), (4, 5), (5, 6), (6, 6)]),
    // Row 6
    (K::Explorable, 0, 6, &[(0, 5), (1, 7), (1, 6), (0, 7)]),
    (K::Explorable, 1, 6, &[(0, 5), (1, 5), (2, 7), (0, 6), (2, 6), (1, 7)]),
    (K::Inaccessible, 2, 6, &[(1, 5), (2, 5), (3, 7), (1, 6), (3, 6), (2, 7)]),
    (K::LockedDoor, 3, 6, &[(2, 5), (3, 5), (2, 6), (4, 6), (3, 7), (4, 7)]),
    (K::Inaccessible, 4, 6, &[(3, 5), (4, 5), (3, 6), (5, 6), (4, 7), (5, 7)]),
    (K::Explorable, 5, 6, &[(4, 5), (5, 5), (4, 6), (6, 6), (5, 7), (6, 7)]),
    (K::Explorable, 6, 6, &[(5, 5), (5, 6), (6, 7), (7, 7)]),
    // Row 7
    (K::Explorable, 0, 7, &[(0, 6), (1, 7), (1, 8), (2, 8)]),
    (K::OxygenStation, 1, 7, &[(0, 6), (1, 6), (0, 7), (2, 7), (2, 8), (3, 8)]),
    (K::Inaccessible, 2, 7, &[(1, 6), (2, 6), (1, 7), (3, 7), (3, 8), (4, 8)]),
    (K::Explorable, 3, 7, &[(2, 6), (3, 6), (2, 7), (4, 7), (4, 8), (5, 8)]),
    (K::Explorable, 4, 7, &[(3, 6), (4, 6), (3, 7), (5, 7), (5, 8), (6, 8)]),
    (K::Inaccessible, 5, 7, &[(4, 6), (5, 6), (4, 7), (6, 7), (6, 8), (7, 8)]),
    (K::Inaccessible, 6, 7, &[(5, 6), (6, 6), (5, 7), (7, 7), (7, 8), (8, 8)]),
    (K::LockedDoor, 7, 7, &[(6, 6), (6, 7), (8, 8), (9, 8)]),
    // Row 8
    (K::Explorable, 0, 8, &[(1, 8), (0, 9)]),
    (K::Explorable, 1, 8, &[(0, 7), (0, 8), (2, 8), (0, 9), (1, 9)]),
    (K::Explorable, 2, 8, &[(0, 7), (1, 7), (1, 8), (3, 8), (1, 9), (2, 9)]),
    (K::Inaccessible, 3, 8, &[(1, 7), (2, 7), (2, 8), (4, 8), (2, 9), (3, 9)]),
    (K::Armory, 4, 8, &[(2, 7), (3, 7), (3, 8), (5, 8), (3, 9), (4, 9)]),
    (K::Explorable, 5, 8, &[(3, 7), (4, 7), (4, 8), (6, 8), (4, 9), (5, 9)]),
    (K::Explorable, 6, 8, &[(4, 7), (5, 7), (5, 8), (7, 8), (5, 9), (6, 9)]),
    (K::Inaccessible, 7, 8, &[(5, 7), (6, 7), (6, 8), (8, 8), (6, 9), (7, 9)]),
    (K::Explorable, 8, 8, &[(6, 7), (7, 7), (7, 8), (9, 8), (7, 9), (8, 9)]),
    (K::Explorable, 9, 8, &[(7, 7), (8, 8), (10, 8), (8, 9), (9, 9)]),
    (K::Explorable, 10, 8, &[(9, 8), (9, 9)]),
    // Row 9
    (K::LockedDoor, 0, 9, &[(0, 8), (1, 8), (1, 9), (0, 10), (1, 10)]),
    (K::Explorable, 1, 9, &[(1, 8), (2, 8), (0, 9), (2, 9), (1, 10), (2, 10)]),
    (K::Inaccessible, 2, 9, &[(2, 8), (3, 8), (1, 9), (3, 9), (2, 10), (3, 10)]),
    (K::Inaccessible, 3, 9, &[(3, 8), (4, 8), (2, 9), (4, 9), (3, 10), (4, 10)]),
    (K::Inaccessible, 4, 9, &[(4, 8), (5, 8), (3, 9), (5, 9), (4, 10), (5, 10)]),
    (K::RandomEvent, 5, 9, &[(5, 8), (6, 8), (4, 9), (6, 9), (5, 10), (6, 10)]),
    (K::Inaccessible, 6, 9, &[(6, 8), (7, 8), (5, 9), (7, 9), (6, 10), (7, 10)]),
    (K::OxygenStation, 7, 9, &[(7, 8), (8, 8), (6, 9), (8, 9), (7, 10), (8, 10)]),
    (K::Explorable, 8, 9, &[(8, 8), (9, 8), (7, 9), (9, 9), (8, 10), (9, 10)]),
    (K::RandomEvent, 9, 9, &[(9, 8), (10, 8), (8, 9), (9, 10), (10, 10)]),
    // Row 10
    (K::Explorable, 0, 10, &[(0, 9), (1, 10), (0, 11)]),
    (K::Inaccessible, 1, 10, &[(0, 9), (1, 9), (0, 10), (2, 10), (0, 11), (1, 11)]),
    (K::Inaccessible, 2, 10, &[(1, 9), (2, 9), (1, 10), (3, 10), (1, 11), (2, 11)]),
    (K::Explorable, 3, 10, &[(2, 9), (3, 9), (2, 10), (4, 10), (2, 11), (3, 11)]),
    (K::CargoBay, 4, 10, &[(3, 9), (4, 9), (3, 10), (5, 10), (3, 11), (4, 11)]),
    (K::Inaccessible, 5, 10, &[(4, 9), (5, 9), (4, 10), (6, 10), (4, 11), (5, 11)]),
    (K::Control, 6, 10, &[(5, 9), (6, 9), (5, 10), (7, 10), (5, 11), (6, 11)]),
    (K::Inaccessible, 7, 10, &[(6, 9), (7, 9), (6, 10), (8, 10), (6, 11), (7, 11)]),
    (K::Explorable, 8, 10, &[(7, 9), (8, 9), (7, 10), (9, 10), (7, 11), (8, 11)]),
    (K::Explorable, 9, 10, &[(8, 9), (9, 9), (8, 10), (10, 10), (8, 11), (9, 11)]),
    (K::Security, 10, 10, &[(9, 9), (9, 10), (9, 11)]),
    // Row 11
    (K::Explorable, 0, 11, &[(0, 10), (1, 10), (1, 11)]),
    (K::RandomEvent, 1, 11, &[(1, 10), (2, 10), (0, 11), (2, 11), (0, 12)]),
    (K::Explorable, 2, 11, &[(2, 10), (3, 10), (1, 11), (3, 11), (0, 12), (1, 12)]),
    (K::Explorable, 3, 11, &[(3, 10), (4, 10), (2, 11), (4, 11), (1, 12), (2, 12)]),
    (K::Explorable, 4, 11, &[(4, 10), (5, 10), (3, 11), (5, 11), (2, 12), (3, 12)]),
    (K::Inaccessible, 5, 11, &[(5, 10), (6, 10), (4, 11), (6, 11), (3, 12), (4, 12)]),
    (K::Inaccessible, 6, 11, &[(6, 10), (7, 10), (5, 11), (7, 11), (4, 12), (5, 12)]),
    (K::Explorable, 7, 11, &[(7, 10), (8, 10), (6, 11), (8, 11), (5, 12), (6, 12)]),
    (K::Explorable, 8, 11, &[(8, 10), (9, 10), (7, 11), (9, 11), (6, 12)]),
    (K::Explorable, 9, 11, &[(9, 10), (10, 10), (8, 11)]),
    // Row 12
    (K::Explorable, 0, 12, &[(1, 11), (2, 11), (1, 12), (0, 13)]),
    (K::Explorable, 1, 12, &[(2, 11), (3, 11), (0, 12), (2, 12), (0, 13), (1, 13)]),
    (K::Explorable, 2, 12, &[(3, 11), (4, 11), (1, 12), (3, 12), (1, 13), (2, 13)]),
    (K::Explorable, 3, 12, &[(4, 11), (5, 11), (2, 12), (4, 12), (2, 13), (3, 13)]),
    (K::OxygenStation, 4, 12, &[(5, 11), (6, 11), (3, 12), (5, 12), (3, 13), (4, 13)]),
    (K::Inaccessible, 5, 12, &[(6, 11), (7, 11), (4, 12), (6, 12), (4, 13), (5, 13)]),
    (K::Armory, 6, 12, &[(7, 11), (8, 11), (5, 12), (5, 13)]),
    // Row 13
    (K::Inaccessible, 0, 13, &[(0, 12), (1, 12), (1, 13)]),
    (K::Explorable, 1, 13, &[(1, 12), (2, 12), (0, 13), (2, 13)]),
    (K::Explorable, 2, 13, &[(2, 12), (3, 12), (1, 13), (3, 13), (0, 14)]),
    (K::Explorable, 3, 13, &[(3, 12), (4, 12), (2, 13), (4, 13), (0, 14)]),
    (K::Explorable, 4, 13, &[(4, 12), (5, 12), (3, 13), (5, 13)]),
    (K::Inaccessible, 5, 13, &[(5, 12), (6, 12), (4, 13)]),
    // Row 14 — escape bay
    (K::EscapeBay, 0, 14, &[(2, 13), (3, 13)]),
];

/// Activation codes required at each locked cell.
const LOCKED_DOORS: &[(i32, i32, u32)] = &[(3, 6, 4), (7, 7, 1), (0, 9, 3), (0, 14, 6)];

/// The immutable ship map: cells plus the precomputed adjacency table.
#[derive(Debug, Clone)]
pub struct MapTopology {
    cells: BTreeMap<Coord, Cell>,
    adjacency: BTreeMap<Coord, Vec<Coord>>,
    start: Coord,
}

impl MapTopology {
    /// Build the fixed derelict-ship layout.
    pub fn derelict_ship() -> Self {
        let mut cells = BTreeMap::new();
        let mut adjacency = BTreeMap::new();

        for &(kind, x, y, adjacent) in LAYOUT {
            let coord = Coord::new(x, y);
            let required_codes = LOCKED_DOORS
                .iter()
                .find(|&&(dx, dy, _)| dx == x && dy == y)
                .map(|&(_, _, codes)| codes)
                .unwrap_or(0);
            cells.insert(
                coord,
                Cell {
                    coord,
                    kind,
                    locked: required_codes > 0,
                    required_codes,
                },
            );
            adjacency.insert(
                coord,
                adjacent.iter().map(|&(ax, ay)| Coord::new(ax, ay)).collect(),
            );
        }

        Self {
            cells,
            adjacency,
            start: Coord::new(0, 0),
        }
    }

    /// Build a topology from explicit parts. The shipping game only uses
    /// [`MapTopology::derelict_ship`]; this exists so engines can be
    /// exercised against alternate layouts.
    pub fn from_parts(parts: Vec<(Cell, Vec<Coord>)>, start: Coord) -> Self {
        let mut cells = BTreeMap::new();
        let mut adjacency = BTreeMap::new();
        for (cell, adjacent) in parts {
            cells.insert(cell.coord, cell);
            adjacency.insert(cell.coord, adjacent);
        }
        Self {
            cells,
            adjacency,
            start,
        }
    }

    /// The boarding cell, explored from the start of every session.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Look up a cell; `None` for coordinates outside the map.
    pub fn cell_at(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(&coord)
    }

    /// Cells reachable from `coord` in one move.
    pub fn adjacent(&self, coord: Coord) -> &[Coord] {
        self.adjacency.get(&coord).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total cells in the layout.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Codes needed to open the escape bay and win.
    pub fn codes_to_escape(&self) -> u32 {
        self.cells
            .values()
            .find(|c| c.kind == CellKind::EscapeBay)
            .map(|c| c.required_codes)
            .unwrap_or(0)
    }

    /// Iterate over all cells.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }
}
