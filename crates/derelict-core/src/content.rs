//! Injected game content.
//!
//! The engines never reach for module-level tables: the spatial layout and
//! numeric tunables are bundled here and passed in at construction, so
//! tests can run alternate content (a different map, a cheaper oxygen
//! cost) without touching the engines.

use derelict_logic::items::BACKPACK_CAPACITY;
use derelict_logic::topology::MapTopology;

/// Immutable content configuration shared by every engine call.
#[derive(Debug, Clone)]
pub struct GameContent {
    /// The ship map.
    pub topology: MapTopology,
    /// Oxygen spent on each first visit to a cell.
    pub first_visit_oxygen_cost: i32,
    /// Oxygen recovered at an oxygen station.
    pub oxygen_station_refill: i32,
    /// Backpack slots.
    pub backpack_capacity: usize,
}

impl GameContent {
    /// The standard shipping content set.
    pub fn standard() -> Self {
        Self {
            topology: MapTopology::derelict_ship(),
            first_visit_oxygen_cost: 1,
            oxygen_station_refill: 3,
            backpack_capacity: BACKPACK_CAPACITY,
        }
    }
}
