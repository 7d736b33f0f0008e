//! Session state — everything one game run owns.
//!
//! A [`SessionBundle`] is the unit the engines operate on and the
//! repository persists: the session record plus its captain attributes,
//! map state, inventory, optional encounter, and progress, created
//! together and never individually destroyed. A session ends by status
//! transition, not deletion.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use derelict_logic::achievements::Achievement;
use derelict_logic::aliens::AlienKind;
use derelict_logic::attributes::CaptainAttributes;
use derelict_logic::difficulty::Difficulty;
use derelict_logic::items::Item;
use derelict_logic::topology::Coord;
use derelict_logic::weapons::{self, Weapon};

use crate::content::GameContent;

pub type SessionId = u64;
pub type ActorId = u64;

/// Lifecycle state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionStatus {
    Active,
    Victory,
    Defeat,
}

/// The session record: ownership, difficulty, and run counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: SessionId,
    pub owner: ActorId,
    pub difficulty: Difficulty,
    pub status: SessionStatus,
    pub activation_codes: u32,
    pub passengers: u32,
    pub passengers_sacrificed: u32,
    pub items_used: u32,
}

/// Per-session view of the map: where the captain stands and which cells
/// have been explored. The explored set only ever grows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapState {
    pub current_position: Coord,
    pub explored: BTreeSet<Coord>,
}

impl MapState {
    /// Fresh map state at the boarding cell, which starts explored.
    pub fn new(start: Coord) -> Self {
        let mut explored = BTreeSet::new();
        explored.insert(start);
        Self {
            current_position: start,
            explored,
        }
    }

    pub fn is_explored(&self, coord: Coord) -> bool {
        self.explored.contains(&coord)
    }
}

/// Weapons and backpack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    /// Fixed at creation; only ammo changes.
    pub weapons: Vec<Weapon>,
    /// Capacity-bounded, in pickup order.
    pub backpack: Vec<Item>,
    /// Extra dice armed by the Visor, consumed by the next attack.
    pub pending_precision_bonus: u32,
}

impl Inventory {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            weapons: weapons::starting_arsenal(difficulty),
            backpack: Vec::new(),
            pending_precision_bonus: 0,
        }
    }

    pub fn weapon(&self, name: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.name == name)
    }

    pub fn weapon_mut(&mut self, name: &str) -> Option<&mut Weapon> {
        self.weapons.iter_mut().find(|w| w.name == name)
    }
}

/// The active combat sub-state, at most one per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encounter {
    pub alien: AlienKind,
    pub current_hp: i32,
}

impl Encounter {
    pub fn new(alien: AlienKind) -> Self {
        Self {
            alien,
            current_hp: alien.stats().max_hp,
        }
    }
}

/// Completed events, kill counters, and unlocked achievements.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    pub completed_events: BTreeSet<u32>,
    pub kills: BTreeMap<AlienKind, u32>,
    pub achievements: BTreeSet<Achievement>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unlocked(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// Idempotently set an achievement flag. Returns whether it was newly
    /// unlocked.
    pub fn unlock(&mut self, achievement: Achievement) -> bool {
        self.achievements.insert(achievement)
    }

    pub fn unlocked_count(&self) -> usize {
        self.achievements.len()
    }
}

/// All state of one game run, loaded and saved as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionBundle {
    pub session: Session,
    pub attributes: CaptainAttributes,
    pub map: MapState,
    pub inventory: Inventory,
    pub encounter: Option<Encounter>,
    pub progress: Progress,
}

impl SessionBundle {
    /// Create a fresh session with all sub-records allocated together.
    pub fn create(
        session_id: SessionId,
        owner: ActorId,
        difficulty: Difficulty,
        content: &GameContent,
    ) -> Self {
        Self {
            session: Session {
                session_id,
                owner,
                difficulty,
                status: SessionStatus::Active,
                activation_codes: 0,
                passengers: 0,
                passengers_sacrificed: 0,
                items_used: 0,
            },
            attributes: CaptainAttributes::new(
                difficulty.starting_suit(),
                difficulty.starting_stress(),
            ),
            map: MapState::new(content.topology.start()),
            inventory: Inventory::new(difficulty),
            encounter: None,
            progress: Progress::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.session.status == SessionStatus::Active
    }
}
