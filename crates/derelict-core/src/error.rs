//! Closed error taxonomy.
//!
//! Every component reports failure through its own tagged enum; the
//! orchestrator unifies them into [`SessionError`]. Callers switch on
//! variants, never on message text. A failed operation leaves the session
//! bundle untouched — validation happens before any mutation.
//!
//! Two deliberate non-errors: a full backpack (a `bool` result flag) and
//! oxygen exhaustion (a valid terminal transition to Defeat).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Why a move was rejected, in validation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// Target coordinates are outside the map.
    OutOfBounds { x: i32, y: i32 },
    /// Target cell can never be entered.
    Inaccessible,
    /// Target is a locked door and the captain holds too few codes.
    DoorLocked { required: u32, held: u32 },
    /// Movement is blocked entirely while an encounter is active.
    EncounterActive,
    /// Target is neither adjacent nor previously explored.
    NotReachable,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfBounds { x, y } => {
                write!(f, "cell ({x}, {y}) is outside the map")
            }
            MoveRejection::Inaccessible => write!(f, "cell is inaccessible"),
            MoveRejection::DoorLocked { required, held } => {
                write!(f, "door requires {required} activation codes, holding {held}")
            }
            MoveRejection::EncounterActive => {
                write!(f, "an encounter is active; resolve it before moving")
            }
            MoveRejection::NotReachable => {
                write!(f, "cell is neither adjacent nor previously explored")
            }
        }
    }
}

/// Encounter engine failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatError {
    EncounterAlreadyActive,
    UnknownAlienType(String),
    NoActiveEncounter,
    WeaponNotFound(String),
    WeaponOutOfAmmo(String),
}

impl fmt::Display for CombatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CombatError::EncounterAlreadyActive => write!(f, "an encounter is already active"),
            CombatError::UnknownAlienType(id) => write!(f, "unknown alien type '{id}'"),
            CombatError::NoActiveEncounter => write!(f, "no active encounter"),
            CombatError::WeaponNotFound(name) => write!(f, "weapon '{name}' not found"),
            CombatError::WeaponOutOfAmmo(name) => write!(f, "weapon '{name}' is out of ammo"),
        }
    }
}

/// Inventory engine failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InventoryError {
    ItemIndexOutOfRange { index: usize, len: usize },
    WeaponNotFound(String),
    /// The weapon has no ammo mechanism to reload.
    NoAmmoMechanism(String),
    NonPositiveAmount(i32),
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::ItemIndexOutOfRange { index, len } => {
                write!(f, "item index {index} out of range (backpack holds {len})")
            }
            InventoryError::WeaponNotFound(name) => write!(f, "weapon '{name}' not found"),
            InventoryError::NoAmmoMechanism(name) => {
                write!(f, "weapon '{name}' does not use ammo")
            }
            InventoryError::NonPositiveAmount(amount) => {
                write!(f, "amount must be positive, got {amount}")
            }
        }
    }
}

/// Progress tracker failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgressError {
    UnknownAchievement(String),
    UnknownEvent(u32),
    UnknownEventOption { event: u32, option: String },
}

impl fmt::Display for ProgressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProgressError::UnknownAchievement(name) => {
                write!(f, "achievement '{name}' is not in the registry")
            }
            ProgressError::UnknownEvent(id) => write!(f, "event {id} is not in the table"),
            ProgressError::UnknownEventOption { event, option } => {
                write!(f, "event {event} has no option '{option}'")
            }
        }
    }
}

/// Repository boundary failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepositoryError {
    /// The stored session changed underneath this save.
    Conflict,
}

impl fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryError::Conflict => write!(f, "session save conflict"),
        }
    }
}

/// Unified error surfaced by the session orchestrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionError {
    /// No session with that id.
    NotFound,
    /// The acting player does not own the session.
    NotOwner,
    /// The session already ended in victory or defeat.
    NotActive,
    /// Sacrifice requested with no passengers in the group.
    NoPassengerAvailable,
    Move(MoveRejection),
    Combat(CombatError),
    Inventory(InventoryError),
    Progress(ProgressError),
    Storage(RepositoryError),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NotFound => write!(f, "session not found"),
            SessionError::NotOwner => write!(f, "session belongs to another player"),
            SessionError::NotActive => write!(f, "session has already ended"),
            SessionError::NoPassengerAvailable => write!(f, "no passenger to sacrifice"),
            SessionError::Move(e) => write!(f, "move rejected: {e}"),
            SessionError::Combat(e) => write!(f, "combat: {e}"),
            SessionError::Inventory(e) => write!(f, "inventory: {e}"),
            SessionError::Progress(e) => write!(f, "progress: {e}"),
            SessionError::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<MoveRejection> for SessionError {
    fn from(e: MoveRejection) -> Self {
        SessionError::Move(e)
    }
}

impl From<CombatError> for SessionError {
    fn from(e: CombatError) -> Self {
        SessionError::Combat(e)
    }
}

impl From<InventoryError> for SessionError {
    fn from(e: InventoryError) -> Self {
        SessionError::Inventory(e)
    }
}

impl From<ProgressError> for SessionError {
    fn from(e: ProgressError) -> Self {
        SessionError::Progress(e)
    }
}

impl From<RepositoryError> for SessionError {
    fn from(e: RepositoryError) -> Self {
        SessionError::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_human_readable() {
        let e = SessionError::Move(MoveRejection::DoorLocked { required: 4, held: 1 });
        assert!(e.to_string().contains("4 activation codes"));
    }

    #[test]
    fn test_from_conversions() {
        let e: SessionError = CombatError::NoActiveEncounter.into();
        assert_eq!(e, SessionError::Combat(CombatError::NoActiveEncounter));
        let e: SessionError = RepositoryError::Conflict.into();
        assert_eq!(e, SessionError::Storage(RepositoryError::Conflict));
    }
}
