//! Difficulty tiers and their starting attribute values.
//!
//! Difficulty fixes the captain's starting suit integrity and stress and
//! the starting arsenal (see [`crate::weapons::starting_arsenal`]). Oxygen
//! always starts full.

use serde::{Deserialize, Serialize};

/// Difficulty of a game session, chosen at creation and never changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    VeryEasy,
    Normal,
    Hard,
    Insane,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::VeryEasy,
        Difficulty::Normal,
        Difficulty::Hard,
        Difficulty::Insane,
    ];

    /// Starting suit integrity.
    pub fn starting_suit(self) -> i32 {
        match self {
            Difficulty::VeryEasy => 6,
            Difficulty::Normal => 4,
            Difficulty::Hard => 3,
            Difficulty::Insane => 2,
        }
    }

    /// Starting stress.
    pub fn starting_stress(self) -> i32 {
        match self {
            Difficulty::VeryEasy => 0,
            Difficulty::Normal => 1,
            Difficulty::Hard => 2,
            Difficulty::Insane => 3,
        }
    }

    /// Display name as shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            Difficulty::VeryEasy => "MUY_FACIL",
            Difficulty::Normal => "NORMAL",
            Difficulty::Hard => "DIFICIL",
            Difficulty::Insane => "LOCURA",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Difficulty::ALL.into_iter().find(|d| d.name() == name)
    }
}
