//! The fixed alien roster.
//!
//! Seven kinds with hand-authored stats. The four basic kinds spawn from
//! random encounters while re-walking explored rooms; the three elite
//! variants only appear through the event table.

use serde::{Deserialize, Serialize};

/// The closed set of alien kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlienKind {
    Spider,
    MonstrousSpider,
    Hound,
    RabidHound,
    Stalker,
    Queen,
    BlackQueen,
}

/// Combat stats for one alien kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlienStats {
    pub name: &'static str,
    /// Suit damage the alien deals per hit (applied client-side).
    pub damage: i32,
    /// Minimum dice sum for the captain's attack to connect.
    pub target_number: u32,
    pub max_hp: i32,
}

impl AlienKind {
    pub const ALL: [AlienKind; 7] = [
        AlienKind::Spider,
        AlienKind::MonstrousSpider,
        AlienKind::Hound,
        AlienKind::RabidHound,
        AlienKind::Stalker,
        AlienKind::Queen,
        AlienKind::BlackQueen,
    ];

    /// Kinds eligible for random spawns in already-explored rooms.
    pub const RANDOM_POOL: [AlienKind; 4] = [
        AlienKind::Spider,
        AlienKind::Hound,
        AlienKind::Stalker,
        AlienKind::Queen,
    ];

    pub fn stats(self) -> AlienStats {
        match self {
            AlienKind::Spider => AlienStats {
                name: "Araña",
                damage: 1,
                target_number: 3,
                max_hp: 1,
            },
            AlienKind::MonstrousSpider => AlienStats {
                name: "Araña Monstruosa",
                damage: 2,
                target_number: 4,
                max_hp: 3,
            },
            AlienKind::Hound => AlienStats {
                name: "Sabueso",
                damage: 2,
                target_number: 5,
                max_hp: 2,
            },
            AlienKind::RabidHound => AlienStats {
                name: "Sabueso Rabioso",
                damage: 4,
                target_number: 7,
                max_hp: 6,
            },
            AlienKind::Stalker => AlienStats {
                name: "Rastreador",
                damage: 3,
                target_number: 6,
                max_hp: 4,
            },
            AlienKind::Queen => AlienStats {
                name: "Reina",
                damage: 3,
                target_number: 8,
                max_hp: 8,
            },
            AlienKind::BlackQueen => AlienStats {
                name: "Reina Negra",
                damage: 4,
                target_number: 9,
                max_hp: 10,
            },
        }
    }

    /// Wire identifier used by clients ("arana", "reina_negra", ...).
    pub fn id(self) -> &'static str {
        match self {
            AlienKind::Spider => "arana",
            AlienKind::MonstrousSpider => "arana_monstruosa",
            AlienKind::Hound => "sabueso",
            AlienKind::RabidHound => "sabueso_rabioso",
            AlienKind::Stalker => "rastreador",
            AlienKind::Queen => "reina",
            AlienKind::BlackQueen => "reina_negra",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        AlienKind::ALL.into_iter().find(|k| k.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_roundtrip() {
        for kind in AlienKind::ALL {
            assert_eq!(AlienKind::from_id(kind.id()), Some(kind));
        }
        assert!(AlienKind::from_id("xenomorfo").is_none());
    }

    #[test]
    fn test_random_pool_is_basic_kinds_only() {
        for kind in AlienKind::RANDOM_POOL {
            assert!(!matches!(
                kind,
                AlienKind::MonstrousSpider | AlienKind::RabidHound | AlienKind::BlackQueen
            ));
        }
    }

    #[test]
    fn test_stats_are_positive() {
        for kind in AlienKind::ALL {
            let stats = kind.stats();
            assert!(stats.damage > 0);
            assert!(stats.target_number >= 3);
            assert!(stats.max_hp > 0);
        }
    }

    #[test]
    fn test_black_queen_is_the_toughest() {
        let bq = AlienKind::BlackQueen.stats();
        for kind in AlienKind::ALL {
            let s = kind.stats();
            assert!(s.max_hp <= bq.max_hp);
            assert!(s.target_number <= bq.target_number);
        }
    }
}
