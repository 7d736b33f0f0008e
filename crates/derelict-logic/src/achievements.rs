//! Achievement registry, unlock thresholds, and rank computation.
//!
//! The registry is a closed 15-entry set. Achievements only ever flip from
//! locked to unlocked; rank is derived on demand from the unlock count and
//! never stored.

use serde::{Deserialize, Serialize};

use crate::aliens::AlienKind;
use crate::difficulty::Difficulty;

/// Distinct completed events needed for MEMORIAS.
pub const EVENTS_FOR_MEMORIAS: usize = 10;
/// Activation codes needed for DESCIFRADOR (all of them).
pub const CODES_FOR_DESCIFRADOR: u32 = 6;

/// The closed achievement registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    Pacificador,
    Descifrador,
    Aracnofobico,
    Cazador,
    Rastreador,
    Guerrero,
    Acumulador,
    Exterminador,
    Domador,
    Oscuridad,
    Memorias,
    Nervioso,
    Normal,
    Duro,
    Loco,
}

impl Achievement {
    pub const ALL: [Achievement; 15] = [
        Achievement::Pacificador,
        Achievement::Descifrador,
        Achievement::Aracnofobico,
        Achievement::Cazador,
        Achievement::Rastreador,
        Achievement::Guerrero,
        Achievement::Acumulador,
        Achievement::Exterminador,
        Achievement::Domador,
        Achievement::Oscuridad,
        Achievement::Memorias,
        Achievement::Nervioso,
        Achievement::Normal,
        Achievement::Duro,
        Achievement::Loco,
    ];

    /// Registry name as shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            Achievement::Pacificador => "PACIFICADOR",
            Achievement::Descifrador => "DESCIFRADOR",
            Achievement::Aracnofobico => "ARACNOFOBICO",
            Achievement::Cazador => "CAZADOR",
            Achievement::Rastreador => "RASTREADOR",
            Achievement::Guerrero => "GUERRERO",
            Achievement::Acumulador => "ACUMULADOR",
            Achievement::Exterminador => "EXTERMINADOR",
            Achievement::Domador => "DOMADOR",
            Achievement::Oscuridad => "OSCURIDAD",
            Achievement::Memorias => "MEMORIAS",
            Achievement::Nervioso => "NERVIOSO",
            Achievement::Normal => "NORMAL",
            Achievement::Duro => "DURO",
            Achievement::Loco => "LOCO",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Achievement::ALL.into_iter().find(|a| a.name() == name)
    }
}

/// The achievement earned by defeating `kills` aliens of `kind`, if the
/// threshold has been reached.
pub fn kill_achievement(kind: AlienKind, kills: u32) -> Option<Achievement> {
    let (threshold, achievement) = match kind {
        AlienKind::Spider => (10, Achievement::Aracnofobico),
        AlienKind::Hound => (8, Achievement::Cazador),
        AlienKind::Stalker => (6, Achievement::Rastreador),
        AlienKind::Queen => (4, Achievement::Guerrero),
        AlienKind::MonstrousSpider => (1, Achievement::Exterminador),
        AlienKind::RabidHound => (1, Achievement::Domador),
        AlienKind::BlackQueen => (1, Achievement::Oscuridad),
    };
    (kills >= threshold).then_some(achievement)
}

/// Difficulty-tier achievements granted on completing a run. Each harder
/// tier also grants all easier-tier flags.
pub fn difficulty_achievements(difficulty: Difficulty) -> &'static [Achievement] {
    match difficulty {
        Difficulty::VeryEasy => &[],
        Difficulty::Normal => &[Achievement::Normal],
        Difficulty::Hard => &[Achievement::Normal, Achievement::Duro],
        Difficulty::Insane => &[Achievement::Normal, Achievement::Duro, Achievement::Loco],
    }
}

/// Player rank, derived from the number of unlocked achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Cadet,
    Officer,
    Captain,
    Major,
    Admiral,
    General,
}

impl Rank {
    pub fn name(self) -> &'static str {
        match self {
            Rank::Cadet => "CADETE",
            Rank::Officer => "OFICIAL",
            Rank::Captain => "CAPITAN",
            Rank::Major => "MAYOR",
            Rank::Admiral => "ALMIRANTE",
            Rank::General => "GENERAL",
        }
    }
}

/// Rank for a given unlock count.
pub fn compute_rank(unlocked: usize) -> Rank {
    if unlocked >= 9 {
        Rank::General
    } else if unlocked >= 8 {
        Rank::Admiral
    } else if unlocked >= 6 {
        Rank::Major
    } else if unlocked >= 4 {
        Rank::Captain
    } else if unlocked >= 2 {
        Rank::Officer
    } else {
        Rank::Cadet
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names_roundtrip() {
        for a in Achievement::ALL {
            assert_eq!(Achievement::from_name(a.name()), Some(a));
        }
        assert!(Achievement::from_name("INVENCIBLE").is_none());
    }

    #[test]
    fn test_kill_thresholds() {
        assert_eq!(kill_achievement(AlienKind::Spider, 9), None);
        assert_eq!(
            kill_achievement(AlienKind::Spider, 10),
            Some(Achievement::Aracnofobico)
        );
        assert_eq!(
            kill_achievement(AlienKind::Hound, 8),
            Some(Achievement::Cazador)
        );
        assert_eq!(
            kill_achievement(AlienKind::Stalker, 6),
            Some(Achievement::Rastreador)
        );
        assert_eq!(
            kill_achievement(AlienKind::Queen, 4),
            Some(Achievement::Guerrero)
        );
    }

    #[test]
    fn test_elite_kinds_unlock_on_first_kill() {
        assert_eq!(
            kill_achievement(AlienKind::MonstrousSpider, 1),
            Some(Achievement::Exterminador)
        );
        assert_eq!(
            kill_achievement(AlienKind::RabidHound, 1),
            Some(Achievement::Domador)
        );
        assert_eq!(
            kill_achievement(AlienKind::BlackQueen, 1),
            Some(Achievement::Oscuridad)
        );
    }

    #[test]
    fn test_difficulty_ladder() {
        assert!(difficulty_achievements(Difficulty::VeryEasy).is_empty());
        assert_eq!(difficulty_achievements(Difficulty::Normal).len(), 1);
        assert_eq!(difficulty_achievements(Difficulty::Hard).len(), 2);
        assert_eq!(difficulty_achievements(Difficulty::Insane).len(), 3);
    }

    #[test]
    fn test_rank_tiers() {
        assert_eq!(compute_rank(0), Rank::Cadet);
        assert_eq!(compute_rank(1), Rank::Cadet);
        assert_eq!(compute_rank(2), Rank::Officer);
        assert_eq!(compute_rank(4), Rank::Captain);
        assert_eq!(compute_rank(6), Rank::Major);
        assert_eq!(compute_rank(8), Rank::Admiral);
        assert_eq!(compute_rank(9), Rank::General);
        assert_eq!(compute_rank(15), Rank::General);
    }
}
