//! Weapon roster and per-difficulty starting arsenal.
//!
//! Weapons are fixed at session creation: never added or removed, only
//! their ammo changes. `ammo == None` marks the one weapon with no ammo
//! mechanism (the Palanca), which can always fire.

use serde::{Deserialize, Serialize};

use crate::difficulty::Difficulty;

/// A weapon carried by the captain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    pub name: String,
    /// HP removed from the alien on a hit.
    pub damage: i32,
    /// Number of d6 rolled per attack.
    pub precision: u32,
    /// Current ammo; `None` means unlimited.
    pub ammo: Option<i32>,
    /// Ammo capacity; `None` means unlimited.
    pub ammo_max: Option<i32>,
}

impl Weapon {
    fn new(name: &str, damage: i32, precision: u32, ammo: Option<i32>) -> Self {
        Self {
            name: name.to_string(),
            damage,
            precision,
            ammo,
            ammo_max: ammo,
        }
    }

    /// Whether this weapon tracks ammo at all.
    pub fn uses_ammo(&self) -> bool {
        self.ammo.is_some()
    }

    /// Whether the weapon can fire right now.
    pub fn can_fire(&self) -> bool {
        match self.ammo {
            None => true,
            Some(a) => a > 0,
        }
    }
}

/// Name of the unlimited-ammo melee weapon.
pub const CROWBAR: &str = "Palanca";

/// The full five-weapon roster, in loadout order.
pub fn full_arsenal() -> Vec<Weapon> {
    vec![
        Weapon::new(CROWBAR, 1, 1, None),
        Weapon::new("Pistola de Plasma", 2, 3, Some(4)),
        Weapon::new("Aguijón", 3, 2, Some(3)),
        Weapon::new("Pistola Laser", 3, 3, Some(2)),
        Weapon::new("Blaster", 4, 2, Some(2)),
    ]
}

/// The starting arsenal for a difficulty tier. Harder tiers drop the
/// strongest weapons.
pub fn starting_arsenal(difficulty: Difficulty) -> Vec<Weapon> {
    let all = full_arsenal();
    match difficulty {
        Difficulty::VeryEasy => all,
        Difficulty::Normal => all.into_iter().filter(|w| w.name != "Blaster").collect(),
        Difficulty::Hard => all
            .into_iter()
            .filter(|w| w.name != "Blaster" && w.name != "Pistola Laser")
            .collect(),
        Difficulty::Insane => all
            .into_iter()
            .filter(|w| w.name == CROWBAR || w.name == "Pistola de Plasma")
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crowbar_is_unlimited() {
        let arsenal = full_arsenal();
        let crowbar = arsenal.iter().find(|w| w.name == CROWBAR).unwrap();
        assert!(!crowbar.uses_ammo());
        assert!(crowbar.can_fire());
    }

    #[test]
    fn test_ammo_weapons_start_full() {
        for w in full_arsenal() {
            if w.uses_ammo() {
                assert_eq!(w.ammo, w.ammo_max);
                assert!(w.can_fire());
            }
        }
    }

    #[test]
    fn test_arsenal_sizes_per_difficulty() {
        assert_eq!(starting_arsenal(Difficulty::VeryEasy).len(), 5);
        assert_eq!(starting_arsenal(Difficulty::Normal).len(), 4);
        assert_eq!(starting_arsenal(Difficulty::Hard).len(), 3);
        assert_eq!(starting_arsenal(Difficulty::Insane).len(), 2);
    }

    #[test]
    fn test_every_arsenal_keeps_the_crowbar() {
        for d in Difficulty::ALL {
            assert!(starting_arsenal(d).iter().any(|w| w.name == CROWBAR));
        }
    }

    #[test]
    fn test_plasma_pistol_stats() {
        let arsenal = starting_arsenal(Difficulty::Normal);
        let plasma = arsenal.iter().find(|w| w.name == "Pistola de Plasma").unwrap();
        assert_eq!(plasma.damage, 2);
        assert_eq!(plasma.precision, 3);
        assert_eq!(plasma.ammo, Some(4));
    }
}
