//! The fixed five-item consumable table and backpack rules.
//!
//! Items live in a capacity-bounded backpack in pickup order. Each use
//! decrements `uses_remaining`; the item disappears the instant it hits 0.
//! The effects themselves are applied by the inventory engine — this
//! module only describes them.

use serde::{Deserialize, Serialize};

/// Backpack capacity. Picking up beyond this silently drops the item —
/// a normal game outcome, not an error.
pub const BACKPACK_CAPACITY: usize = 5;

/// Suit points restored by a Kit de Reparación.
pub const REPAIR_KIT_SUIT: i32 = 2;
/// Stress removed by an Analgésico.
pub const PAINKILLER_STRESS: i32 = 2;
/// Extra dice granted by a Visor on the next attack.
pub const VISOR_BONUS_DICE: u32 = 1;
/// Rounds loaded by a Munición cache.
pub const AMMO_CACHE_ROUNDS: i32 = 2;
/// Oxygen restored by a Tanque de O2.
pub const OXYGEN_TANK_O2: i32 = 3;

/// The closed set of consumable item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ItemKind {
    RepairKit,
    Painkiller,
    Visor,
    AmmoCache,
    OxygenTank,
}

impl ItemKind {
    pub const ALL: [ItemKind; 5] = [
        ItemKind::RepairKit,
        ItemKind::Painkiller,
        ItemKind::Visor,
        ItemKind::AmmoCache,
        ItemKind::OxygenTank,
    ];

    /// Display name as shown to the player.
    pub fn name(self) -> &'static str {
        match self {
            ItemKind::RepairKit => "Kit de Reparación",
            ItemKind::Painkiller => "Analgésico",
            ItemKind::Visor => "Visor",
            ItemKind::AmmoCache => "Munición",
            ItemKind::OxygenTank => "Tanque de O2",
        }
    }

    /// Short effect description.
    pub fn effect_text(self) -> &'static str {
        match self {
            ItemKind::RepairKit => "Repara 2 puntos de traje",
            ItemKind::Painkiller => "Reduce 2 puntos de estrés",
            ItemKind::Visor => "Añade +1 a la precisión del arma",
            ItemKind::AmmoCache => "Recarga 2 municiones de un arma",
            ItemKind::OxygenTank => "Recupera 3 puntos de oxígeno",
        }
    }

    /// How many uses a freshly found item carries.
    pub fn initial_uses(self) -> u32 {
        match self {
            ItemKind::Visor => 3,
            _ => 1,
        }
    }
}

/// A consumable in the backpack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub uses_remaining: u32,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            uses_remaining: kind.initial_uses(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visor_has_three_uses() {
        assert_eq!(Item::new(ItemKind::Visor).uses_remaining, 3);
    }

    #[test]
    fn test_single_use_items() {
        for kind in [
            ItemKind::RepairKit,
            ItemKind::Painkiller,
            ItemKind::AmmoCache,
            ItemKind::OxygenTank,
        ] {
            assert_eq!(Item::new(kind).uses_remaining, 1);
        }
    }

    #[test]
    fn test_names_are_distinct() {
        for a in ItemKind::ALL {
            for b in ItemKind::ALL {
                if a != b {
                    assert_ne!(a.name(), b.name());
                }
            }
        }
    }
}
