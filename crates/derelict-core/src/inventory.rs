//! Inventory engine — item use, backpack management, reloading.
//!
//! Item effects flow through the attribute ledger, so the amounts reported
//! back are the realized ones (a repair kit on a nearly-full suit reports
//! +1, not +2). A full backpack is a normal outcome: [`add_item`] returns
//! `false` and the item is gone, matching the tabletop rule.

use serde::{Deserialize, Serialize};

use derelict_logic::attributes::Attribute;
use derelict_logic::items::{
    Item, ItemKind, AMMO_CACHE_ROUNDS, OXYGEN_TANK_O2, PAINKILLER_STRESS, REPAIR_KIT_SUIT,
    VISOR_BONUS_DICE,
};

use crate::content::GameContent;
use crate::error::InventoryError;
use crate::session::SessionBundle;

/// The realized effect of using one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppliedEffect {
    SuitRepaired { amount: i32, suit_integrity: i32 },
    StressReduced { amount: i32, stress: i32 },
    OxygenRestored { amount: i32, oxygen: i32 },
    /// `weapon` is `None` when every weapon was already full.
    AmmoLoaded { weapon: Option<String>, amount: i32 },
    /// Extra dice armed for the next attack.
    VisorArmed { bonus_dice: u32 },
}

/// Result of using an item from the backpack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemUse {
    pub kind: ItemKind,
    pub effect: AppliedEffect,
    /// Whether the item ran out of uses and left the backpack.
    pub removed: bool,
}

/// Use the item at `index`, applying its effect and spending one use.
pub fn use_item(bundle: &mut SessionBundle, index: usize) -> Result<ItemUse, InventoryError> {
    let len = bundle.inventory.backpack.len();
    let kind = bundle
        .inventory
        .backpack
        .get(index)
        .map(|item| item.kind)
        .ok_or(InventoryError::ItemIndexOutOfRange { index, len })?;

    let effect = match kind {
        ItemKind::RepairKit => {
            let adj = bundle.attributes.adjust(Attribute::SuitIntegrity, REPAIR_KIT_SUIT);
            AppliedEffect::SuitRepaired {
                amount: adj.applied,
                suit_integrity: adj.value,
            }
        }
        ItemKind::Painkiller => {
            let adj = bundle.attributes.adjust(Attribute::Stress, -PAINKILLER_STRESS);
            AppliedEffect::StressReduced {
                amount: -adj.applied,
                stress: adj.value,
            }
        }
        ItemKind::Visor => {
            bundle.inventory.pending_precision_bonus += VISOR_BONUS_DICE;
            AppliedEffect::VisorArmed {
                bonus_dice: VISOR_BONUS_DICE,
            }
        }
        ItemKind::AmmoCache => {
            // Loads the first weapon that is not already full.
            let mut applied = AppliedEffect::AmmoLoaded {
                weapon: None,
                amount: 0,
            };
            for weapon in &mut bundle.inventory.weapons {
                if let (Some(ammo), Some(max)) = (weapon.ammo, weapon.ammo_max) {
                    if ammo < max {
                        let loaded = (ammo + AMMO_CACHE_ROUNDS).min(max);
                        weapon.ammo = Some(loaded);
                        applied = AppliedEffect::AmmoLoaded {
                            weapon: Some(weapon.name.clone()),
                            amount: loaded - ammo,
                        };
                        break;
                    }
                }
            }
            applied
        }
        ItemKind::OxygenTank => {
            let adj = bundle.attributes.adjust(Attribute::Oxygen, OXYGEN_TANK_O2);
            AppliedEffect::OxygenRestored {
                amount: adj.applied,
                oxygen: adj.value,
            }
        }
    };

    let removed = {
        let item = &mut bundle.inventory.backpack[index];
        item.uses_remaining -= 1;
        item.uses_remaining == 0
    };
    if removed {
        bundle.inventory.backpack.remove(index);
    }
    bundle.session.items_used += 1;

    Ok(ItemUse {
        kind,
        effect,
        removed,
    })
}

/// Add an item to the backpack. Returns `false` (and drops the item) when
/// the backpack is full.
pub fn add_item(bundle: &mut SessionBundle, content: &GameContent, item: Item) -> bool {
    if bundle.inventory.backpack.len() >= content.backpack_capacity {
        return false;
    }
    bundle.inventory.backpack.push(item);
    true
}

/// Load `amount` rounds into a weapon, clamped to its capacity. Returns
/// the new ammo count.
pub fn reload(
    bundle: &mut SessionBundle,
    weapon_name: &str,
    amount: i32,
) -> Result<i32, InventoryError> {
    if amount <= 0 {
        return Err(InventoryError::NonPositiveAmount(amount));
    }
    let weapon = bundle
        .inventory
        .weapon_mut(weapon_name)
        .ok_or_else(|| InventoryError::WeaponNotFound(weapon_name.to_string()))?;
    match (weapon.ammo, weapon.ammo_max) {
        (Some(ammo), Some(max)) => {
            let loaded = (ammo + amount).min(max);
            weapon.ammo = Some(loaded);
            Ok(loaded)
        }
        _ => Err(InventoryError::NoAmmoMechanism(weapon_name.to_string())),
    }
}

/// Set every ammo-using weapon to its maximum (the armory effect).
pub fn reload_all(bundle: &mut SessionBundle) {
    for weapon in &mut bundle.inventory.weapons {
        if let Some(max) = weapon.ammo_max {
            weapon.ammo = Some(max);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use derelict_logic::difficulty::Difficulty;
    use derelict_logic::weapons::CROWBAR;

    fn bundle() -> (SessionBundle, GameContent) {
        let content = GameContent::standard();
        (
            SessionBundle::create(1, 1, Difficulty::Normal, &content),
            content,
        )
    }

    fn stock(bundle: &mut SessionBundle, kind: ItemKind) {
        bundle.inventory.backpack.push(Item::new(kind));
    }

    #[test]
    fn test_use_item_out_of_range() {
        let (mut b, _) = bundle();
        assert_eq!(
            use_item(&mut b, 0),
            Err(InventoryError::ItemIndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_painkiller_reports_realized_amount() {
        let (mut b, _) = bundle();
        // Stress starts at 1 on Normal; a painkiller can only remove 1.
        stock(&mut b, ItemKind::Painkiller);
        let used = use_item(&mut b, 0).unwrap();
        assert_eq!(
            used.effect,
            AppliedEffect::StressReduced {
                amount: 1,
                stress: 0
            }
        );
        assert!(used.removed);
        assert!(b.inventory.backpack.is_empty());
        assert_eq!(b.session.items_used, 1);
    }

    #[test]
    fn test_repair_kit_caps_at_suit_max() {
        let (mut b, _) = bundle();
        b.attributes.suit_integrity = 5;
        stock(&mut b, ItemKind::RepairKit);
        let used = use_item(&mut b, 0).unwrap();
        assert_eq!(
            used.effect,
            AppliedEffect::SuitRepaired {
                amount: 1,
                suit_integrity: 6
            }
        );
    }

    #[test]
    fn test_visor_persists_until_spent() {
        let (mut b, _) = bundle();
        stock(&mut b, ItemKind::Visor);
        for expected_left in [2, 1, 0] {
            let used = use_item(&mut b, 0).unwrap();
            assert_eq!(used.effect, AppliedEffect::VisorArmed { bonus_dice: 1 });
            assert_eq!(used.removed, expected_left == 0);
            if !used.removed {
                assert_eq!(b.inventory.backpack[0].uses_remaining, expected_left);
            }
        }
        assert!(b.inventory.backpack.is_empty());
        assert_eq!(b.inventory.pending_precision_bonus, 3);
    }

    #[test]
    fn test_ammo_cache_targets_first_non_full_weapon() {
        let (mut b, _) = bundle();
        if let Some(weapon) = b.inventory.weapon_mut("Pistola de Plasma") {
            weapon.ammo = Some(1);
        }
        stock(&mut b, ItemKind::AmmoCache);
        let used = use_item(&mut b, 0).unwrap();
        assert_eq!(
            used.effect,
            AppliedEffect::AmmoLoaded {
                weapon: Some("Pistola de Plasma".to_string()),
                amount: 2
            }
        );
        assert_eq!(b.inventory.weapon("Pistola de Plasma").unwrap().ammo, Some(3));
    }

    #[test]
    fn test_ammo_cache_with_everything_full() {
        let (mut b, _) = bundle();
        stock(&mut b, ItemKind::AmmoCache);
        let used = use_item(&mut b, 0).unwrap();
        assert_eq!(
            used.effect,
            AppliedEffect::AmmoLoaded {
                weapon: None,
                amount: 0
            }
        );
    }

    #[test]
    fn test_backpack_capacity_is_five() {
        let (mut b, content) = bundle();
        for _ in 0..5 {
            assert!(add_item(&mut b, &content, Item::new(ItemKind::OxygenTank)));
        }
        assert!(!add_item(&mut b, &content, Item::new(ItemKind::Visor)));
        assert_eq!(b.inventory.backpack.len(), 5);
    }

    #[test]
    fn test_reload_clamps_to_max() {
        let (mut b, _) = bundle();
        if let Some(weapon) = b.inventory.weapon_mut("Aguijón") {
            weapon.ammo = Some(0);
        }
        assert_eq!(reload(&mut b, "Aguijón", 10), Ok(3));
    }

    #[test]
    fn test_reload_errors() {
        let (mut b, _) = bundle();
        assert_eq!(
            reload(&mut b, "Aguijón", 0),
            Err(InventoryError::NonPositiveAmount(0))
        );
        assert_eq!(
            reload(&mut b, "Cañón", 2),
            Err(InventoryError::WeaponNotFound("Cañón".to_string()))
        );
        assert_eq!(
            reload(&mut b, CROWBAR, 2),
            Err(InventoryError::NoAmmoMechanism(CROWBAR.to_string()))
        );
    }

    #[test]
    fn test_reload_all_fills_everything() {
        let (mut b, _) = bundle();
        for weapon in &mut b.inventory.weapons {
            if weapon.ammo.is_some() {
                weapon.ammo = Some(0);
            }
        }
        reload_all(&mut b);
        for weapon in &b.inventory.weapons {
            assert_eq!(weapon.ammo, weapon.ammo_max);
        }
    }
}
