//! Encounter engine — the combat state machine.
//!
//! NoEncounter → Active → Resolved(Victory | Fled) → NoEncounter. At most
//! one encounter exists per session; movement is blocked while one is
//! active. Attacks roll the weapon's precision in d6 (plus any armed visor
//! bonus), ammo spends on misses too, and a kill notifies the progress
//! tracker before the state machine resets.

use rand::Rng;
use serde::{Deserialize, Serialize};

use derelict_logic::aliens::AlienKind;
use derelict_logic::combat::{self, DIE_SIDES};

use crate::error::CombatError;
use crate::progress;
use crate::session::{Encounter, SessionBundle};

/// What one attack did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackReport {
    pub weapon: String,
    pub hit: bool,
    pub dice: Vec<u32>,
    pub total: u32,
    pub damage_dealt: i32,
    pub remaining_hp: i32,
    pub alien_defeated: bool,
}

/// Begin an encounter with the given alien.
pub fn start(bundle: &mut SessionBundle, alien: AlienKind) -> Result<Encounter, CombatError> {
    if bundle.encounter.is_some() {
        return Err(CombatError::EncounterAlreadyActive);
    }
    let encounter = Encounter::new(alien);
    bundle.encounter = Some(encounter);
    Ok(encounter)
}

/// Attack the active alien with the named weapon.
pub fn resolve_attack(
    bundle: &mut SessionBundle,
    weapon_name: &str,
    rng: &mut impl Rng,
) -> Result<AttackReport, CombatError> {
    let encounter = bundle.encounter.ok_or(CombatError::NoActiveEncounter)?;

    let (damage, precision, uses_ammo) = {
        let weapon = bundle
            .inventory
            .weapon(weapon_name)
            .ok_or_else(|| CombatError::WeaponNotFound(weapon_name.to_string()))?;
        if weapon.uses_ammo() && !weapon.can_fire() {
            return Err(CombatError::WeaponOutOfAmmo(weapon.name.clone()));
        }
        (weapon.damage, weapon.precision, weapon.uses_ammo())
    };

    // The visor bonus is spent on this attack, hit or miss.
    let bonus = std::mem::take(&mut bundle.inventory.pending_precision_bonus);
    let count = combat::dice_count(precision, bonus);
    let dice: Vec<u32> = (0..count).map(|_| rng.gen_range(1..=DIE_SIDES)).collect();

    let stats = encounter.alien.stats();
    let outcome = combat::resolve(damage, stats.target_number, encounter.current_hp, &dice);

    // Ammo spends whether or not the attack connected.
    if uses_ammo {
        if let Some(weapon) = bundle.inventory.weapon_mut(weapon_name) {
            if let Some(ammo) = weapon.ammo.as_mut() {
                *ammo -= 1;
            }
        }
    }

    if outcome.alien_defeated {
        bundle.encounter = None;
        progress::record_alien_defeated(bundle, encounter.alien);
    } else if let Some(active) = bundle.encounter.as_mut() {
        active.current_hp = outcome.remaining_hp;
    }

    Ok(AttackReport {
        weapon: weapon_name.to_string(),
        hit: outcome.hit,
        dice: outcome.dice,
        total: outcome.total,
        damage_dealt: outcome.damage_dealt,
        remaining_hp: outcome.remaining_hp,
        alien_defeated: outcome.alien_defeated,
    })
}

/// Abandon the encounter. No penalty beyond the lost opportunity.
pub fn flee(bundle: &mut SessionBundle) -> Result<(), CombatError> {
    if bundle.encounter.is_none() {
        return Err(CombatError::NoActiveEncounter);
    }
    bundle.encounter = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::GameContent;
    use derelict_logic::difficulty::Difficulty;
    use derelict_logic::weapons::CROWBAR;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn bundle() -> SessionBundle {
        SessionBundle::create(1, 1, Difficulty::VeryEasy, &GameContent::standard())
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_single_active_encounter() {
        let mut b = bundle();
        start(&mut b, AlienKind::Spider).unwrap();
        assert_eq!(
            start(&mut b, AlienKind::Hound),
            Err(CombatError::EncounterAlreadyActive)
        );
    }

    #[test]
    fn test_attack_without_encounter() {
        let mut b = bundle();
        assert_eq!(
            resolve_attack(&mut b, CROWBAR, &mut rng()),
            Err(CombatError::NoActiveEncounter)
        );
    }

    #[test]
    fn test_unknown_weapon() {
        let mut b = bundle();
        start(&mut b, AlienKind::Spider).unwrap();
        assert_eq!(
            resolve_attack(&mut b, "Cañón", &mut rng()),
            Err(CombatError::WeaponNotFound("Cañón".to_string()))
        );
    }

    // Three plasma dice (minimum sum 3) always reach a spider's target
    // number of 3, and 2 damage always finishes its single hit point.
    #[test]
    fn test_plasma_always_fells_a_spider() {
        let mut b = bundle();
        start(&mut b, AlienKind::Spider).unwrap();
        let report = resolve_attack(&mut b, "Pistola de Plasma", &mut rng()).unwrap();
        assert!(report.hit);
        assert_eq!(report.dice.len(), 3);
        assert!(report.alien_defeated);
        assert_eq!(report.remaining_hp, 0);
        assert!(b.encounter.is_none());
        assert_eq!(b.progress.kills[&AlienKind::Spider], 1);
        assert_eq!(b.inventory.weapon("Pistola de Plasma").unwrap().ammo, Some(3));
        // State machine reset: a new encounter can start.
        assert!(start(&mut b, AlienKind::Hound).is_ok());
    }

    // One crowbar die (maximum 6) can never reach a rabid hound's target
    // number of 7.
    #[test]
    fn test_crowbar_never_reaches_a_rabid_hound() {
        let mut b = bundle();
        start(&mut b, AlienKind::RabidHound).unwrap();
        let report = resolve_attack(&mut b, CROWBAR, &mut rng()).unwrap();
        assert!(!report.hit);
        assert_eq!(report.damage_dealt, 0);
        assert_eq!(report.remaining_hp, 6);
        assert_eq!(b.encounter.unwrap().current_hp, 6);
        // Unlimited weapon: ammo field untouched.
        assert_eq!(b.inventory.weapon(CROWBAR).unwrap().ammo, None);
    }

    #[test]
    fn test_ammo_spends_on_every_attack() {
        let mut b = bundle();
        start(&mut b, AlienKind::Queen).unwrap();
        // Laser: 2 rounds, 3 damage; the queen's 8 hp survives two hits.
        resolve_attack(&mut b, "Pistola Laser", &mut rng()).unwrap();
        assert_eq!(b.inventory.weapon("Pistola Laser").unwrap().ammo, Some(1));
        resolve_attack(&mut b, "Pistola Laser", &mut rng()).unwrap();
        assert_eq!(b.inventory.weapon("Pistola Laser").unwrap().ammo, Some(0));
        assert_eq!(
            resolve_attack(&mut b, "Pistola Laser", &mut rng()),
            Err(CombatError::WeaponOutOfAmmo("Pistola Laser".to_string()))
        );
        assert!(b.encounter.is_some());
    }

    #[test]
    fn test_visor_bonus_is_consumed() {
        let mut b = bundle();
        b.inventory.pending_precision_bonus = 1;
        start(&mut b, AlienKind::RabidHound).unwrap();
        let report = resolve_attack(&mut b, CROWBAR, &mut rng()).unwrap();
        assert_eq!(report.dice.len(), 2);
        assert_eq!(b.inventory.pending_precision_bonus, 0);
        // The next attack is back to the bare weapon.
        let report = resolve_attack(&mut b, CROWBAR, &mut rng()).unwrap();
        assert_eq!(report.dice.len(), 1);
    }

    #[test]
    fn test_flee_clears_and_requires_encounter() {
        let mut b = bundle();
        assert_eq!(flee(&mut b), Err(CombatError::NoActiveEncounter));
        start(&mut b, AlienKind::Stalker).unwrap();
        assert_eq!(flee(&mut b), Ok(()));
        assert!(b.encounter.is_none());
        assert!(start(&mut b, AlienKind::Stalker).is_ok());
    }
}
