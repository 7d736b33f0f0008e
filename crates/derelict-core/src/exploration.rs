//! Exploration engine — movement validation and the cell-visit state
//! machine.
//!
//! [`validate_move`] applies the rejection rules in a fixed priority
//! order: out of bounds, inaccessible, locked door, active encounter,
//! unreachable. [`visit_cell`] re-validates, moves the captain, then
//! branches on first visit (oxygen cost + room effect) versus revisit
//! (a d6 decides between an ambush, a calm room, and a rescue).
//!
//! First visits spend oxygen before the room effect applies: walking into
//! an oxygen station with one point left still ends the run.

use rand::Rng;
use serde::{Deserialize, Serialize};

use derelict_logic::aliens::AlienKind;
use derelict_logic::attributes::Attribute;
use derelict_logic::events::EVENTS;
use derelict_logic::items::{Item, ItemKind};
use derelict_logic::topology::{Cell, CellKind, Coord};

use crate::content::GameContent;
use crate::error::MoveRejection;
use crate::inventory;
use crate::progress;
use crate::session::{Encounter, SessionBundle, SessionStatus};

/// Room effect applied on a first visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomEffect {
    /// Nothing beyond the oxygen cost.
    EmptyRoom,
    OxygenRestored { amount: i32, oxygen: i32 },
    WeaponsReloaded,
    CodeFound { activation_codes: u32 },
    /// `stored` is false when the backpack was full and the item was lost.
    ItemFound { item: Item, stored: bool },
    /// An event from the table wants a player decision; resolve it with
    /// the resolve-event action.
    EventTriggered { event_id: u32 },
    /// The escape bay refused entry: this many codes still missing.
    EscapeLocked { codes_missing: u32 },
}

/// What happened on re-entering an explored cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevisitOutcome {
    AlienAmbush { alien: AlienKind },
    CalmRoom { stress: i32 },
    PassengerRescued { passengers: u32 },
}

/// Structured result of a visit, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitOutcome {
    FirstVisit { kind: CellKind, effect: RoomEffect },
    Revisit { outcome: RevisitOutcome },
    /// Escape bay entered with every code collected.
    Victory,
    /// The last oxygen was spent on the move.
    Defeat,
}

/// Check whether the captain may move to `target`.
pub fn validate_move(
    bundle: &SessionBundle,
    content: &GameContent,
    target: Coord,
) -> Result<Cell, MoveRejection> {
    let cell = content
        .topology
        .cell_at(target)
        .copied()
        .ok_or(MoveRejection::OutOfBounds {
            x: target.x,
            y: target.y,
        })?;
    if cell.kind == CellKind::Inaccessible {
        return Err(MoveRejection::Inaccessible);
    }
    if cell.locked && bundle.session.activation_codes < cell.required_codes {
        return Err(MoveRejection::DoorLocked {
            required: cell.required_codes,
            held: bundle.session.activation_codes,
        });
    }
    if bundle.encounter.is_some() {
        return Err(MoveRejection::EncounterActive);
    }
    let adjacent = content
        .topology
        .adjacent(bundle.map.current_position)
        .contains(&target);
    if !adjacent && !bundle.map.is_explored(target) {
        return Err(MoveRejection::NotReachable);
    }
    Ok(cell)
}

/// Move to `target` and play out the visit.
pub fn visit_cell(
    bundle: &mut SessionBundle,
    content: &GameContent,
    target: Coord,
    rng: &mut impl Rng,
) -> Result<VisitOutcome, MoveRejection> {
    let cell = validate_move(bundle, content, target)?;
    bundle.map.current_position = target;

    if bundle.map.is_explored(target) {
        let roll = rng.gen_range(1..=6);
        return Ok(VisitOutcome::Revisit {
            outcome: apply_revisit(bundle, roll, rng),
        });
    }

    // An unlocked escape bay turns the captain away without exploring the
    // cell or costing oxygen; nothing changes beyond the move.
    if cell.kind == CellKind::EscapeBay {
        let needed = content.topology.codes_to_escape();
        if bundle.session.activation_codes < needed {
            return Ok(VisitOutcome::FirstVisit {
                kind: cell.kind,
                effect: RoomEffect::EscapeLocked {
                    codes_missing: needed - bundle.session.activation_codes,
                },
            });
        }
    }

    bundle.map.explored.insert(target);
    bundle
        .attributes
        .adjust(Attribute::Oxygen, -content.first_visit_oxygen_cost);
    if bundle.attributes.out_of_oxygen() {
        bundle.session.status = SessionStatus::Defeat;
        return Ok(VisitOutcome::Defeat);
    }

    let effect = match cell.kind {
        CellKind::OxygenStation => {
            let adj = bundle
                .attributes
                .adjust(Attribute::Oxygen, content.oxygen_station_refill);
            RoomEffect::OxygenRestored {
                amount: adj.applied,
                oxygen: adj.value,
            }
        }
        CellKind::Armory => {
            inventory::reload_all(bundle);
            RoomEffect::WeaponsReloaded
        }
        CellKind::Control => {
            bundle.session.activation_codes += 1;
            progress::note_codes_collected(bundle);
            RoomEffect::CodeFound {
                activation_codes: bundle.session.activation_codes,
            }
        }
        CellKind::CargoBay => {
            let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
            let item = Item::new(kind);
            let stored = inventory::add_item(bundle, content, item);
            RoomEffect::ItemFound { item, stored }
        }
        CellKind::RandomEvent => {
            let event = &EVENTS[rng.gen_range(0..EVENTS.len())];
            RoomEffect::EventTriggered { event_id: event.id }
        }
        CellKind::EscapeBay => {
            bundle.session.status = SessionStatus::Victory;
            progress::evaluate_end_of_run(bundle);
            return Ok(VisitOutcome::Victory);
        }
        CellKind::Start
        | CellKind::Explorable
        | CellKind::Security
        | CellKind::LockedDoor
        | CellKind::Inaccessible => RoomEffect::EmptyRoom,
    };

    Ok(VisitOutcome::FirstVisit {
        kind: cell.kind,
        effect,
    })
}

/// Resolve a revisit die: 1–2 ambush, 3–5 calm room, 6 a rescue.
fn apply_revisit(bundle: &mut SessionBundle, roll: i32, rng: &mut impl Rng) -> RevisitOutcome {
    if roll <= 2 {
        // validate_move guarantees no encounter is active here.
        let alien = AlienKind::RANDOM_POOL[rng.gen_range(0..AlienKind::RANDOM_POOL.len())];
        bundle.encounter = Some(Encounter::new(alien));
        RevisitOutcome::AlienAmbush { alien }
    } else if roll <= 5 {
        let adj = bundle.attributes.adjust(Attribute::Stress, -1);
        RevisitOutcome::CalmRoom { stress: adj.value }
    } else {
        bundle.session.passengers += 1;
        RevisitOutcome::PassengerRescued {
            passengers: bundle.session.passengers,
        }
    }
}
