//! Session orchestrator — one atomic action per call.
//!
//! Every mutating operation follows the same shape: load the bundle,
//! check ownership, check the session is still running, run one engine
//! call on the in-memory state, save once. A failed action saves nothing,
//! so callers never observe half-applied state. The orchestrator is where
//! the ambient concerns live (authorization, persistence, logging); the
//! engines below it stay pure.

use rand::Rng;
use serde::{Deserialize, Serialize};

use derelict_logic::achievements::{Achievement, Rank};
use derelict_logic::aliens::AlienKind;
use derelict_logic::attributes::Attribute;
use derelict_logic::difficulty::Difficulty;
use derelict_logic::events::{self, EventEffect};
use derelict_logic::items::{Item, ItemKind};
use derelict_logic::topology::Coord;

use crate::content::GameContent;
use crate::encounter::{self, AttackReport};
use crate::error::{CombatError, ProgressError, SessionError};
use crate::exploration::{self, VisitOutcome};
use crate::inventory::{self, ItemUse};
use crate::progress;
use crate::repository::SessionRepository;
use crate::session::{ActorId, Encounter, SessionBundle, SessionId, SessionStatus};

/// Realized effect of resolving an event option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedEventEffect {
    None,
    PassengerGained { passengers: u32 },
    PassengerLost { passengers: u32 },
    ItemFound { item: Item, stored: bool },
    ActivationCodeFound { activation_codes: u32 },
    EncounterStarted { alien: AlienKind },
    StressChanged { stress: i32 },
    OxygenChanged { oxygen: i32 },
    /// The option drained the last oxygen; the run is over.
    Defeat,
}

/// Result of resolving one event option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventResolution {
    pub event_id: u32,
    pub option: String,
    pub narrative: String,
    pub effect: ResolvedEventEffect,
}

/// Read-only snapshot handed to the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStateView {
    pub bundle: SessionBundle,
    pub rank: Rank,
}

/// Composes the engines over a repository into player-facing actions.
pub struct Orchestrator<R: SessionRepository> {
    repository: R,
    content: GameContent,
}

impl<R: SessionRepository> Orchestrator<R> {
    pub fn new(repository: R, content: GameContent) -> Self {
        Self {
            repository,
            content,
        }
    }

    pub fn content(&self) -> &GameContent {
        &self.content
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Create a fresh session for an actor.
    pub fn create_session(
        &mut self,
        actor: ActorId,
        difficulty: Difficulty,
    ) -> Result<SessionBundle, SessionError> {
        let bundle = self.repository.create(actor, difficulty, &self.content);
        log::info!(
            "session {} created for actor {} ({})",
            bundle.session.session_id,
            actor,
            difficulty.name()
        );
        Ok(bundle)
    }

    /// Load → authorize → require active → act → save once.
    fn mutate<T>(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        action: impl FnOnce(&mut SessionBundle, &GameContent) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        let mut bundle = self
            .repository
            .load(session_id)
            .ok_or(SessionError::NotFound)?;
        if bundle.session.owner != actor {
            return Err(SessionError::NotOwner);
        }
        if !bundle.is_active() {
            return Err(SessionError::NotActive);
        }
        let result = action(&mut bundle, &self.content)?;
        self.repository.save(&bundle)?;
        Ok(result)
    }

    /// Move the captain to a cell and play out the visit.
    pub fn visit_cell(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        target: Coord,
        rng: &mut impl Rng,
    ) -> Result<VisitOutcome, SessionError> {
        let outcome = self.mutate(session_id, actor, |bundle, content| {
            exploration::visit_cell(bundle, content, target, rng).map_err(SessionError::from)
        })?;
        match &outcome {
            VisitOutcome::Victory => log::info!("session {session_id}: escaped the ship"),
            VisitOutcome::Defeat => log::info!("session {session_id}: out of oxygen"),
            other => log::debug!("session {session_id}: visited {target:?} -> {other:?}"),
        }
        Ok(outcome)
    }

    /// Begin an encounter with an alien named by its wire id.
    pub fn start_encounter(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        alien_id: &str,
    ) -> Result<Encounter, SessionError> {
        let alien = AlienKind::from_id(alien_id).ok_or_else(|| {
            SessionError::Combat(CombatError::UnknownAlienType(alien_id.to_string()))
        })?;
        let started = self.mutate(session_id, actor, |bundle, _| {
            encounter::start(bundle, alien).map_err(SessionError::from)
        })?;
        log::debug!("session {session_id}: encounter with {}", alien.stats().name);
        Ok(started)
    }

    /// Attack the active alien with the named weapon.
    pub fn attack(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        weapon: &str,
        rng: &mut impl Rng,
    ) -> Result<AttackReport, SessionError> {
        let report = self.mutate(session_id, actor, |bundle, _| {
            encounter::resolve_attack(bundle, weapon, rng).map_err(SessionError::from)
        })?;
        log::debug!(
            "session {session_id}: {} rolled {} ({})",
            weapon,
            report.total,
            if report.hit { "hit" } else { "miss" }
        );
        Ok(report)
    }

    /// Abandon the active encounter.
    pub fn flee(&mut self, session_id: SessionId, actor: ActorId) -> Result<(), SessionError> {
        self.mutate(session_id, actor, |bundle, _| {
            encounter::flee(bundle).map_err(SessionError::from)
        })
    }

    /// Escape an encounter by leaving a passenger behind. Returns the
    /// passengers remaining.
    pub fn sacrifice_passenger(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
    ) -> Result<u32, SessionError> {
        self.mutate(session_id, actor, |bundle, _| {
            if bundle.encounter.is_none() {
                return Err(CombatError::NoActiveEncounter.into());
            }
            if bundle.session.passengers == 0 {
                return Err(SessionError::NoPassengerAvailable);
            }
            bundle.session.passengers -= 1;
            bundle.session.passengers_sacrificed += 1;
            bundle.encounter = None;
            Ok(bundle.session.passengers)
        })
    }

    /// Use a backpack item by index.
    pub fn use_item(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        index: usize,
    ) -> Result<ItemUse, SessionError> {
        self.mutate(session_id, actor, |bundle, _| {
            inventory::use_item(bundle, index).map_err(SessionError::from)
        })
    }

    /// Load rounds into one weapon.
    pub fn reload_weapon(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        weapon: &str,
        amount: i32,
    ) -> Result<i32, SessionError> {
        self.mutate(session_id, actor, |bundle, _| {
            inventory::reload(bundle, weapon, amount).map_err(SessionError::from)
        })
    }

    /// Resolve an event option and record the event as completed.
    pub fn resolve_event(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        event_id: u32,
        option_key: &str,
        rng: &mut impl Rng,
    ) -> Result<EventResolution, SessionError> {
        let resolution = self.mutate(session_id, actor, |bundle, content| {
            let event = events::event_by_id(event_id)
                .ok_or(SessionError::Progress(ProgressError::UnknownEvent(event_id)))?;
            let option = event.option(option_key).ok_or_else(|| {
                SessionError::Progress(ProgressError::UnknownEventOption {
                    event: event_id,
                    option: option_key.to_string(),
                })
            })?;
            let effect = apply_event_effect(bundle, content, option.effect, rng)?;
            progress::record_event_completed(bundle, event_id).map_err(SessionError::from)?;
            Ok(EventResolution {
                event_id,
                option: option_key.to_string(),
                narrative: option.narrative.to_string(),
                effect,
            })
        })?;
        if resolution.effect == ResolvedEventEffect::Defeat {
            log::info!("session {session_id}: out of oxygen");
        }
        Ok(resolution)
    }

    /// Unlock an achievement by its registry name.
    pub fn unlock_achievement(
        &mut self,
        session_id: SessionId,
        actor: ActorId,
        name: &str,
    ) -> Result<Achievement, SessionError> {
        self.mutate(session_id, actor, |bundle, _| {
            progress::unlock_by_name(bundle, name)
                .map(|(achievement, _)| achievement)
                .map_err(SessionError::from)
        })
    }

    /// Read-only snapshot of a session plus its derived rank.
    pub fn game_state(
        &self,
        session_id: SessionId,
        actor: ActorId,
    ) -> Result<GameStateView, SessionError> {
        let bundle = self
            .repository
            .load(session_id)
            .ok_or(SessionError::NotFound)?;
        if bundle.session.owner != actor {
            return Err(SessionError::NotOwner);
        }
        let rank = progress::rank(&bundle);
        Ok(GameStateView { bundle, rank })
    }
}

/// Apply one event option's mechanical effect to the bundle.
fn apply_event_effect(
    bundle: &mut SessionBundle,
    content: &GameContent,
    effect: EventEffect,
    rng: &mut impl Rng,
) -> Result<ResolvedEventEffect, SessionError> {
    let resolved = match effect {
        EventEffect::Nothing => ResolvedEventEffect::None,
        EventEffect::GainPassenger => {
            bundle.session.passengers += 1;
            ResolvedEventEffect::PassengerGained {
                passengers: bundle.session.passengers,
            }
        }
        EventEffect::LosePassenger => {
            bundle.session.passengers = bundle.session.passengers.saturating_sub(1);
            ResolvedEventEffect::PassengerLost {
                passengers: bundle.session.passengers,
            }
        }
        EventEffect::GrantRandomItem => {
            let kind = ItemKind::ALL[rng.gen_range(0..ItemKind::ALL.len())];
            let item = Item::new(kind);
            let stored = inventory::add_item(bundle, content, item);
            ResolvedEventEffect::ItemFound { item, stored }
        }
        EventEffect::GainActivationCode => {
            bundle.session.activation_codes += 1;
            progress::note_codes_collected(bundle);
            ResolvedEventEffect::ActivationCodeFound {
                activation_codes: bundle.session.activation_codes,
            }
        }
        EventEffect::SpawnEncounter(alien) => {
            encounter::start(bundle, alien).map_err(SessionError::from)?;
            ResolvedEventEffect::EncounterStarted { alien }
        }
        EventEffect::RaiseStress(amount) => {
            let adj = bundle.attributes.adjust(Attribute::Stress, amount);
            progress::note_stress_level(bundle);
            ResolvedEventEffect::StressChanged { stress: adj.value }
        }
        EventEffect::ReduceStress(amount) => {
            let adj = bundle.attributes.adjust(Attribute::Stress, -amount);
            ResolvedEventEffect::StressChanged { stress: adj.value }
        }
        EventEffect::ConsumeOxygen(amount) => {
            let adj = bundle.attributes.adjust(Attribute::Oxygen, -amount);
            if bundle.attributes.out_of_oxygen() {
                bundle.session.status = SessionStatus::Defeat;
                ResolvedEventEffect::Defeat
            } else {
                ResolvedEventEffect::OxygenChanged { oxygen: adj.value }
            }
        }
        EventEffect::RestoreOxygen(amount) => {
            let adj = bundle.attributes.adjust(Attribute::Oxygen, amount);
            ResolvedEventEffect::OxygenChanged { oxygen: adj.value }
        }
    };
    Ok(resolved)
}
