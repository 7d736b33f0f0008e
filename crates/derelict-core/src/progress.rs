//! Progress tracker — completed events, kill counters, achievements, rank.
//!
//! Everything here is idempotent: recording a completed event twice keeps
//! one entry, unlocking an achievement twice is a no-op. Threshold checks
//! run at the recording site so no separate sweep is needed during play;
//! [`evaluate_end_of_run`] handles the counters that only settle when the
//! run ends.

use derelict_logic::achievements::{
    self, Achievement, Rank, CODES_FOR_DESCIFRADOR, EVENTS_FOR_MEMORIAS,
};
use derelict_logic::aliens::AlienKind;
use derelict_logic::attributes::STRESS_MAX;
use derelict_logic::events;

use crate::error::ProgressError;
use crate::session::SessionBundle;

/// Record a completed event. Returns whether the id was newly recorded;
/// re-recording is a successful no-op.
pub fn record_event_completed(
    bundle: &mut SessionBundle,
    event_id: u32,
) -> Result<bool, ProgressError> {
    events::event_by_id(event_id).ok_or(ProgressError::UnknownEvent(event_id))?;
    let newly = bundle.progress.completed_events.insert(event_id);
    if bundle.progress.completed_events.len() >= EVENTS_FOR_MEMORIAS {
        bundle.progress.unlock(Achievement::Memorias);
    }
    Ok(newly)
}

/// Count a defeated alien and unlock its threshold achievement when
/// reached. Returns the achievement if this kill newly unlocked it.
pub fn record_alien_defeated(bundle: &mut SessionBundle, kind: AlienKind) -> Option<Achievement> {
    let counter = bundle.progress.kills.entry(kind).or_insert(0);
    *counter += 1;
    let kills = *counter;
    match achievements::kill_achievement(kind, kills) {
        Some(achievement) if bundle.progress.unlock(achievement) => Some(achievement),
        _ => None,
    }
}

/// Unlock an achievement by its registry name. Idempotent; unknown names
/// are rejected. Returns the achievement and whether it was newly set.
pub fn unlock_by_name(
    bundle: &mut SessionBundle,
    name: &str,
) -> Result<(Achievement, bool), ProgressError> {
    let achievement = Achievement::from_name(name)
        .ok_or_else(|| ProgressError::UnknownAchievement(name.to_string()))?;
    let newly = bundle.progress.unlock(achievement);
    Ok((achievement, newly))
}

/// Check the activation-code milestone after codes were collected.
pub fn note_codes_collected(bundle: &mut SessionBundle) {
    if bundle.session.activation_codes >= CODES_FOR_DESCIFRADOR {
        bundle.progress.unlock(Achievement::Descifrador);
    }
}

/// Check the stress milestone after stress was raised.
pub fn note_stress_level(bundle: &mut SessionBundle) {
    if bundle.attributes.stress >= STRESS_MAX {
        bundle.progress.unlock(Achievement::Nervioso);
    }
}

/// Derive the achievements that only settle when the run ends: untouched
/// counters and the difficulty ladder.
pub fn evaluate_end_of_run(bundle: &mut SessionBundle) {
    if bundle.session.passengers_sacrificed == 0 {
        bundle.progress.unlock(Achievement::Pacificador);
    }
    if bundle.session.items_used == 0 {
        bundle.progress.unlock(Achievement::Acumulador);
    }
    for &achievement in achievements::difficulty_achievements(bundle.session.difficulty) {
        bundle.progress.unlock(achievement);
    }
}

/// Current rank, derived from the unlock count.
pub fn rank(bundle: &SessionBundle) -> Rank {
    achievements::compute_rank(bundle.progress.unlocked_count())
}
