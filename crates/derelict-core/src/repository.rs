//! The persistence boundary.
//!
//! The engine never talks to storage directly: the orchestrator loads a
//! bundle, runs one action, and saves once. Anything that can serialize a
//! [`SessionBundle`] and hand out fresh ids can implement the trait; the
//! in-memory implementation ships for tests and embedding. Per-session
//! serialization (no two actions interleaving on one session) is the
//! implementor's contract.

use std::collections::BTreeMap;

use derelict_logic::difficulty::Difficulty;

use crate::content::GameContent;
use crate::error::RepositoryError;
use crate::session::{ActorId, SessionBundle, SessionId};

/// Storage collaborator for session bundles.
pub trait SessionRepository {
    /// Fetch a session by id.
    fn load(&self, session_id: SessionId) -> Option<SessionBundle>;

    /// Persist a bundle previously handed out by `load` or `create`.
    fn save(&mut self, bundle: &SessionBundle) -> Result<(), RepositoryError>;

    /// Allocate a new session with all sub-records created together.
    fn create(
        &mut self,
        owner: ActorId,
        difficulty: Difficulty,
        content: &GameContent,
    ) -> SessionBundle;
}

/// Map-backed repository.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: BTreeMap<SessionId, SessionBundle>,
    next_id: SessionId,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self {
            sessions: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// All sessions owned by an actor, newest first.
    pub fn sessions_for(&self, owner: ActorId) -> Vec<&SessionBundle> {
        let mut sessions: Vec<&SessionBundle> = self
            .sessions
            .values()
            .filter(|b| b.session.owner == owner)
            .collect();
        sessions.reverse();
        sessions
    }
}

impl SessionRepository for InMemorySessionRepository {
    fn load(&self, session_id: SessionId) -> Option<SessionBundle> {
        self.sessions.get(&session_id).cloned()
    }

    fn save(&mut self, bundle: &SessionBundle) -> Result<(), RepositoryError> {
        let id = bundle.session.session_id;
        if !self.sessions.contains_key(&id) {
            return Err(RepositoryError::Conflict);
        }
        self.sessions.insert(id, bundle.clone());
        Ok(())
    }

    fn create(
        &mut self,
        owner: ActorId,
        difficulty: Difficulty,
        content: &GameContent,
    ) -> SessionBundle {
        let id = self.next_id;
        self.next_id += 1;
        let bundle = SessionBundle::create(id, owner, difficulty, content);
        self.sessions.insert(id, bundle.clone());
        bundle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_load() {
        let content = GameContent::standard();
        let mut repo = InMemorySessionRepository::new();
        let bundle = repo.create(9, Difficulty::Hard, &content);
        let loaded = repo.load(bundle.session.session_id).unwrap();
        assert_eq!(loaded, bundle);
        assert!(repo.load(999).is_none());
    }

    #[test]
    fn test_save_roundtrip() {
        let content = GameContent::standard();
        let mut repo = InMemorySessionRepository::new();
        let mut bundle = repo.create(9, Difficulty::Normal, &content);
        bundle.session.passengers = 2;
        repo.save(&bundle).unwrap();
        assert_eq!(repo.load(bundle.session.session_id).unwrap().session.passengers, 2);
    }

    #[test]
    fn test_save_unknown_session_conflicts() {
        let content = GameContent::standard();
        let mut repo = InMemorySessionRepository::new();
        let bundle = SessionBundle::create(42, 9, Difficulty::Normal, &content);
        assert_eq!(repo.save(&bundle), Err(RepositoryError::Conflict));
    }

    #[test]
    fn test_sessions_for_filters_by_owner() {
        let content = GameContent::standard();
        let mut repo = InMemorySessionRepository::new();
        repo.create(1, Difficulty::Normal, &content);
        repo.create(2, Difficulty::Normal, &content);
        repo.create(1, Difficulty::Hard, &content);
        assert_eq!(repo.sessions_for(1).len(), 2);
        assert_eq!(repo.sessions_for(2).len(), 1);
        assert!(repo.sessions_for(3).is_empty());
    }
}
