//! Derelict Core - Turn-Based Session Engine
//!
//! The stateful engine behind a Derelict game session: one captain on a
//! derelict ship, moving cell by cell, fighting what it finds, and trying
//! to reach the escape bay with all six activation codes before the air
//! runs out.
//!
//! # Architecture
//!
//! All game state for one session lives in a [`session::SessionBundle`] —
//! plain data, fully serializable. The engines (`exploration`,
//! `encounter`, `inventory`, `progress`) are synchronous, in-memory
//! transformations of a bundle; the [`orchestrator::Orchestrator`]
//! composes them into atomic player actions: load, authorize, run one
//! engine call, save once. Persistence and transport stay outside the
//! engine behind the [`repository::SessionRepository`] trait.
//!
//! # Example
//!
//! ```rust,no_run
//! use derelict_core::prelude::*;
//! use derelict_logic::difficulty::Difficulty;
//! use derelict_logic::topology::Coord;
//!
//! let mut game = Orchestrator::new(InMemorySessionRepository::new(), GameContent::standard());
//! let mut rng = rand::thread_rng();
//!
//! let bundle = game.create_session(1, Difficulty::Normal).unwrap();
//! let id = bundle.session.session_id;
//!
//! // First move: one cell into the ship, one point of oxygen.
//! let outcome = game.visit_cell(id, 1, Coord::new(0, 1), &mut rng).unwrap();
//! println!("{outcome:?}");
//! ```

pub mod content;
pub mod encounter;
pub mod error;
pub mod exploration;
pub mod inventory;
pub mod orchestrator;
pub mod persistence;
pub mod progress;
pub mod repository;
pub mod session;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::content::GameContent;
    pub use crate::error::SessionError;
    pub use crate::orchestrator::Orchestrator;
    pub use crate::repository::{InMemorySessionRepository, SessionRepository};
    pub use crate::session::{SessionBundle, SessionStatus};
}
