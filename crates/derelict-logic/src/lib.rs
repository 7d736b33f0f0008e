//! Pure game rules for Derelict.
//!
//! This crate contains all game logic that is independent of any database,
//! transport, or runtime. Functions take plain data and return results,
//! making them unit-testable and portable: the session engine in
//! `derelict-core` composes them, and any future host (CLI tool, bot
//! harness) can reuse them directly.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`achievements`] | 15-entry achievement registry, kill thresholds, ranks |
//! | [`aliens`] | Fixed seven-kind alien roster and random-spawn pool |
//! | [`attributes`] | Captain attributes (suit/stress/oxygen) with bounded updates |
//! | [`combat`] | Dice-sum attack resolution against a target number |
//! | [`difficulty`] | Difficulty tiers and their starting attribute values |
//! | [`events`] | Numbered random-event table with player-chosen options |
//! | [`items`] | Fixed five-item consumable table and backpack capacity |
//! | [`topology`] | Hand-authored hex map of the derelict ship + adjacency |
//! | [`weapons`] | Weapon roster and per-difficulty starting arsenal |

pub mod achievements;
pub mod aliens;
pub mod attributes;
pub mod combat;
pub mod difficulty;
pub mod events;
pub mod items;
pub mod topology;
pub mod weapons;
