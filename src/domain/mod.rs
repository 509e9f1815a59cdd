//! Domain layer - Pool odds math and race entities.
//!
//! This module contains the pure computation core of the odds service.
//! No I/O, no async, no clocks inside the odds math (hexagonal architecture
//! inner ring). All types are serializable and testable in isolation.

pub mod combinat;
pub mod odds;
pub mod project;
pub mod wager;

// Re-export core types for convenience
pub use odds::{OddsRange, OddsValue, OutcomeKey, PayoutRates, Votes};
pub use project::{Project, ProjectSummary};
pub use wager::{outcome_keys, WagerType, BRACKET_COUNT};
