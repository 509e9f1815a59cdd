//! Ports layer - Interfaces between the core and the outside world.
//!
//! The application depends on these traits, never on concrete adapters.

pub mod repository;

pub use repository::ProjectRepository;
