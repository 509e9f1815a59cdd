//! Persistence adapters - JSON snapshot project storage.

pub mod repository_impl;
pub mod store;

pub use repository_impl::JsonProjectRepository;
pub use store::ProjectStore;
