//! Domain layer of the mower catalog.
//!
//! Holds the item model, the storage contract every repository implements,
//! and the service enforcing identifier assignment and update rules.

pub mod error;
pub mod mower;
pub mod repository;
pub mod service;
pub mod types;
