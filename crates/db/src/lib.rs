//! Storage backends for the mower catalog.

pub mod memory;

pub use memory::InMemoryCatalogRepo;
