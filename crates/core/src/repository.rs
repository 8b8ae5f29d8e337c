//! Storage contract for the catalog.
//!
//! The in-memory implementation lives in `mower-db`; any other backend
//! (networked, persistent) must honor the same semantics:
//!
//! - `add` fails with [`RepoError::DuplicateId`] if the id is taken and is
//!   visible to `find`/`list` as soon as it returns.
//! - `find` and `update` fail with [`RepoError::NotFound`] for unknown ids.
//! - `list` returns a deterministic order (insertion order for the
//!   in-memory store) when no writes happen in between.

use async_trait::async_trait;

use crate::error::CoreError;
use crate::mower::{Mower, MOWER_ENTITY};
use crate::types::MowerId;

/// Low-level repository failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepoError {
    #[error("no item stored under id {0}")]
    NotFound(MowerId),

    #[error("id {0} is already taken")]
    DuplicateId(MowerId),
}

impl From<RepoError> for CoreError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => CoreError::NotFound {
                entity: MOWER_ENTITY,
                id,
            },
            // Ids come from the service counter, so a collision is a logic
            // fault rather than bad input.
            RepoError::DuplicateId(id) => {
                tracing::error!(id = %id, "Catalog id collision");
                CoreError::Internal(format!("id {id} assigned twice"))
            }
        }
    }
}

/// Store / find / update / list over catalog items.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert an item under its pre-assigned id.
    async fn add(&self, mower: Mower) -> Result<(), RepoError>;

    /// Fetch the item stored under `id`.
    async fn find(&self, id: &str) -> Result<Mower, RepoError>;

    /// Replace the name of the item stored under `id` and return the item
    /// as written.
    async fn update(&self, id: &str, name: &str) -> Result<Mower, RepoError>;

    /// Every stored item.
    async fn list(&self) -> Result<Vec<Mower>, RepoError>;
}
