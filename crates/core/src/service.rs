//! Catalog business rules: id assignment, partial updates and error
//! translation between the repository and the transport layer.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::mower::{validate_mower_name, CreateMower, Mower, UpdateMower};
use crate::repository::CatalogRepository;

/// Entry point used by the HTTP handlers.
///
/// Ids are decimal integers handed out by a counter seeded from the highest
/// numeric id already stored. The counter lock is held across the insert, so
/// two concurrent creates can never pick the same id.
pub struct CatalogService {
    repo: Arc<dyn CatalogRepository>,
    last_id: Mutex<u64>,
}

impl CatalogService {
    /// Build a service over `repo`, seeding the id counter from its contents.
    ///
    /// Ids that do not parse as integers are ignored for seeding.
    pub async fn load(repo: Arc<dyn CatalogRepository>) -> CoreResult<Self> {
        let last_id = repo
            .list()
            .await?
            .iter()
            .filter_map(|m| m.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        tracing::debug!(last_id, "Catalog id counter seeded");

        Ok(Self {
            repo,
            last_id: Mutex::new(last_id),
        })
    }

    /// Create a mower with a freshly assigned id.
    pub async fn create_mower(&self, input: CreateMower) -> CoreResult<Mower> {
        validate_mower_name(&input.name)?;

        let mut last_id = self.last_id.lock().await;
        // Advance first: an id burned by a failed insert is never reused.
        let next = last_id
            .checked_add(1)
            .ok_or_else(|| CoreError::Internal("mower id space exhausted".to_string()))?;
        *last_id = next;
        let mower = Mower {
            id: (*last_id).to_string(),
            name: input.name,
        };
        self.repo.add(mower.clone()).await?;
        drop(last_id);

        tracing::info!(id = %mower.id, name = %mower.name, "Mower created");
        Ok(mower)
    }

    /// Fetch a single mower.
    pub async fn get_mower(&self, id: &str) -> CoreResult<Mower> {
        Ok(self.repo.find(id).await?)
    }

    /// Apply a partial update and return the item as this call left it.
    ///
    /// A missing or empty name leaves the stored name untouched, but the id
    /// must still exist.
    pub async fn update_mower(&self, id: &str, input: UpdateMower) -> CoreResult<Mower> {
        match input.effective_name() {
            Some(name) => {
                let mower = self.repo.update(id, name).await?;
                tracing::info!(id, name, "Mower updated");
                Ok(mower)
            }
            None => {
                tracing::debug!(id, "Mower update without a name, nothing to change");
                Ok(self.repo.find(id).await?)
            }
        }
    }

    /// The whole catalog in repository order.
    ///
    /// There is no availability attribute on a mower, so nothing is
    /// filtered out.
    pub async fn get_available_mowers(&self) -> CoreResult<Vec<Mower>> {
        Ok(self.repo.list().await?)
    }

    /// Number of mowers currently stored.
    pub async fn mower_count(&self) -> CoreResult<usize> {
        Ok(self.repo.list().await?.len())
    }
}
