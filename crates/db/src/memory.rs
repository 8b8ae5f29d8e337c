//! In-memory catalog repository.

use async_trait::async_trait;
use indexmap::map::Entry;
use indexmap::IndexMap;
use mower_core::mower::Mower;
use mower_core::repository::{CatalogRepository, RepoError};
use mower_core::types::MowerId;
use tokio::sync::RwLock;

/// Catalog kept in process memory.
///
/// Items are held in insertion order; writers take the write lock, readers
/// share the read lock. Designed to be wrapped in `Arc` and shared.
#[derive(Debug, Default)]
pub struct InMemoryCatalogRepo {
    mowers: RwLock<IndexMap<MowerId, Mower>>,
}

impl InMemoryCatalogRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with `mowers`, in the given order.
    pub fn with_mowers(mowers: Vec<Mower>) -> Result<Self, RepoError> {
        let mut map = IndexMap::with_capacity(mowers.len());
        for mower in mowers {
            match map.entry(mower.id.clone()) {
                Entry::Occupied(_) => return Err(RepoError::DuplicateId(mower.id)),
                Entry::Vacant(slot) => {
                    slot.insert(mower);
                }
            }
        }
        Ok(Self {
            mowers: RwLock::new(map),
        })
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalogRepo {
    async fn add(&self, mower: Mower) -> Result<(), RepoError> {
        let mut mowers = self.mowers.write().await;
        if mowers.contains_key(&mower.id) {
            return Err(RepoError::DuplicateId(mower.id));
        }
        mowers.insert(mower.id.clone(), mower);
        tracing::debug!(count = mowers.len(), "Mower stored");
        Ok(())
    }

    async fn find(&self, id: &str) -> Result<Mower, RepoError> {
        self.mowers
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| RepoError::NotFound(id.to_string()))
    }

    async fn update(&self, id: &str, name: &str) -> Result<Mower, RepoError> {
        let mut mowers = self.mowers.write().await;
        let mower = mowers
            .get_mut(id)
            .ok_or_else(|| RepoError::NotFound(id.to_string()))?;
        mower.name = name.to_string();
        Ok(mower.clone())
    }

    async fn list(&self) -> Result<Vec<Mower>, RepoError> {
        Ok(self.mowers.read().await.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn mower(id: &str, name: &str) -> Mower {
        Mower {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn add_then_find() {
        let repo = InMemoryCatalogRepo::new();
        repo.add(mower("1", "M-90")).await.unwrap();

        assert_eq!(repo.find("1").await.unwrap(), mower("1", "M-90"));
    }

    #[tokio::test]
    async fn add_rejects_duplicate_id() {
        let repo = InMemoryCatalogRepo::new();
        repo.add(mower("1", "M-90")).await.unwrap();

        let err = repo.add(mower("1", "M-150")).await.unwrap_err();
        assert_eq!(err, RepoError::DuplicateId("1".into()));
        assert_eq!(repo.find("1").await.unwrap().name, "M-90");
    }

    #[tokio::test]
    async fn find_unknown_id_is_not_found() {
        let repo = InMemoryCatalogRepo::new();
        assert_matches!(repo.find("42").await, Err(RepoError::NotFound(id)) if id == "42");
    }

    #[tokio::test]
    async fn update_replaces_name_in_place() {
        let repo = InMemoryCatalogRepo::with_mowers(vec![
            mower("1", "M-90"),
            mower("2", "M-150"),
        ])
        .unwrap();

        let written = repo.update("1", "M-95").await.unwrap();
        assert_eq!(written, mower("1", "M-95"));

        let all = repo.list().await.unwrap();
        assert_eq!(all, vec![mower("1", "M-95"), mower("2", "M-150")]);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = InMemoryCatalogRepo::new();
        assert_matches!(repo.update("9", "X").await, Err(RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn list_keeps_insertion_order() {
        let repo = InMemoryCatalogRepo::new();
        for (id, name) in [("10", "M-480"), ("2", "M-90"), ("7", "M-150")] {
            repo.add(mower(id, name)).await.unwrap();
        }

        let first = repo.list().await.unwrap();
        let second = repo.list().await.unwrap();
        let ids: Vec<_> = first.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["10", "2", "7"]);
        assert_eq!(first, second);
    }

    #[test]
    fn with_mowers_rejects_duplicate_seed() {
        let err = InMemoryCatalogRepo::with_mowers(vec![mower("1", "a"), mower("1", "b")])
            .unwrap_err();
        assert_eq!(err, RepoError::DuplicateId("1".into()));
    }
}
