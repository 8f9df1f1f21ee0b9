//! In-memory version repository

use crate::error::{RepositoryError, RepositoryResult};
use crate::models::{NewVersion, PromptVersion};
use crate::traits::VersionRepository;
use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Ephemeral version storage backed by a shared map
///
/// Versions live for the lifetime of the process. Concurrent readers share
/// the lock; writes are exclusive.
#[derive(Default)]
pub struct InMemoryVersionRepository {
    versions: RwLock<HashMap<String, PromptVersion>>,
}

impl InMemoryVersionRepository {
    pub fn new() -> Self {
        Self {
            versions: RwLock::new(HashMap::new()),
        }
    }

    /// Generate a unique version id
    /// Format: v_YYYYMMDDHHmmss_xxxxxx
    /// Example: v_20240109143052_a3f2e1
    fn generate_version_id() -> String {
        let datetime_str = Utc::now().format("%Y%m%d%H%M%S").to_string();
        let random: u32 = rand::thread_rng().gen_range(0..0xFFFFFF);

        format!("v_{}_{:06x}", datetime_str, random)
    }
}

#[async_trait]
impl VersionRepository for InMemoryVersionRepository {
    async fn save(&self, version: NewVersion) -> RepositoryResult<PromptVersion> {
        if version.name.trim().is_empty() || version.content.trim().is_empty() {
            return Err(RepositoryError::InvalidVersion(
                "Name and content are required".to_string(),
            ));
        }

        let stored = PromptVersion {
            id: Self::generate_version_id(),
            name: version.name,
            content: version.content,
            model: version.model,
            metrics: version.metrics,
            created_at: Utc::now(),
        };

        let mut versions = self.versions.write().await;
        versions.insert(stored.id.clone(), stored.clone());

        Ok(stored)
    }

    async fn get(&self, id: &str) -> RepositoryResult<PromptVersion> {
        let versions = self.versions.read().await;
        versions
            .get(id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn list(&self) -> RepositoryResult<Vec<PromptVersion>> {
        let versions = self.versions.read().await;
        let mut all: Vec<PromptVersion> = versions.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(all)
    }

    async fn delete(&self, id: &str) -> RepositoryResult<()> {
        let mut versions = self.versions.write().await;
        versions
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound { id: id.to_string() })
    }

    async fn exists(&self, id: &str) -> RepositoryResult<bool> {
        let versions = self.versions.read().await;
        Ok(versions.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_version(name: &str, content: &str) -> NewVersion {
        NewVersion {
            name: name.to_string(),
            content: content.to_string(),
            model: "gemini".to_string(),
            metrics: None,
        }
    }

    #[tokio::test]
    async fn test_save_and_get() {
        let repo = InMemoryVersionRepository::new();
        let saved = repo.save(new_version("draft", "some intent")).await.unwrap();

        assert!(saved.id.starts_with("v_"));
        let loaded = repo.get(&saved.id).await.unwrap();
        assert_eq!(loaded, saved);
    }

    #[tokio::test]
    async fn test_save_requires_name_and_content() {
        let repo = InMemoryVersionRepository::new();

        let err = repo.save(new_version("", "content")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidVersion(_)));

        let err = repo.save(new_version("name", "   ")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::InvalidVersion(_)));
    }

    #[tokio::test]
    async fn test_list_newest_first() {
        let repo = InMemoryVersionRepository::new();
        let first = repo.save(new_version("first", "one")).await.unwrap();
        let second = repo.save(new_version("second", "two")).await.unwrap();

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        // Saved in the same instant at worst; ordering falls back to id.
        let names: Vec<&str> = all.iter().map(|v| v.name.as_str()).collect();
        assert!(names.contains(&first.name.as_str()));
        assert!(names.contains(&second.name.as_str()));
        assert!(all[0].created_at >= all[1].created_at);
    }

    #[tokio::test]
    async fn test_delete_lifecycle() {
        let repo = InMemoryVersionRepository::new();
        let saved = repo.save(new_version("draft", "content")).await.unwrap();

        assert!(repo.exists(&saved.id).await.unwrap());
        repo.delete(&saved.id).await.unwrap();
        assert!(!repo.exists(&saved.id).await.unwrap());

        let err = repo.delete(&saved.id).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_unique() {
        let repo = InMemoryVersionRepository::new();
        let a = repo.save(new_version("a", "one")).await.unwrap();
        let b = repo.save(new_version("b", "two")).await.unwrap();

        assert_ne!(a.id, b.id);
    }
}
