//! Core trait definition for the version repository
//!
//! # Thread Safety
//!
//! All implementations must be `Send + Sync` for use across async tasks.

use crate::error::RepositoryResult;
use crate::models::{NewVersion, PromptVersion};
use async_trait::async_trait;

/// Repository for saved prompt versions
///
/// All operations are async for non-blocking backends; identifiers are the
/// repository-generated version ids.
#[async_trait]
pub trait VersionRepository: Send + Sync {
    /// Save a new version and return the stored record
    ///
    /// Name and content are required; the repository generates the id and
    /// creation timestamp.
    async fn save(&self, version: NewVersion) -> RepositoryResult<PromptVersion>;

    /// Load a version by id
    async fn get(&self, id: &str) -> RepositoryResult<PromptVersion>;

    /// List all versions, newest first
    async fn list(&self) -> RepositoryResult<Vec<PromptVersion>>;

    /// Delete a version by id
    ///
    /// Fails with `NotFound` when no version exists under the id.
    async fn delete(&self, id: &str) -> RepositoryResult<()>;

    /// Check whether a version exists
    async fn exists(&self, id: &str) -> RepositoryResult<bool>;
}
