//! Version storage abstraction for the PromptOS compiler
//!
//! This crate provides a unified interface for saving, listing, and deleting
//! compiled prompt versions. Storage is an external collaborator of the core
//! pipeline: the compiler never reads or writes it, and it imposes no
//! ordering requirements on the pipeline.
//!
//! The current backend is ephemeral in-memory storage; the trait seam exists
//! so a persistent backend can be added without touching the server handlers.
//!
//! # Quick Start
//!
//! ```no_run
//! use promptos_repository::{InMemoryVersionRepository, NewVersion, VersionRepository};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let repo = InMemoryVersionRepository::new();
//!
//!     let saved = repo
//!         .save(NewVersion {
//!             name: "email validator".to_string(),
//!             content: "Write a short function that validates email addresses".to_string(),
//!             model: "gemini".to_string(),
//!             metrics: None,
//!         })
//!         .await?;
//!
//!     // Newest first
//!     let versions = repo.list().await?;
//!     assert_eq!(versions[0].id, saved.id);
//!
//!     repo.delete(&saved.id).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod models;
pub mod traits;

// Re-exports
pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryVersionRepository;
pub use models::{NewVersion, PromptVersion};
pub use traits::VersionRepository;
