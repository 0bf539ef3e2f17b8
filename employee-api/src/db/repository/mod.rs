//! Repository Module
//!
//! Storage-agnostic CRUD contract plus its implementations:
//!
//! - [`MemoryRepository`]: process-local, lock-guarded ordered map
//! - [`SqliteEmployeeRepository`]: SQLite via sqlx
//!
//! "Not found" on reads is `Ok(None)`, never an error. Callers check
//! existence before mutating.

pub mod memory;
pub mod sqlite;

pub use memory::MemoryRepository;
pub use sqlite::SqliteEmployeeRepository;

use async_trait::async_trait;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    /// Update targeted an id that is not stored
    #[error("Not found: {0}")]
    NotFound(i64),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// A stored record with a store-assigned integer identifier
pub trait Entity: Clone + Send + Sync + 'static {
    fn id(&self) -> i64;

    fn set_id(&mut self, id: i64);

    /// Copy the fields an update is allowed to change from `source`.
    fn apply_mutable(&mut self, source: &Self);
}

/// Common repository trait for basic CRUD
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored entity, ascending by id
    async fn get_all(&self) -> RepoResult<Vec<T>>;

    async fn get_by_id(&self, id: i64) -> RepoResult<Option<T>>;

    /// Store `entity`, writing the assigned id back into it
    async fn create(&self, entity: &mut T) -> RepoResult<()>;

    /// Replace the mutable fields of the stored entity with the same id
    async fn update(&self, entity: &T) -> RepoResult<()>;
}

impl From<RepoError> for shared::error::AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(id) => Self::employee_not_found(id),
            RepoError::Database(msg) => Self::database(msg),
        }
    }
}
