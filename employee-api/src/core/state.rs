//! Shared application state

use std::sync::Arc;

use crate::core::{Config, Result, StorageBackend};
use crate::db;
use crate::db::models::Employee;
use crate::db::repository::{MemoryRepository, Repository, SqliteEmployeeRepository};

/// Handle to the employee store, shared by every request
pub type EmployeeStore = Arc<dyn Repository<Employee>>;

#[derive(Clone)]
pub struct ServerState {
    pub employees: EmployeeStore,
}

impl ServerState {
    /// Build state around an existing repository
    pub fn new(employees: EmployeeStore) -> Self {
        Self { employees }
    }

    /// Fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRepository::<Employee>::new()))
    }

    /// Open the configured backend (migrating SQLite if needed)
    pub async fn initialize(config: &Config) -> Result<Self> {
        match config.storage {
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; data is lost on restart");
                Ok(Self::in_memory())
            }
            StorageBackend::Sqlite => {
                let pool = db::connect(&config.database_url, config.database_max_connections)
                    .await?;
                db::migrate(&pool).await?;
                tracing::info!(url = %config.database_url, "SQLite storage ready");
                Ok(Self::new(Arc::new(SqliteEmployeeRepository::new(pool))))
            }
        }
    }
}
