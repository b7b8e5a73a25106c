//! Database Module
//!
//! Opens the embedded SurrealDB instance and defines the schema.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "crewtrack";
const DATABASE: &str = "main";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the durable database at the given path (RocksDB engine)
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        let service = Self::prepare(db).await?;
        tracing::info!(path = %db_path.display(), "Database connection established (SurrealDB RocksDb)");
        Ok(service)
    }

    /// Open an in-memory database (tests and ephemeral tooling)
    pub async fn in_memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;

        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_schema(&db).await?;
        Ok(Self { db })
    }
}

/// Table and index definitions
///
/// External identifiers are unique per table; internal record ids are
/// store-assigned. Idempotent, runs on every startup.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS employee_user_id ON employee FIELDS user_id UNIQUE;

        DEFINE TABLE IF NOT EXISTS project SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS project_code ON project FIELDS code UNIQUE;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?
    .check()
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;

    tracing::debug!("Database schema defined");
    Ok(())
}
