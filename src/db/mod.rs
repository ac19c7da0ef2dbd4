//! Database Module
//!
//! Embedded SurrealDB storage: RocksDB engine on disk at runtime,
//! in-memory engine for tests.

pub mod models;
pub mod repository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "reef";
const DATABASE: &str = "host";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the on-disk database and apply schema definitions
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        let service = Self::init(db).await?;
        tracing::info!("Database connection established ({db_path})");
        Ok(service)
    }

    /// In-memory database (测试用)
    pub async fn memory() -> Result<Self, AppError> {
        let db = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::init(db).await
    }

    async fn init(db: Surreal<Db>) -> Result<Self, AppError> {
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
/// Tables are schemaless; the models own the field shapes. The unique
/// employee_id index backs the duplicate check in the server repository.
async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        "
        DEFINE TABLE IF NOT EXISTS restaurant SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS section SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS dining_table SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS party SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS server SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS waiting_entry SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS table_assignment SCHEMALESS;
        DEFINE TABLE IF NOT EXISTS reservation_assignment SCHEMALESS;
        DEFINE INDEX IF NOT EXISTS server_employee_id ON TABLE server FIELDS employee_id UNIQUE;
        ",
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define schema: {e}")))?;
    Ok(())
}
