//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, TableStatus};
use crate::utils::time::now_millis;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dining_table";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

/// Conjunctive filters for listing dining tables
#[derive(Debug, Clone, Default)]
pub struct DiningTableFilter {
    pub restaurant: Option<RecordId>,
    pub section: Option<RecordId>,
    pub status: Option<TableStatus>,
}

#[derive(Clone)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find dining tables matching the filter (AND semantics)
    pub async fn find_filtered(&self, filter: DiningTableFilter) -> RepoResult<Vec<DiningTable>> {
        let mut conditions = Vec::new();
        if filter.restaurant.is_some() {
            conditions.push("restaurant = $restaurant");
        }
        if filter.section.is_some() {
            conditions.push("sections CONTAINS $section");
        }
        if filter.status.is_some() {
            conditions.push("status = $status");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM dining_table ORDER BY table_number".to_string()
        } else {
            format!(
                "SELECT * FROM dining_table WHERE {} ORDER BY table_number",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(r) = filter.restaurant {
            query = query.bind(("restaurant", r));
        }
        if let Some(s) = filter.section {
            query = query.bind(("section", s));
        }
        if let Some(st) = filter.status {
            query = query.bind(("status", st));
        }

        let tables: Vec<DiningTable> = query.await?.take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<DiningTable>> {
        let table: Option<DiningTable> = self.base.db().select(id.clone()).await?;
        Ok(table)
    }

    /// Active AVAILABLE tables in a restaurant seating at least `party_size`
    pub async fn find_available(
        &self,
        restaurant: RecordId,
        party_size: i32,
    ) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query(
                "SELECT * FROM dining_table WHERE restaurant = $restaurant \
                 AND is_active = true AND status = 'AVAILABLE' \
                 AND capacity >= $party_size ORDER BY capacity",
            )
            .bind(("restaurant", restaurant))
            .bind(("party_size", party_size))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Total table count for a restaurant
    pub async fn count_by_restaurant(&self, restaurant: RecordId) -> RepoResult<i64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM dining_table WHERE restaurant = $restaurant GROUP ALL")
            .bind(("restaurant", restaurant))
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Tables currently held by guests (OCCUPIED or RESERVED)
    pub async fn count_held(&self, restaurant: RecordId) -> RepoResult<i64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query(
                "SELECT count() FROM dining_table WHERE restaurant = $restaurant \
                 AND status IN ['OCCUPIED', 'RESERVED'] GROUP ALL",
            )
            .bind(("restaurant", restaurant))
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        let now = now_millis();
        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            capacity: data.capacity,
            location: data.location,
            is_active: data.is_active,
            status: data.status,
            restaurant: data.restaurant,
            sections: data.sections,
            created_at: now,
            updated_at: now,
        };

        let created: Option<DiningTable> = self.base.db().create(TABLE).content(table).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create dining table".to_string()))
    }

    /// Update a dining table
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        let table_number = data.table_number.unwrap_or(existing.table_number);
        let capacity = data.capacity.unwrap_or(existing.capacity);
        let location = data.location.unwrap_or(existing.location);
        let is_active = data.is_active.unwrap_or(existing.is_active);
        let status = data.status.unwrap_or(existing.status);
        let sections = data.sections.unwrap_or(existing.sections);

        self.base
            .db()
            .query(
                "UPDATE $thing SET table_number = $table_number, capacity = $capacity, \
                 location = $location, is_active = $is_active, status = $status, \
                 sections = $sections, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("table_number", table_number))
            .bind(("capacity", capacity))
            .bind(("location", location))
            .bind(("is_active", is_active))
            .bind(("status", status))
            .bind(("sections", sections))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Set only the lifecycle status (used by the assignment engine)
    pub async fn set_status(&self, id: &RecordId, status: TableStatus) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now")
            .bind(("thing", id.clone()))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?;
        Ok(())
    }

    /// Hard delete a dining table
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        if self.find(&thing).await?.is_none() {
            return Ok(false);
        }
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
