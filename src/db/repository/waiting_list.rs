//! Waiting List Repository
//!
//! Entries are served FIFO: all listing queries order by request_time.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{WaitingEntry, WaitingEntryCreate, WaitingEntryUpdate, WaitingStatus};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "waiting_entry";

#[derive(Clone)]
pub struct WaitingListRepository {
    base: BaseRepository,
}

impl WaitingListRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find entries, optionally filtered by restaurant and status, FIFO order
    pub async fn find_filtered(
        &self,
        restaurant: Option<RecordId>,
        status: Option<WaitingStatus>,
    ) -> RepoResult<Vec<WaitingEntry>> {
        let mut conditions = Vec::new();
        if restaurant.is_some() {
            conditions.push("restaurant = $restaurant");
        }
        if status.is_some() {
            conditions.push("status = $status");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM waiting_entry ORDER BY request_time".to_string()
        } else {
            format!(
                "SELECT * FROM waiting_entry WHERE {} ORDER BY request_time",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(r) = restaurant {
            query = query.bind(("restaurant", r));
        }
        if let Some(s) = status {
            query = query.bind(("status", s));
        }

        let entries: Vec<WaitingEntry> = query.await?.take(0)?;
        Ok(entries)
    }

    /// Find entry by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<WaitingEntry>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<WaitingEntry>> {
        let entry: Option<WaitingEntry> = self.base.db().select(id.clone()).await?;
        Ok(entry)
    }

    /// Next WAITING entry for a restaurant (earliest request_time)
    pub async fn find_next(&self, restaurant: RecordId) -> RepoResult<Option<WaitingEntry>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM waiting_entry WHERE restaurant = $restaurant \
                 AND status = 'WAITING' ORDER BY request_time LIMIT 1",
            )
            .bind(("restaurant", restaurant))
            .await?;
        let entries: Vec<WaitingEntry> = result.take(0)?;
        Ok(entries.into_iter().next())
    }

    /// Add an entry to the waiting list
    pub async fn create(&self, data: WaitingEntryCreate) -> RepoResult<WaitingEntry> {
        let now = now_millis();
        let entry = WaitingEntry {
            id: None,
            customer_name: data.customer_name,
            customer_phone: data.customer_phone,
            party_size: data.party_size,
            request_time: now,
            estimated_wait_time: data.estimated_wait_time,
            status: WaitingStatus::Waiting,
            notes: data.notes,
            restaurant: data.restaurant,
            created_at: now,
            updated_at: now,
        };

        let created: Option<WaitingEntry> = self.base.db().create(TABLE).content(entry).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create waiting entry".to_string()))
    }

    /// Update an entry
    pub async fn update(&self, id: &str, data: WaitingEntryUpdate) -> RepoResult<WaitingEntry> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Waiting entry {} not found", id)))?;

        let customer_name = data.customer_name.unwrap_or(existing.customer_name);
        let customer_phone = data.customer_phone.unwrap_or(existing.customer_phone);
        let party_size = data.party_size.unwrap_or(existing.party_size);
        let estimated_wait_time = data.estimated_wait_time.or(existing.estimated_wait_time);
        let status = data.status.unwrap_or(existing.status);
        let notes = data.notes.or(existing.notes);

        self.base
            .db()
            .query(
                "UPDATE $thing SET customer_name = $customer_name, \
                 customer_phone = $customer_phone, party_size = $party_size, \
                 estimated_wait_time = $estimated_wait_time, status = $status, \
                 notes = $notes, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("customer_name", customer_name))
            .bind(("customer_phone", customer_phone))
            .bind(("party_size", party_size))
            .bind(("estimated_wait_time", estimated_wait_time))
            .bind(("status", status))
            .bind(("notes", notes))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Waiting entry {} not found", id)))
    }

    /// Set only the lifecycle status
    pub async fn set_status(&self, id: &RecordId, status: WaitingStatus) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now")
            .bind(("thing", id.clone()))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?;
        Ok(())
    }

    /// Remove an entry from the waiting list
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
