//! Party Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Party, PartyCreate, PartyStatus, PartyUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "party";

#[derive(Clone)]
pub struct PartyRepository {
    base: BaseRepository,
}

impl PartyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find parties, optionally filtered by status
    pub async fn find_all(&self, status: Option<PartyStatus>) -> RepoResult<Vec<Party>> {
        let parties: Vec<Party> = match status {
            Some(s) => {
                self.base
                    .db()
                    .query("SELECT * FROM party WHERE status = $status ORDER BY arrival_time")
                    .bind(("status", s))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM party ORDER BY arrival_time")
                    .await?
                    .take(0)?
            }
        };
        Ok(parties)
    }

    /// Find party by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Party>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<Party>> {
        let party: Option<Party> = self.base.db().select(id.clone()).await?;
        Ok(party)
    }

    /// Create a new party
    pub async fn create(&self, data: PartyCreate) -> RepoResult<Party> {
        let now = now_millis();
        let party = Party {
            id: None,
            name: data.name,
            size: data.size,
            phone: data.phone,
            email: data.email,
            status: data.status,
            arrival_time: data.arrival_time.unwrap_or(now),
            created_at: now,
            updated_at: now,
        };

        let created: Option<Party> = self.base.db().create(TABLE).content(party).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create party".to_string()))
    }

    /// Update a party
    pub async fn update(&self, id: &str, data: PartyUpdate) -> RepoResult<Party> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Party {} not found", id)))?;

        let name = data.name.unwrap_or(existing.name);
        let size = data.size.unwrap_or(existing.size);
        let phone = data.phone.or(existing.phone);
        let email = data.email.or(existing.email);
        let status = data.status.unwrap_or(existing.status);
        let arrival_time = data.arrival_time.unwrap_or(existing.arrival_time);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, size = $size, phone = $phone, \
                 email = $email, status = $status, arrival_time = $arrival_time, \
                 updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("name", name))
            .bind(("size", size))
            .bind(("phone", phone))
            .bind(("email", email))
            .bind(("status", status))
            .bind(("arrival_time", arrival_time))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Party {} not found", id)))
    }

    /// Set only the lifecycle status (used by the assignment engine)
    pub async fn set_status(&self, id: &RecordId, status: PartyStatus) -> RepoResult<()> {
        self.base
            .db()
            .query("UPDATE $thing SET status = $status, updated_at = $now")
            .bind(("thing", id.clone()))
            .bind(("status", status))
            .bind(("now", now_millis()))
            .await?;
        Ok(())
    }

    /// Hard delete a party
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
