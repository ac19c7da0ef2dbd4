//! Section Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Section, SectionCreate, SectionUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "section";

#[derive(Clone)]
pub struct SectionRepository {
    base: BaseRepository,
}

impl SectionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find sections, optionally scoped to a restaurant
    pub async fn find_all(&self, restaurant: Option<RecordId>) -> RepoResult<Vec<Section>> {
        let sections: Vec<Section> = match restaurant {
            Some(r) => {
                self.base
                    .db()
                    .query("SELECT * FROM section WHERE restaurant = $restaurant ORDER BY name")
                    .bind(("restaurant", r))
                    .await?
                    .take(0)?
            }
            None => {
                self.base
                    .db()
                    .query("SELECT * FROM section ORDER BY name")
                    .await?
                    .take(0)?
            }
        };
        Ok(sections)
    }

    /// Find section by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Section>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<Section>> {
        let section: Option<Section> = self.base.db().select(id.clone()).await?;
        Ok(section)
    }

    /// Create a new section
    pub async fn create(&self, data: SectionCreate) -> RepoResult<Section> {
        let now = now_millis();
        let section = Section {
            id: None,
            name: data.name,
            description: data.description,
            capacity: data.capacity,
            is_active: data.is_active,
            restaurant: data.restaurant,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Section> = self.base.db().create(TABLE).content(section).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create section".to_string()))
    }

    /// Update a section
    pub async fn update(&self, id: &str, data: SectionUpdate) -> RepoResult<Section> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Section {} not found", id)))?;

        let name = data.name.unwrap_or(existing.name);
        let description = data.description.or(existing.description);
        let capacity = data.capacity.unwrap_or(existing.capacity);
        let is_active = data.is_active.unwrap_or(existing.is_active);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, description = $description, \
                 capacity = $capacity, is_active = $is_active, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("name", name))
            .bind(("description", description))
            .bind(("capacity", capacity))
            .bind(("is_active", is_active))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Section {} not found", id)))
    }

    /// Hard delete a section
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
