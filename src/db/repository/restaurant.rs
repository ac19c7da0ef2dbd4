//! Restaurant Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Restaurant, RestaurantCreate, RestaurantUpdate};
use crate::utils::time::now_millis;
use serde::Deserialize;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "restaurant";

#[derive(Debug, Deserialize)]
struct CountRow {
    count: i64,
}

#[derive(Clone)]
pub struct RestaurantRepository {
    base: BaseRepository,
}

impl RestaurantRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Paginated list, ordered by name
    pub async fn find_page(&self, limit: i64, offset: i64) -> RepoResult<Vec<Restaurant>> {
        // LIMIT/START 不接受绑定参数，数值直接拼入语句
        let restaurants: Vec<Restaurant> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM restaurant ORDER BY name LIMIT {limit} START {offset}"
            ))
            .await?
            .take(0)?;
        Ok(restaurants)
    }

    /// Total number of restaurants
    pub async fn count(&self) -> RepoResult<i64> {
        let row: Option<CountRow> = self
            .base
            .db()
            .query("SELECT count() FROM restaurant GROUP ALL")
            .await?
            .take(0)?;
        Ok(row.map(|r| r.count).unwrap_or(0))
    }

    /// Find restaurant by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Restaurant>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<Restaurant>> {
        let restaurant: Option<Restaurant> = self.base.db().select(id.clone()).await?;
        Ok(restaurant)
    }

    /// Create a new restaurant
    pub async fn create(&self, data: RestaurantCreate) -> RepoResult<Restaurant> {
        let now = now_millis();
        let restaurant = Restaurant {
            id: None,
            name: data.name,
            address: data.address,
            phone: data.phone,
            opening_time: data.opening_time,
            closing_time: data.closing_time,
            max_capacity: data.max_capacity,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Restaurant> = self.base.db().create(TABLE).content(restaurant).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create restaurant".to_string()))
    }

    /// Update a restaurant
    pub async fn update(&self, id: &str, data: RestaurantUpdate) -> RepoResult<Restaurant> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))?;

        let name = data.name.unwrap_or(existing.name);
        let address = data.address.unwrap_or(existing.address);
        let phone = data.phone.unwrap_or(existing.phone);
        let opening_time = data.opening_time.unwrap_or(existing.opening_time);
        let closing_time = data.closing_time.unwrap_or(existing.closing_time);
        let max_capacity = data.max_capacity.unwrap_or(existing.max_capacity);

        self.base
            .db()
            .query(
                "UPDATE $thing SET name = $name, address = $address, phone = $phone, \
                 opening_time = $opening_time, closing_time = $closing_time, \
                 max_capacity = $max_capacity, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("name", name))
            .bind(("address", address))
            .bind(("phone", phone))
            .bind(("opening_time", opening_time))
            .bind(("closing_time", closing_time))
            .bind(("max_capacity", max_capacity))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Restaurant {} not found", id)))
    }

    /// Hard delete a restaurant
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
