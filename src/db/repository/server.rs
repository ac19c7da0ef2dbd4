//! Server Repository (服务员)

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Server, ServerCreate, ServerUpdate};
use crate::utils::time::now_millis;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "server";

#[derive(Clone)]
pub struct ServerRepository {
    base: BaseRepository,
}

impl ServerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find servers, optionally filtered by restaurant and active flag
    pub async fn find_filtered(
        &self,
        restaurant: Option<RecordId>,
        is_active: Option<bool>,
    ) -> RepoResult<Vec<Server>> {
        let mut conditions = Vec::new();
        if restaurant.is_some() {
            conditions.push("restaurant = $restaurant");
        }
        if is_active.is_some() {
            conditions.push("is_active = $is_active");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM server ORDER BY last_name, first_name".to_string()
        } else {
            format!(
                "SELECT * FROM server WHERE {} ORDER BY last_name, first_name",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(r) = restaurant {
            query = query.bind(("restaurant", r));
        }
        if let Some(a) = is_active {
            query = query.bind(("is_active", a));
        }

        let servers: Vec<Server> = query.await?.take(0)?;
        Ok(servers)
    }

    /// Find server by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Server>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<Server>> {
        let server: Option<Server> = self.base.db().select(id.clone()).await?;
        Ok(server)
    }

    /// Find server by employee id
    pub async fn find_by_employee_id(&self, employee_id: &str) -> RepoResult<Option<Server>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM server WHERE employee_id = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let servers: Vec<Server> = result.take(0)?;
        Ok(servers.into_iter().next())
    }

    /// Create a new server
    pub async fn create(&self, data: ServerCreate) -> RepoResult<Server> {
        // Check duplicate employee id
        if self
            .find_by_employee_id(&data.employee_id)
            .await?
            .is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Server with employee id '{}' already exists",
                data.employee_id
            )));
        }

        let now = now_millis();
        let server = Server {
            id: None,
            first_name: data.first_name,
            last_name: data.last_name,
            employee_id: data.employee_id,
            is_active: data.is_active,
            shift_start: data.shift_start,
            shift_end: data.shift_end,
            restaurant: data.restaurant,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Server> = self.base.db().create(TABLE).content(server).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create server".to_string()))
    }

    /// Update a server
    pub async fn update(&self, id: &str, data: ServerUpdate) -> RepoResult<Server> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Server {} not found", id)))?;

        // Check duplicate employee id if changing it
        if let Some(new_employee_id) = &data.employee_id
            && new_employee_id != &existing.employee_id
            && self.find_by_employee_id(new_employee_id).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Server with employee id '{}' already exists",
                new_employee_id
            )));
        }

        let first_name = data.first_name.unwrap_or(existing.first_name);
        let last_name = data.last_name.unwrap_or(existing.last_name);
        let employee_id = data.employee_id.unwrap_or(existing.employee_id);
        let is_active = data.is_active.unwrap_or(existing.is_active);
        let shift_start = data.shift_start.or(existing.shift_start);
        let shift_end = data.shift_end.or(existing.shift_end);

        self.base
            .db()
            .query(
                "UPDATE $thing SET first_name = $first_name, last_name = $last_name, \
                 employee_id = $employee_id, is_active = $is_active, \
                 shift_start = $shift_start, shift_end = $shift_end, updated_at = $now",
            )
            .bind(("thing", thing.clone()))
            .bind(("first_name", first_name))
            .bind(("last_name", last_name))
            .bind(("employee_id", employee_id))
            .bind(("is_active", is_active))
            .bind(("shift_start", shift_start))
            .bind(("shift_end", shift_end))
            .bind(("now", now_millis()))
            .await?;

        self.find(&thing)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Server {} not found", id)))
    }

    /// Hard delete a server
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
