//! Assignment Repositories
//!
//! Row access only. Lifecycle rules (preconditions and the status
//! write-set applied to linked entities) live in the `seating` module.

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{
    ReservationAssignment, ReservationAssignmentFilter, TableAssignment, TableAssignmentFilter,
};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE_ASSIGNMENT: &str = "table_assignment";
const RESERVATION_ASSIGNMENT: &str = "reservation_assignment";

#[derive(Clone)]
pub struct TableAssignmentRepository {
    base: BaseRepository,
}

impl TableAssignmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find assignment by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<TableAssignment>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<TableAssignment>> {
        let assignment: Option<TableAssignment> = self.base.db().select(id.clone()).await?;
        Ok(assignment)
    }

    /// Find assignments matching the filter (AND semantics)
    pub async fn find_filtered(
        &self,
        filter: TableAssignmentFilter,
    ) -> RepoResult<Vec<TableAssignment>> {
        let mut conditions = Vec::new();
        if filter.table_id.is_some() {
            conditions.push("dining_table = $table");
        }
        if filter.party_id.is_some() {
            conditions.push("party = $party");
        }
        if filter.server_id.is_some() {
            conditions.push("server = $server");
        }
        if filter.status.is_some() {
            conditions.push("status = $status");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM table_assignment ORDER BY assigned_at".to_string()
        } else {
            format!(
                "SELECT * FROM table_assignment WHERE {} ORDER BY assigned_at",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(t) = filter.table_id {
            query = query.bind(("table", t));
        }
        if let Some(p) = filter.party_id {
            query = query.bind(("party", p));
        }
        if let Some(s) = filter.server_id {
            query = query.bind(("server", s));
        }
        if let Some(st) = filter.status {
            query = query.bind(("status", st));
        }

        let assignments: Vec<TableAssignment> = query.await?.take(0)?;
        Ok(assignments)
    }

    /// Insert a new assignment row
    pub async fn insert(&self, assignment: TableAssignment) -> RepoResult<TableAssignment> {
        let created: Option<TableAssignment> = self
            .base
            .db()
            .create(TABLE_ASSIGNMENT)
            .content(assignment)
            .await?;
        created.ok_or_else(|| RepoError::Database("Failed to create table assignment".to_string()))
    }

    /// Replace the full assignment record
    pub async fn replace(
        &self,
        id: &RecordId,
        assignment: TableAssignment,
    ) -> RepoResult<Option<TableAssignment>> {
        let updated: Option<TableAssignment> = self
            .base
            .db()
            .update(id.clone())
            .content(assignment)
            .await?;
        Ok(updated)
    }

    /// Remove the assignment row (caller has already checked existence)
    pub async fn remove(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", id.clone()))
            .await?;
        Ok(())
    }
}

#[derive(Clone)]
pub struct ReservationAssignmentRepository {
    base: BaseRepository,
}

impl ReservationAssignmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find assignment by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ReservationAssignment>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.find(&thing).await
    }

    pub async fn find(&self, id: &RecordId) -> RepoResult<Option<ReservationAssignment>> {
        let assignment: Option<ReservationAssignment> = self.base.db().select(id.clone()).await?;
        Ok(assignment)
    }

    /// Find assignments matching the filter (AND semantics)
    pub async fn find_filtered(
        &self,
        filter: ReservationAssignmentFilter,
    ) -> RepoResult<Vec<ReservationAssignment>> {
        let mut conditions = Vec::new();
        if filter.reservation_id.is_some() {
            conditions.push("reservation = $reservation");
        }
        if filter.table_id.is_some() {
            conditions.push("dining_table = $table");
        }
        if filter.server_id.is_some() {
            conditions.push("server = $server");
        }
        if filter.status.is_some() {
            conditions.push("status = $status");
        }

        let sql = if conditions.is_empty() {
            "SELECT * FROM reservation_assignment ORDER BY assigned_at".to_string()
        } else {
            format!(
                "SELECT * FROM reservation_assignment WHERE {} ORDER BY assigned_at",
                conditions.join(" AND ")
            )
        };

        let mut query = self.base.db().query(sql);
        if let Some(r) = filter.reservation_id {
            query = query.bind(("reservation", r));
        }
        if let Some(t) = filter.table_id {
            query = query.bind(("table", t));
        }
        if let Some(s) = filter.server_id {
            query = query.bind(("server", s));
        }
        if let Some(st) = filter.status {
            query = query.bind(("status", st));
        }

        let assignments: Vec<ReservationAssignment> = query.await?.take(0)?;
        Ok(assignments)
    }

    /// Insert a new assignment row
    pub async fn insert(
        &self,
        assignment: ReservationAssignment,
    ) -> RepoResult<ReservationAssignment> {
        let created: Option<ReservationAssignment> = self
            .base
            .db()
            .create(RESERVATION_ASSIGNMENT)
            .content(assignment)
            .await?;
        created.ok_or_else(|| {
            RepoError::Database("Failed to create reservation assignment".to_string())
        })
    }

    /// Replace the full assignment record
    pub async fn replace(
        &self,
        id: &RecordId,
        assignment: ReservationAssignment,
    ) -> RepoResult<Option<ReservationAssignment>> {
        let updated: Option<ReservationAssignment> = self
            .base
            .db()
            .update(id.clone())
            .content(assignment)
            .await?;
        Ok(updated)
    }

    /// Remove the assignment row (caller has already checked existence)
    pub async fn remove(&self, id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", id.clone()))
            .await?;
        Ok(())
    }
}
