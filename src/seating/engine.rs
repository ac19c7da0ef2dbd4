//! Assignment Engine
//!
//! 每个操作是一段同步的 读取 → 前置检查 → 写入 序列，无锁也无重试。
//! 并发的 check-then-act 竞争未做防护，沿用最后写入生效的语义。

use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    AssignmentStatus, ReservationAssignment, ReservationAssignmentCreate,
    ReservationAssignmentFilter, ReservationAssignmentUpdate, TableAssignment,
    TableAssignmentCreate, TableAssignmentFilter, TableAssignmentUpdate,
};
use crate::db::repository::{
    DiningTableRepository, PartyRepository, ReservationAssignmentRepository, ReservationRepository,
    ServerRepository, TableAssignmentRepository,
};
use crate::utils::time::now_millis;

use super::transitions;
use super::{SeatingResult, StatusWrites};

/// Assignment Engine — owns the repositories the workflow touches
#[derive(Clone)]
pub struct AssignmentEngine {
    tables: DiningTableRepository,
    parties: PartyRepository,
    reservations: ReservationRepository,
    servers: ServerRepository,
    table_assignments: TableAssignmentRepository,
    reservation_assignments: ReservationAssignmentRepository,
}

impl AssignmentEngine {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            parties: PartyRepository::new(db.clone()),
            reservations: ReservationRepository::new(db.clone()),
            servers: ServerRepository::new(db.clone()),
            table_assignments: TableAssignmentRepository::new(db.clone()),
            reservation_assignments: ReservationAssignmentRepository::new(db),
        }
    }

    /// Apply a status write-set to the linked entities
    async fn apply_writes(
        &self,
        writes: &StatusWrites,
        table: Option<&RecordId>,
        party: Option<&RecordId>,
        reservation: Option<&RecordId>,
    ) -> SeatingResult<()> {
        if let (Some(status), Some(id)) = (writes.table, table) {
            self.tables.set_status(id, status).await?;
        }
        if let (Some(status), Some(id)) = (writes.party, party) {
            self.parties.set_status(id, status).await?;
        }
        if let (Some(status), Some(id)) = (writes.reservation, reservation) {
            self.reservations.set_status(id, status).await?;
        }
        Ok(())
    }

    // ========== Table Assignments ==========

    /// Seat a walk-in party at a table
    pub async fn create_table_assignment(
        &self,
        data: TableAssignmentCreate,
    ) -> SeatingResult<TableAssignment> {
        let table = self.tables.find(&data.table_id).await?;
        let party = self.parties.find(&data.party_id).await?;
        let server = self.servers.find(&data.server_id).await?;

        let writes = transitions::seat_party(table.as_ref(), party.as_ref(), server.as_ref())?;

        let now = now_millis();
        let assignment = TableAssignment {
            id: None,
            dining_table: data.table_id.clone(),
            party: data.party_id.clone(),
            server: data.server_id.clone(),
            status: AssignmentStatus::Active,
            assigned_at: now,
            completed_at: None,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        let created = self.table_assignments.insert(assignment).await?;

        self.apply_writes(&writes, Some(&data.table_id), Some(&data.party_id), None)
            .await?;

        tracing::info!(table = %data.table_id, party = %data.party_id, "table assignment created");
        Ok(created)
    }

    /// Get a table assignment by id
    pub async fn get_table_assignment(&self, id: &str) -> SeatingResult<Option<TableAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        Ok(self.table_assignments.find(&thing).await?)
    }

    /// List table assignments matching the filter
    pub async fn list_table_assignments(
        &self,
        filter: TableAssignmentFilter,
    ) -> SeatingResult<Vec<TableAssignment>> {
        Ok(self.table_assignments.find_filtered(filter).await?)
    }

    /// Partially update a table assignment
    ///
    /// A patch to COMPLETED marks the table CLEANING; the party is not
    /// touched here — only [`complete_table_assignment`](Self::complete_table_assignment)
    /// closes out the party lifecycle.
    pub async fn update_table_assignment(
        &self,
        id: &str,
        patch: TableAssignmentUpdate,
    ) -> SeatingResult<Option<TableAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let Some(mut assignment) = self.table_assignments.find(&thing).await? else {
            return Ok(None);
        };

        if let Some(status) = patch.status {
            assignment.status = status;
        }
        if let Some(completed_at) = patch.completed_at {
            assignment.completed_at = Some(completed_at);
        }
        match patch.notes {
            Some(Some(notes)) => assignment.notes = Some(notes),
            Some(None) => assignment.notes = None,
            None => {}
        }
        assignment.updated_at = now_millis();

        let table_ref = assignment.dining_table.clone();
        let updated = self.table_assignments.replace(&thing, assignment).await?;

        let writes = transitions::patch_status(patch.status);
        self.apply_writes(&writes, Some(&table_ref), None, None)
            .await?;

        Ok(updated)
    }

    /// Complete a table assignment: party leaves, table goes to CLEANING
    pub async fn complete_table_assignment(
        &self,
        id: &str,
    ) -> SeatingResult<Option<TableAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let Some(mut assignment) = self.table_assignments.find(&thing).await? else {
            return Ok(None);
        };

        let now = now_millis();
        assignment.status = AssignmentStatus::Completed;
        assignment.completed_at = Some(now);
        assignment.updated_at = now;

        let table_ref = assignment.dining_table.clone();
        let party_ref = assignment.party.clone();
        let updated = self.table_assignments.replace(&thing, assignment).await?;

        let writes = transitions::complete_seating();
        self.apply_writes(&writes, Some(&table_ref), Some(&party_ref), None)
            .await?;

        tracing::info!(assignment = %thing, "table assignment completed");
        Ok(updated)
    }

    /// Delete a table assignment; the table is released back to AVAILABLE
    /// regardless of the assignment's status at deletion time
    pub async fn delete_table_assignment(&self, id: &str) -> SeatingResult<bool> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(false);
        };
        let Some(assignment) = self.table_assignments.find(&thing).await? else {
            return Ok(false);
        };

        let writes = transitions::release_table();
        self.apply_writes(&writes, Some(&assignment.dining_table), None, None)
            .await?;

        self.table_assignments.remove(&thing).await?;
        Ok(true)
    }

    // ========== Reservation Assignments ==========

    /// Hold a table against a confirmed reservation
    pub async fn create_reservation_assignment(
        &self,
        data: ReservationAssignmentCreate,
    ) -> SeatingResult<ReservationAssignment> {
        let table = self.tables.find(&data.table_id).await?;
        let reservation = self.reservations.find(&data.reservation_id).await?;
        let server = self.servers.find(&data.server_id).await?;

        let writes =
            transitions::seat_reservation(table.as_ref(), reservation.as_ref(), server.as_ref())?;

        let now = now_millis();
        let assignment = ReservationAssignment {
            id: None,
            reservation: data.reservation_id.clone(),
            dining_table: data.table_id.clone(),
            server: data.server_id.clone(),
            status: AssignmentStatus::Active,
            assigned_at: now,
            completed_at: None,
            notes: data.notes,
            created_at: now,
            updated_at: now,
        };
        let created = self.reservation_assignments.insert(assignment).await?;

        self.apply_writes(
            &writes,
            Some(&data.table_id),
            None,
            Some(&data.reservation_id),
        )
        .await?;

        tracing::info!(table = %data.table_id, reservation = %data.reservation_id, "reservation assignment created");
        Ok(created)
    }

    /// Get a reservation assignment by id
    pub async fn get_reservation_assignment(
        &self,
        id: &str,
    ) -> SeatingResult<Option<ReservationAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        Ok(self.reservation_assignments.find(&thing).await?)
    }

    /// List reservation assignments matching the filter
    pub async fn list_reservation_assignments(
        &self,
        filter: ReservationAssignmentFilter,
    ) -> SeatingResult<Vec<ReservationAssignment>> {
        Ok(self.reservation_assignments.find_filtered(filter).await?)
    }

    /// Partially update a reservation assignment
    pub async fn update_reservation_assignment(
        &self,
        id: &str,
        patch: ReservationAssignmentUpdate,
    ) -> SeatingResult<Option<ReservationAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let Some(mut assignment) = self.reservation_assignments.find(&thing).await? else {
            return Ok(None);
        };

        if let Some(status) = patch.status {
            assignment.status = status;
        }
        if let Some(completed_at) = patch.completed_at {
            assignment.completed_at = Some(completed_at);
        }
        match patch.notes {
            Some(Some(notes)) => assignment.notes = Some(notes),
            Some(None) => assignment.notes = None,
            None => {}
        }
        assignment.updated_at = now_millis();

        let table_ref = assignment.dining_table.clone();
        let updated = self
            .reservation_assignments
            .replace(&thing, assignment)
            .await?;

        let writes = transitions::patch_status(patch.status);
        self.apply_writes(&writes, Some(&table_ref), None, None)
            .await?;

        Ok(updated)
    }

    /// Complete a reservation assignment
    pub async fn complete_reservation_assignment(
        &self,
        id: &str,
    ) -> SeatingResult<Option<ReservationAssignment>> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(None);
        };
        let Some(mut assignment) = self.reservation_assignments.find(&thing).await? else {
            return Ok(None);
        };

        let now = now_millis();
        assignment.status = AssignmentStatus::Completed;
        assignment.completed_at = Some(now);
        assignment.updated_at = now;

        let table_ref = assignment.dining_table.clone();
        let reservation_ref = assignment.reservation.clone();
        let updated = self
            .reservation_assignments
            .replace(&thing, assignment)
            .await?;

        let writes = transitions::complete_reservation_seating();
        self.apply_writes(&writes, Some(&table_ref), None, Some(&reservation_ref))
            .await?;

        tracing::info!(assignment = %thing, "reservation assignment completed");
        Ok(updated)
    }

    /// Delete a reservation assignment; the table is released unconditionally
    pub async fn delete_reservation_assignment(&self, id: &str) -> SeatingResult<bool> {
        let Ok(thing) = id.parse::<RecordId>() else {
            return Ok(false);
        };
        let Some(assignment) = self.reservation_assignments.find(&thing).await? else {
            return Ok(false);
        };

        let writes = transitions::release_table();
        self.apply_writes(&writes, Some(&assignment.dining_table), None, None)
            .await?;

        self.reservation_assignments.remove(&thing).await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::db::models::{
        DiningTableCreate, PartyCreate, PartyStatus, ReservationCreate, ReservationStatus,
        RestaurantCreate, ServerCreate, TableStatus,
    };
    use crate::db::repository::{
        DiningTableRepository, PartyRepository, ReservationRepository, RestaurantRepository,
        ServerRepository,
    };
    use crate::seating::SeatingError;

    struct TestEnv {
        db: Surreal<Db>,
        engine: AssignmentEngine,
        restaurant: RecordId,
    }

    async fn env() -> TestEnv {
        let db = DbService::memory().await.unwrap().db;
        let restaurant = RestaurantRepository::new(db.clone())
            .create(RestaurantCreate {
                name: "Reef".to_string(),
                address: "1 Harbour St".to_string(),
                phone: "555-0100".to_string(),
                opening_time: "11:00:00".to_string(),
                closing_time: "23:00:00".to_string(),
                max_capacity: 60,
            })
            .await
            .unwrap()
            .id
            .unwrap();
        TestEnv {
            engine: AssignmentEngine::new(db.clone()),
            db,
            restaurant,
        }
    }

    impl TestEnv {
        async fn table(&self, number: &str, status: TableStatus) -> RecordId {
            DiningTableRepository::new(self.db.clone())
                .create(DiningTableCreate {
                    table_number: number.to_string(),
                    capacity: 4,
                    location: "main floor".to_string(),
                    is_active: true,
                    status,
                    restaurant: self.restaurant.clone(),
                    sections: vec![],
                })
                .await
                .unwrap()
                .id
                .unwrap()
        }

        async fn party(&self, name: &str, status: PartyStatus) -> RecordId {
            PartyRepository::new(self.db.clone())
                .create(PartyCreate {
                    name: name.to_string(),
                    size: 4,
                    phone: None,
                    email: None,
                    status,
                    arrival_time: None,
                })
                .await
                .unwrap()
                .id
                .unwrap()
        }

        async fn server(&self, employee_id: &str, is_active: bool) -> RecordId {
            ServerRepository::new(self.db.clone())
                .create(ServerCreate {
                    first_name: "Ana".to_string(),
                    last_name: "Lopez".to_string(),
                    employee_id: employee_id.to_string(),
                    is_active,
                    shift_start: None,
                    shift_end: None,
                    restaurant: self.restaurant.clone(),
                })
                .await
                .unwrap()
                .id
                .unwrap()
        }

        async fn reservation(&self, status: ReservationStatus) -> RecordId {
            let repo = ReservationRepository::new(self.db.clone());
            let created = repo
                .create(ReservationCreate {
                    reservation_time: 1_900_000_000_000,
                    party_size: 2,
                    customer_name: "Lee".to_string(),
                    customer_phone: "555-0111".to_string(),
                    customer_email: None,
                    special_requests: None,
                    restaurant: self.restaurant.clone(),
                    party: None,
                })
                .await
                .unwrap();
            let id = created.id.unwrap();
            if status != ReservationStatus::Pending {
                repo.set_status(&id, status).await.unwrap();
            }
            id
        }

        async fn table_status(&self, id: &RecordId) -> TableStatus {
            DiningTableRepository::new(self.db.clone())
                .find(id)
                .await
                .unwrap()
                .unwrap()
                .status
        }

        async fn party_status(&self, id: &RecordId) -> PartyStatus {
            PartyRepository::new(self.db.clone())
                .find(id)
                .await
                .unwrap()
                .unwrap()
                .status
        }

        async fn reservation_status(&self, id: &RecordId) -> ReservationStatus {
            ReservationRepository::new(self.db.clone())
                .find(id)
                .await
                .unwrap()
                .unwrap()
                .status
        }
    }

    fn create_payload(
        table: &RecordId,
        party: &RecordId,
        server: &RecordId,
    ) -> TableAssignmentCreate {
        TableAssignmentCreate {
            table_id: table.clone(),
            party_id: party.clone(),
            server_id: server.clone(),
            notes: None,
        }
    }

    fn invalid_state_reason(err: SeatingError) -> String {
        match err {
            SeatingError::InvalidState(msg) => msg,
            other => panic!("expected InvalidState, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn create_seats_party_and_occupies_table() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let assignment = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap();

        assert_eq!(assignment.status, AssignmentStatus::Active);
        assert!(assignment.assigned_at > 0);
        assert!(assignment.completed_at.is_none());
        assert_eq!(env.table_status(&table).await, TableStatus::Occupied);
        assert_eq!(env.party_status(&party).await, PartyStatus::Seated);
    }

    #[tokio::test]
    async fn create_rejects_unavailable_table_without_writes() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Cleaning).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let err = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap_err();
        assert_eq!(
            invalid_state_reason(err),
            "Table is not available for assignment"
        );

        // No assignment row was written, no status changed
        let all = env
            .engine
            .list_table_assignments(TableAssignmentFilter::default())
            .await
            .unwrap();
        assert!(all.is_empty());
        assert_eq!(env.table_status(&table).await, TableStatus::Cleaning);
        assert_eq!(env.party_status(&party).await, PartyStatus::Waiting);
    }

    #[tokio::test]
    async fn second_create_for_same_table_fails() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        env.engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap();

        // The first call consumed the table's AVAILABLE status
        let err = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap_err();
        assert_eq!(
            invalid_state_reason(err),
            "Table is not available for assignment"
        );

        let all = env
            .engine
            .list_table_assignments(TableAssignmentFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_inactive_server() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", false).await;

        let err = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap_err();
        assert_eq!(
            invalid_state_reason(err),
            "Server is not available for assignment"
        );
    }

    #[tokio::test]
    async fn complete_finishes_party_and_marks_table_cleaning() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let assignment = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap();
        let id = assignment.id.unwrap().to_string();

        let completed = env
            .engine
            .complete_table_assignment(&id)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(completed.status, AssignmentStatus::Completed);
        assert!(completed.completed_at.is_some());
        assert_eq!(env.table_status(&table).await, TableStatus::Cleaning);
        assert_eq!(env.party_status(&party).await, PartyStatus::Finished);
    }

    #[tokio::test]
    async fn update_to_completed_leaves_party_seated() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let assignment = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap();
        let id = assignment.id.unwrap().to_string();

        let patch = TableAssignmentUpdate {
            status: Some(AssignmentStatus::Completed),
            ..Default::default()
        };
        let updated = env
            .engine
            .update_table_assignment(&id, patch)
            .await
            .unwrap()
            .unwrap();

        // The table is marked for cleaning, but the party stays SEATED and
        // no completion timestamp is stamped — only the dedicated complete
        // path does those.
        assert_eq!(updated.status, AssignmentStatus::Completed);
        assert!(updated.completed_at.is_none());
        assert_eq!(env.table_status(&table).await, TableStatus::Cleaning);
        assert_eq!(env.party_status(&party).await, PartyStatus::Seated);
    }

    #[tokio::test]
    async fn update_notes_double_option() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let mut payload = create_payload(&table, &party, &server);
        payload.notes = Some("birthday".to_string());
        let assignment = env.engine.create_table_assignment(payload).await.unwrap();
        let id = assignment.id.unwrap().to_string();

        // Patch without notes leaves them unchanged
        let updated = env
            .engine
            .update_table_assignment(&id, TableAssignmentUpdate::default())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.notes.as_deref(), Some("birthday"));

        // Explicit null clears them
        let patch = TableAssignmentUpdate {
            notes: Some(None),
            ..Default::default()
        };
        let updated = env
            .engine
            .update_table_assignment(&id, patch)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.notes, None);
    }

    #[tokio::test]
    async fn delete_resets_table_even_when_completed() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let party = env.party("Smith Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let assignment = env
            .engine
            .create_table_assignment(create_payload(&table, &party, &server))
            .await
            .unwrap();
        let id = assignment.id.unwrap().to_string();

        env.engine.complete_table_assignment(&id).await.unwrap();
        assert_eq!(env.table_status(&table).await, TableStatus::Cleaning);

        let deleted = env.engine.delete_table_assignment(&id).await.unwrap();
        assert!(deleted);

        // Table released even though the assignment was already COMPLETED;
        // the party keeps its FINISHED status.
        assert_eq!(env.table_status(&table).await, TableStatus::Available);
        assert_eq!(env.party_status(&party).await, PartyStatus::Finished);
        assert!(
            env.engine
                .get_table_assignment(&id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn missing_ids_are_absent_results_not_errors() {
        let env = env().await;
        assert!(
            env.engine
                .get_table_assignment("table_assignment:nope")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            env.engine
                .update_table_assignment(
                    "table_assignment:nope",
                    TableAssignmentUpdate::default()
                )
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            env.engine
                .complete_table_assignment("table_assignment:nope")
                .await
                .unwrap()
                .is_none()
        );
        assert!(
            !env.engine
                .delete_table_assignment("table_assignment:nope")
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn filters_are_conjunctive() {
        let env = env().await;
        let t1 = env.table("T1", TableStatus::Available).await;
        let t2 = env.table("T2", TableStatus::Available).await;
        let p1 = env.party("Smith Party", PartyStatus::Waiting).await;
        let p2 = env.party("Chan Party", PartyStatus::Waiting).await;
        let server = env.server("EMP-1", true).await;

        let a1 = env
            .engine
            .create_table_assignment(create_payload(&t1, &p1, &server))
            .await
            .unwrap();
        env.engine
            .create_table_assignment(create_payload(&t2, &p2, &server))
            .await
            .unwrap();
        env.engine
            .complete_table_assignment(&a1.id.clone().unwrap().to_string())
            .await
            .unwrap();

        let active = env
            .engine
            .list_table_assignments(TableAssignmentFilter {
                status: Some(AssignmentStatus::Active),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].dining_table, t2);

        // status + table filters combine with AND
        let none = env
            .engine
            .list_table_assignments(TableAssignmentFilter {
                table_id: Some(t1.clone()),
                status: Some(AssignmentStatus::Active),
                ..Default::default()
            })
            .await
            .unwrap();
        assert!(none.is_empty());

        let by_server = env
            .engine
            .list_table_assignments(TableAssignmentFilter {
                server_id: Some(server.clone()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(by_server.len(), 2);
    }

    #[tokio::test]
    async fn reservation_assignment_requires_confirmed() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let server = env.server("EMP-1", true).await;
        let pending = env.reservation(ReservationStatus::Pending).await;

        let err = env
            .engine
            .create_reservation_assignment(ReservationAssignmentCreate {
                reservation_id: pending.clone(),
                table_id: table.clone(),
                server_id: server.clone(),
                notes: None,
            })
            .await
            .unwrap_err();
        assert_eq!(
            invalid_state_reason(err),
            "Reservation is not available for assignment"
        );
        assert_eq!(env.table_status(&table).await, TableStatus::Available);
    }

    #[tokio::test]
    async fn reservation_assignment_lifecycle() {
        let env = env().await;
        let table = env.table("T1", TableStatus::Available).await;
        let server = env.server("EMP-1", true).await;
        let reservation = env.reservation(ReservationStatus::Confirmed).await;

        let assignment = env
            .engine
            .create_reservation_assignment(ReservationAssignmentCreate {
                reservation_id: reservation.clone(),
                table_id: table.clone(),
                server_id: server.clone(),
                notes: None,
            })
            .await
            .unwrap();

        assert_eq!(assignment.status, AssignmentStatus::Active);
        assert_eq!(env.table_status(&table).await, TableStatus::Reserved);
        assert_eq!(
            env.reservation_status(&reservation).await,
            ReservationStatus::Confirmed
        );

        let id = assignment.id.unwrap().to_string();
        let completed = env
            .engine
            .complete_reservation_assignment(&id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(completed.status, AssignmentStatus::Completed);
        assert!(completed.completed_at.is_some());
        assert_eq!(env.table_status(&table).await, TableStatus::Cleaning);
        assert_eq!(
            env.reservation_status(&reservation).await,
            ReservationStatus::Completed
        );

        let deleted = env.engine.delete_reservation_assignment(&id).await.unwrap();
        assert!(deleted);
        assert_eq!(env.table_status(&table).await, TableStatus::Available);
    }
}
