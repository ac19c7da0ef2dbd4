//! Seating Transitions
//!
//! 分配生命周期的纯状态机：检查前置条件，产出应写入关联实体的状态写集。
//! 不做任何 I/O —— 引擎负责读取实体和落盘写集。

use crate::db::models::{
    AssignmentStatus, DiningTable, Party, PartyStatus, Reservation, ReservationStatus, Server,
    TableStatus,
};

use super::{SeatingError, SeatingResult};

/// Status write-set emitted by a lifecycle transition.
///
/// `None` means the entity's status is left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusWrites {
    pub table: Option<TableStatus>,
    pub party: Option<PartyStatus>,
    pub reservation: Option<ReservationStatus>,
}

/// Preconditions and write-set for seating a walk-in party.
///
/// Checked in order; each failure is a distinct rejection:
/// 1. table exists and is AVAILABLE
/// 2. party exists and is WAITING
/// 3. server exists and is active
pub fn seat_party(
    table: Option<&DiningTable>,
    party: Option<&Party>,
    server: Option<&Server>,
) -> SeatingResult<StatusWrites> {
    if !table.is_some_and(|t| t.status == TableStatus::Available) {
        return Err(SeatingError::InvalidState(
            "Table is not available for assignment".to_string(),
        ));
    }
    if !party.is_some_and(|p| p.status == PartyStatus::Waiting) {
        return Err(SeatingError::InvalidState(
            "Party is not available for assignment".to_string(),
        ));
    }
    if !server.is_some_and(|s| s.is_active) {
        return Err(SeatingError::InvalidState(
            "Server is not available for assignment".to_string(),
        ));
    }

    Ok(StatusWrites {
        table: Some(TableStatus::Occupied),
        party: Some(PartyStatus::Seated),
        reservation: None,
    })
}

/// Preconditions and write-set for holding a table against a reservation.
///
/// The reservation must already be CONFIRMED (not PENDING). The write-set
/// re-asserts CONFIRMED on the reservation, a state-wise no-op.
pub fn seat_reservation(
    table: Option<&DiningTable>,
    reservation: Option<&Reservation>,
    server: Option<&Server>,
) -> SeatingResult<StatusWrites> {
    if !table.is_some_and(|t| t.status == TableStatus::Available) {
        return Err(SeatingError::InvalidState(
            "Table is not available for assignment".to_string(),
        ));
    }
    if !reservation.is_some_and(|r| r.status == ReservationStatus::Confirmed) {
        return Err(SeatingError::InvalidState(
            "Reservation is not available for assignment".to_string(),
        ));
    }
    if !server.is_some_and(|s| s.is_active) {
        return Err(SeatingError::InvalidState(
            "Server is not available for assignment".to_string(),
        ));
    }

    Ok(StatusWrites {
        table: Some(TableStatus::Reserved),
        party: None,
        reservation: Some(ReservationStatus::Confirmed),
    })
}

/// Write-set for completing a table assignment.
///
/// The table goes to CLEANING, never straight back to AVAILABLE; a separate
/// release (assignment deletion or administrative edit) makes it AVAILABLE
/// again. This is the only path that closes out the party lifecycle.
pub fn complete_seating() -> StatusWrites {
    StatusWrites {
        table: Some(TableStatus::Cleaning),
        party: Some(PartyStatus::Finished),
        reservation: None,
    }
}

/// Write-set for completing a reservation assignment.
pub fn complete_reservation_seating() -> StatusWrites {
    StatusWrites {
        table: Some(TableStatus::Cleaning),
        party: None,
        reservation: Some(ReservationStatus::Completed),
    }
}

/// Write-set for a partial status patch on an assignment.
///
/// A patch to COMPLETED marks the table for cleaning but does not touch the
/// party or reservation; only the dedicated complete operations do that.
pub fn patch_status(new_status: Option<AssignmentStatus>) -> StatusWrites {
    match new_status {
        Some(AssignmentStatus::Completed) => StatusWrites {
            table: Some(TableStatus::Cleaning),
            party: None,
            reservation: None,
        },
        _ => StatusWrites::default(),
    }
}

/// Write-set applied when an assignment row is removed.
///
/// The table is released back to AVAILABLE regardless of the assignment's
/// status at deletion time; party and reservation are left untouched.
pub fn release_table() -> StatusWrites {
    StatusWrites {
        table: Some(TableStatus::Available),
        party: None,
        reservation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use surrealdb::RecordId;

    fn table(status: TableStatus) -> DiningTable {
        DiningTable {
            id: Some(RecordId::from_table_key("dining_table", "t1")),
            table_number: "T1".to_string(),
            capacity: 4,
            location: "window".to_string(),
            is_active: true,
            status,
            restaurant: RecordId::from_table_key("restaurant", "r1"),
            sections: vec![],
            created_at: 0,
            updated_at: 0,
        }
    }

    fn party(status: PartyStatus) -> Party {
        Party {
            id: Some(RecordId::from_table_key("party", "p1")),
            name: "Smith Party".to_string(),
            size: 4,
            phone: None,
            email: None,
            status,
            arrival_time: 0,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn server(is_active: bool) -> Server {
        Server {
            id: Some(RecordId::from_table_key("server", "s1")),
            first_name: "Ana".to_string(),
            last_name: "Lopez".to_string(),
            employee_id: "EMP-1".to_string(),
            is_active,
            shift_start: None,
            shift_end: None,
            restaurant: RecordId::from_table_key("restaurant", "r1"),
            created_at: 0,
            updated_at: 0,
        }
    }

    fn reservation(status: ReservationStatus) -> Reservation {
        Reservation {
            id: Some(RecordId::from_table_key("reservation", "v1")),
            reservation_time: 0,
            party_size: 2,
            customer_name: "Lee".to_string(),
            customer_phone: "555".to_string(),
            customer_email: None,
            special_requests: None,
            status,
            restaurant: RecordId::from_table_key("restaurant", "r1"),
            party: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn reason(err: SeatingError) -> String {
        match err {
            SeatingError::InvalidState(msg) => msg,
            other => panic!("expected InvalidState, got {other:?}"),
        }
    }

    #[test]
    fn seat_party_emits_occupied_and_seated() {
        let writes = seat_party(
            Some(&table(TableStatus::Available)),
            Some(&party(PartyStatus::Waiting)),
            Some(&server(true)),
        )
        .unwrap();
        assert_eq!(writes.table, Some(TableStatus::Occupied));
        assert_eq!(writes.party, Some(PartyStatus::Seated));
        assert_eq!(writes.reservation, None);
    }

    #[test]
    fn seat_party_rejects_unavailable_table() {
        for status in [
            TableStatus::Occupied,
            TableStatus::Reserved,
            TableStatus::OutOfOrder,
            TableStatus::Cleaning,
        ] {
            let err = seat_party(
                Some(&table(status)),
                Some(&party(PartyStatus::Waiting)),
                Some(&server(true)),
            )
            .unwrap_err();
            assert_eq!(reason(err), "Table is not available for assignment");
        }
    }

    #[test]
    fn seat_party_rejects_missing_table() {
        let err = seat_party(None, Some(&party(PartyStatus::Waiting)), Some(&server(true)))
            .unwrap_err();
        assert_eq!(reason(err), "Table is not available for assignment");
    }

    #[test]
    fn seat_party_rejects_non_waiting_party() {
        let err = seat_party(
            Some(&table(TableStatus::Available)),
            Some(&party(PartyStatus::Seated)),
            Some(&server(true)),
        )
        .unwrap_err();
        assert_eq!(reason(err), "Party is not available for assignment");
    }

    #[test]
    fn seat_party_rejects_inactive_server() {
        let err = seat_party(
            Some(&table(TableStatus::Available)),
            Some(&party(PartyStatus::Waiting)),
            Some(&server(false)),
        )
        .unwrap_err();
        assert_eq!(reason(err), "Server is not available for assignment");
    }

    #[test]
    fn table_precondition_is_checked_first() {
        // Table and party are both in the wrong state; the table failure wins
        let err = seat_party(
            Some(&table(TableStatus::Cleaning)),
            Some(&party(PartyStatus::Finished)),
            None,
        )
        .unwrap_err();
        assert_eq!(reason(err), "Table is not available for assignment");
    }

    #[test]
    fn seat_reservation_requires_confirmed() {
        for status in [
            ReservationStatus::Pending,
            ReservationStatus::Cancelled,
            ReservationStatus::Completed,
            ReservationStatus::NoShow,
        ] {
            let err = seat_reservation(
                Some(&table(TableStatus::Available)),
                Some(&reservation(status)),
                Some(&server(true)),
            )
            .unwrap_err();
            assert_eq!(reason(err), "Reservation is not available for assignment");
        }
    }

    #[test]
    fn seat_reservation_emits_reserved() {
        let writes = seat_reservation(
            Some(&table(TableStatus::Available)),
            Some(&reservation(ReservationStatus::Confirmed)),
            Some(&server(true)),
        )
        .unwrap();
        assert_eq!(writes.table, Some(TableStatus::Reserved));
        assert_eq!(writes.party, None);
        // Redundant re-assertion, kept as observable behavior
        assert_eq!(writes.reservation, Some(ReservationStatus::Confirmed));
    }

    #[test]
    fn complete_seating_finishes_party_and_marks_cleaning() {
        let writes = complete_seating();
        assert_eq!(writes.table, Some(TableStatus::Cleaning));
        assert_eq!(writes.party, Some(PartyStatus::Finished));
    }

    #[test]
    fn patch_to_completed_only_touches_table() {
        let writes = patch_status(Some(AssignmentStatus::Completed));
        assert_eq!(writes.table, Some(TableStatus::Cleaning));
        assert_eq!(writes.party, None);
        assert_eq!(writes.reservation, None);
    }

    #[test]
    fn patch_to_other_statuses_touches_nothing() {
        assert_eq!(patch_status(Some(AssignmentStatus::Active)), StatusWrites::default());
        assert_eq!(
            patch_status(Some(AssignmentStatus::Cancelled)),
            StatusWrites::default()
        );
        assert_eq!(patch_status(None), StatusWrites::default());
    }

    #[test]
    fn release_always_frees_the_table() {
        let writes = release_table();
        assert_eq!(writes.table, Some(TableStatus::Available));
        assert_eq!(writes.party, None);
        assert_eq!(writes.reservation, None);
    }
}
