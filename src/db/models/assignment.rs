//! Assignment Models
//!
//! 分配记录将桌台、就餐组/预订、服务员绑定在一起，并拥有独立的生命周期状态。
//! 分配状态驱动所关联实体的状态（见 `seating` 模块）。

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Assignment lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AssignmentStatus {
    #[default]
    Active,
    Completed,
    Cancelled,
}

/// Table assignment (桌台分配) — binds a table, a walk-in party, and a server
///
/// Invariant (engine-enforced): while ACTIVE, the referenced table is
/// OCCUPIED and the referenced party is SEATED.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAssignment {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Table reference
    #[serde(with = "serde_helpers::record_id")]
    pub dining_table: RecordId,
    /// Party reference
    #[serde(with = "serde_helpers::record_id")]
    pub party: RecordId,
    /// Server reference
    #[serde(with = "serde_helpers::record_id")]
    pub server: RecordId,
    #[serde(default)]
    pub status: AssignmentStatus,
    /// When the assignment was made (Unix timestamp millis)
    pub assigned_at: i64,
    /// When the assignment was completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create table assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableAssignmentCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub party_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub server_id: RecordId,
    pub notes: Option<String>,
}

/// Update table assignment payload (partial)
///
/// `notes` 使用 double-Option：字段缺失不修改，显式 null 清空。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableAssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::double_option"
    )]
    pub notes: Option<Option<String>>,
}

/// Conjunctive (AND) filters for listing table assignments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableAssignmentFilter {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub table_id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub party_id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub server_id: Option<RecordId>,
    pub status: Option<AssignmentStatus>,
}

/// Reservation assignment (预订分配) — binds a table, a reservation, and a server
///
/// Invariant (engine-enforced): while ACTIVE, the referenced table is RESERVED.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationAssignment {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Reservation reference
    #[serde(with = "serde_helpers::record_id")]
    pub reservation: RecordId,
    /// Table reference
    #[serde(with = "serde_helpers::record_id")]
    pub dining_table: RecordId,
    /// Server reference
    #[serde(with = "serde_helpers::record_id")]
    pub server: RecordId,
    #[serde(default)]
    pub status: AssignmentStatus,
    pub assigned_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create reservation assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationAssignmentCreate {
    #[serde(with = "serde_helpers::record_id")]
    pub reservation_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: RecordId,
    #[serde(with = "serde_helpers::record_id")]
    pub server_id: RecordId,
    pub notes: Option<String>,
}

/// Update reservation assignment payload (partial)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReservationAssignmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AssignmentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<i64>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::double_option"
    )]
    pub notes: Option<Option<String>>,
}

/// Conjunctive (AND) filters for listing reservation assignments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationAssignmentFilter {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub reservation_id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub table_id: Option<RecordId>,
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub server_id: Option<RecordId>,
    pub status: Option<AssignmentStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&AssignmentStatus::Active).unwrap(),
            r#""ACTIVE""#
        );
        let parsed: AssignmentStatus = serde_json::from_str(r#""COMPLETED""#).unwrap();
        assert_eq!(parsed, AssignmentStatus::Completed);
    }

    #[test]
    fn patch_distinguishes_absent_from_null_notes() {
        let absent: TableAssignmentUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(absent.notes, None);

        let null: TableAssignmentUpdate = serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(null.notes, Some(None));

        let set: TableAssignmentUpdate =
            serde_json::from_str(r#"{"notes": "window seat"}"#).unwrap();
        assert_eq!(set.notes, Some(Some("window seat".to_string())));
    }

    #[test]
    fn patch_parses_status_and_completed_at() {
        let patch: TableAssignmentUpdate =
            serde_json::from_str(r#"{"status": "CANCELLED", "completed_at": 1700000000000}"#)
                .unwrap();
        assert_eq!(patch.status, Some(AssignmentStatus::Cancelled));
        assert_eq!(patch.completed_at, Some(1_700_000_000_000));
    }
}
