//! Waiting List Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Waiting list entry status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WaitingStatus {
    #[default]
    Waiting,
    Seated,
    Cancelled,
    Expired,
}

/// Waiting list entry (候位) — FIFO by request_time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingEntry {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub customer_name: String,
    pub customer_phone: String,
    pub party_size: i32,
    /// When the customer joined the list (Unix timestamp millis)
    pub request_time: i64,
    /// Estimated wait in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_wait_time: Option<i32>,
    #[serde(default)]
    pub status: WaitingStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Restaurant reference
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create waiting list entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingEntryCreate {
    pub customer_name: String,
    pub customer_phone: String,
    pub party_size: i32,
    pub estimated_wait_time: Option<i32>,
    pub notes: Option<String>,
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
}

/// Update waiting list entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaitingEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_wait_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<WaitingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
