//! Server Model (服务员)
//!
//! "Server" here is the restaurant staff member waiting tables, not the
//! HTTP server (see `core::Server` for that).

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Server entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Server {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    pub first_name: String,
    pub last_name: String,
    /// Unique employee identifier
    pub employee_id: String,
    #[serde(default = "default_true", deserialize_with = "serde_helpers::bool_true")]
    pub is_active: bool,
    /// Shift start (Unix timestamp millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<i64>,
    /// Shift end (Unix timestamp millis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<i64>,
    /// Restaurant reference
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

fn default_true() -> bool {
    true
}

/// Create server payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCreate {
    pub first_name: String,
    pub last_name: String,
    pub employee_id: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub shift_start: Option<i64>,
    pub shift_end: Option<i64>,
    #[serde(with = "serde_helpers::record_id")]
    pub restaurant: RecordId,
}

/// Update server payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_end: Option<i64>,
}
