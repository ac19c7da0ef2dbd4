//! Party Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Party lifecycle status
///
/// WAITING → SEATED → FINISHED，由分配引擎驱动；CANCELLED 由管理端设置。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PartyStatus {
    #[default]
    Waiting,
    Seated,
    Finished,
    Cancelled,
}

/// Party entity (就餐组) — a walk-in group awaiting or occupying a table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RecordId>,
    /// Party name, e.g. "Smith Party"
    pub name: String,
    /// Number of people in the party
    pub size: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub status: PartyStatus,
    /// Arrival time (Unix timestamp millis)
    pub arrival_time: i64,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}

/// Create party payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyCreate {
    pub name: String,
    pub size: i32,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub status: PartyStatus,
    /// Defaults to "now" when omitted
    pub arrival_time: Option<i64>,
}

/// Update party payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PartyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_time: Option<i64>,
}
