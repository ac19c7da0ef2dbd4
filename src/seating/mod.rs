//! Seating Module — 分配工作流引擎
//!
//! 负责桌台分配与预订分配的生命周期，并保持 Table/Party/Reservation
//! 状态字段与分配状态一致。
//!
//! # 结构
//!
//! - [`transitions`] - 纯状态机：前置条件检查 + 状态写集
//! - [`engine`] - 读取实体、调用状态机、落盘写集的编排层

pub mod engine;
pub mod transitions;

pub use engine::AssignmentEngine;
pub use transitions::StatusWrites;

use crate::db::repository::RepoError;
use crate::utils::AppError;
use thiserror::Error;

/// Seating workflow error types
#[derive(Debug, Error)]
pub enum SeatingError {
    /// 实体状态不满足操作前置条件
    #[error("{0}")]
    InvalidState(String),

    /// 存储层错误，原样向上传播
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Result type for seating operations
pub type SeatingResult<T> = Result<T, SeatingError>;

impl From<SeatingError> for AppError {
    fn from(err: SeatingError) -> Self {
        match err {
            SeatingError::InvalidState(msg) => AppError::InvalidState(msg),
            SeatingError::Repo(e) => e.into(),
        }
    }
}
