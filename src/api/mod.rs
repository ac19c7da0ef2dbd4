//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`restaurants`] - 餐厅管理接口 (含可用性检查与占用分析)
//! - [`sections`] - 分区管理接口
//! - [`tables`] - 桌台管理接口
//! - [`parties`] - 就餐组管理接口
//! - [`reservations`] - 预订管理接口
//! - [`servers`] - 服务员管理接口
//! - [`waiting_list`] - 候位管理接口
//! - [`assignments`] - 分配工作流接口

pub mod health;

// Data models API
pub mod restaurants;
pub mod sections;
pub mod tables;
pub mod parties;
pub mod reservations;
pub mod servers;
pub mod waiting_list;

// Workflow API
pub mod assignments;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
