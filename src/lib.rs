//! Reef Host - 餐厅座位与预订管理后端
//!
//! # 架构概述
//!
//! 本模块是 Reef Host 的主入口，提供以下核心功能：
//!
//! - **数据库** (`db`): 嵌入式 SurrealDB 存储
//! - **座位引擎** (`seating`): 桌台/预订分配工作流与状态机
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! src/
//! ├── core/          # 配置、状态、HTTP 服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! ├── seating/       # 分配工作流引擎
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod seating;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use seating::{AssignmentEngine, SeatingError};
pub use utils::{AppError, AppResult};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在加载配置之前调用
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
╔══════════════════════════════════════════════╗
║   REEF HOST · seating & reservation server   ║
╚══════════════════════════════════════════════╝
"#
    );
}
