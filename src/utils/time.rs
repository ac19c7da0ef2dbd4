//! 时间工具函数
//!
//! 所有业务时间戳统一使用 `i64` Unix millis，由 repository 层写入。

/// 当前时间的 Unix 毫秒时间戳
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
