//! Core Module
//!
//! Configuration and shared application state.

pub mod config;
pub mod state;

pub use config::Config;
pub use state::AppState;

/// 设置运行环境 (dotenv + 日志)
///
/// Call once at process start, before [`AppState::initialize`].
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    crate::utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}
