use std::path::PathBuf;

use crate::projects::CompletionPolicy;

/// 应用配置 - 核心子系统的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | /var/lib/crewtrack | 工作目录 (数据库、日志) |
/// | ENVIRONMENT | development | 运行环境 |
/// | ADVANCE_ON_CREATE | false | 创建即分配时是否自动进入 current 状态 |
/// | LOG_LEVEL | info | 日志级别 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/crewtrack ADVANCE_ON_CREATE=true cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 创建项目时带分配是否立即 upcoming -> current
    ///
    /// The original system was inconsistent about this; it is a policy flag
    /// here. `false` means only edits auto-advance.
    pub advance_on_create: bool,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/crewtrack".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            advance_on_create: std::env::var("ADVANCE_ON_CREATE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, advance_on_create: bool) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.advance_on_create = advance_on_create;
        config
    }

    /// 数据库目录 (work_dir/database)
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    /// 确保工作目录结构存在
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(self.database_dir())?;
        std::fs::create_dir_all(PathBuf::from(&self.work_dir).join("logs"))?;
        Ok(())
    }

    /// 完成工作流策略
    pub fn completion_policy(&self) -> CompletionPolicy {
        CompletionPolicy {
            advance_on_create: self.advance_on_create,
        }
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
