use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{EmployeeRepository, ProjectRepository};
use crate::projects::ProjectService;
use crate::utils::AppResult;

/// 应用状态 - 持有配置和数据库的共享引用
///
/// AppState 是核心子系统的组装点。请求层持有一个克隆
/// (Surreal<Db> 内部是 Arc，浅拷贝成本极低)，通过访问器
/// 获取服务和仓库实例。
///
/// # 使用示例
///
/// ```ignore
/// let config = Config::from_env();
/// let state = AppState::initialize(&config).await?;
///
/// let service = state.project_service();
/// let project = service.complete_project("project:abc").await?;
/// ```
#[derive(Clone, Debug)]
pub struct AppState {
    /// 应用配置
    pub config: Config,
    /// 嵌入式数据库 (SurrealDB)
    pub db: Surreal<Db>,
}

impl AppState {
    /// 初始化应用状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录结构 (确保目录存在)
    /// 2. 数据库 (work_dir/database/crewtrack.db)
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        config
            .ensure_work_dir_structure()
            .map_err(|e| crate::utils::AppError::internal(format!("work dir setup failed: {e}")))?;

        let db_path = config.database_dir().join("crewtrack.db");
        let db_service = DbService::new(&db_path).await?;

        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }

    /// 初始化内存态 (测试用)
    pub async fn initialize_in_memory(config: &Config) -> AppResult<Self> {
        let db_service = DbService::in_memory().await?;
        Ok(Self {
            config: config.clone(),
            db: db_service.db,
        })
    }

    /// 获取数据库实例
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }

    /// 项目域服务 (分配同步 + 完成工作流)
    pub fn project_service(&self) -> ProjectService {
        ProjectService::new(self.db.clone(), self.config.completion_policy())
    }

    /// 员工仓库 (注册/查询粘合层)
    pub fn employee_repository(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.db.clone())
    }

    /// 项目仓库
    pub fn project_repository(&self) -> ProjectRepository {
        ProjectRepository::new(self.db.clone())
    }
}
