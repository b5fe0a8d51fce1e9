// ==========================================
// INI 配置表单编辑器 - 核心库
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 桌面端 INI 配置文件批量编辑工具
// 核心约束: 保存时未编辑行逐字节保留（round-trip）
// ==========================================

// 初始化国际化系统
rust_i18n::i18n!("locales", fallback = "zh-CN");

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 行模型与表单模型
pub mod domain;

// 数据仓储层 - 文件访问
pub mod repository;

// 引擎层 - 解析与回写规则
pub mod engine;

// 配置层 - 工作区偏好设置
pub mod config;

// 日志系统
pub mod logging;

// 国际化
pub mod i18n;

// API 层 - 业务接口
pub mod api;

// 应用层 - Tauri 集成
pub mod app;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{
    DescriptionDelimiter, FileForm, FormRow, IniEntry, IniLine, InlineDescription, RecentFolder,
    WorkspacePreferences, MAX_RECENT_FOLDERS,
};

// 引擎
pub use engine::{FolderScanner, FormBuilder, LineParser, RoundTripWriter};

// 仓储
pub use repository::{DiskFileStore, IniFileStore, RepositoryError, RepositoryResult};

// 配置
pub use config::PreferencesStore;

// API
pub use api::{ApiError, ApiResult, EditorApi, WorkspaceApi};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "INI 配置表单编辑器";

// ==========================================
// 预编译检查
// ==========================================
