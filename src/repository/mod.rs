// ==========================================
// INI 配置表单编辑器 - 数据仓储层
// ==========================================
// 职责: 提供文件与目录访问接口,屏蔽 tokio::fs 细节
// 红线: Repository 不含解析/回写逻辑
// 约束: 文件句柄作用域化获取,所有退出路径保证释放
// ==========================================

pub mod error;
pub mod file_store;

// 重导出核心仓储
pub use error::{RepositoryError, RepositoryResult};
pub use file_store::{DiskFileStore, IniFileStore, StoredFileEntity};
