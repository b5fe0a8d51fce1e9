// ==========================================
// INI 配置表单编辑器 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 约束: 错误信息必须携带涉及的路径,便于前端直接展示
// ==========================================

use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== 文件访问错误 =====
    #[error("文件不存在: {path}")]
    FileNotFound { path: String },

    #[error("文件读取失败: {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("文件写入失败: {path}: {message}")]
    WriteError { path: String, message: String },

    // ===== 目录访问错误 =====
    #[error("目录不存在: {path}")]
    DirNotFound { path: String },

    #[error("目录读取失败: {path}: {message}")]
    ListDirError { path: String, message: String },

    // ===== 路径错误 =====
    #[error("无效路径: {0}")]
    InvalidPath(String),

    // ===== 序列化错误 =====
    #[error("序列化失败: {0}")]
    SerializationError(String),

    // ===== 通用错误 =====
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type RepositoryResult<T> = Result<T, RepositoryError>;
