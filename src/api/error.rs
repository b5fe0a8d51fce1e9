// ==========================================
// INI 配置表单编辑器 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型，转换Repository错误为用户友好的错误消息
// 约束: 所有错误信息必须包含显式原因，可直接展示给前端用户
// ==========================================

use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入校验错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 文件操作错误
    // ==========================================
    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("文件保存失败: {0}")]
    FileWriteError(String),

    #[error("目录访问失败: {0}")]
    FolderError(String),

    // ==========================================
    // 偏好设置错误
    // ==========================================
    #[error("偏好设置操作失败: {0}")]
    PreferencesError(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error("内部错误: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ==========================================
// 从 RepositoryError 转换
// 目的: 将Repository层的技术错误转换为用户友好的业务错误
// ==========================================
impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            // 文件与目录错误
            RepositoryError::FileNotFound { path } => {
                ApiError::NotFound(format!("文件不存在: {}", path))
            }
            RepositoryError::DirNotFound { path } => {
                ApiError::NotFound(format!("目录不存在: {}", path))
            }
            RepositoryError::ReadError { path, message } => {
                ApiError::FileReadError(format!("{}: {}", path, message))
            }
            RepositoryError::WriteError { path, message } => {
                ApiError::FileWriteError(format!("{}: {}", path, message))
            }
            RepositoryError::ListDirError { path, message } => {
                ApiError::FolderError(format!("{}: {}", path, message))
            }
            RepositoryError::InvalidPath(path) => {
                ApiError::InvalidInput(format!("无效路径: {}", path))
            }

            // 通用错误
            RepositoryError::SerializationError(msg) => {
                ApiError::InternalError(format!("序列化失败: {}", msg))
            }
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

// ==========================================
// 输入校验辅助函数
// ==========================================

/// 校验文件路径非空
///
/// 返回:
/// - Ok(()) 如果路径非空
/// - Err(ApiError::InvalidInput) 如果路径为空或全空白
pub fn validate_file_path(file_path: &str) -> ApiResult<()> {
    if file_path.trim().is_empty() {
        return Err(ApiError::InvalidInput("文件路径不能为空".to_string()));
    }
    Ok(())
}

/// 校验目录路径非空
pub fn validate_folder_path(folder: &str) -> ApiResult<()> {
    if folder.trim().is_empty() {
        return Err(ApiError::InvalidInput("目录路径不能为空".to_string()));
    }
    Ok(())
}
