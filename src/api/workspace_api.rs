// ==========================================
// INI 配置表单编辑器 - 工作区 API
// ==========================================
// 职责: 打开目录、维护最近目录与默认目录偏好
// 架构: API 层 → EditorApi (扫描) + Config 层 (偏好持久化)
// ==========================================

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::editor_api::{EditorApi, ScannedFile};
use crate::api::error::{validate_folder_path, ApiError, ApiResult};
use crate::config::PreferencesStore;
use crate::domain::{RecentFolder, WorkspacePreferences};

// ==========================================
// DTO 类型定义
// ==========================================

/// 打开目录响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenFolderResponse {
    /// 被打开的目录
    pub folder: String,
    /// 目录下的 .ini 文件
    pub files: Vec<ScannedFile>,
    /// 文件总数
    pub total: usize,
    /// 更新后的最近目录列表（最新在前）
    pub recent_folders: Vec<RecentFolder>,
}

// ==========================================
// WorkspaceApi - 工作区 API
// ==========================================

/// 工作区API
///
/// 职责：
/// 1. 打开目录（扫描 + 记入最近目录）
/// 2. 查询最近目录与默认目录
/// 3. 移除失效的最近目录条目
/// 4. 设置/清除默认目录
pub struct WorkspaceApi {
    /// 编辑器 API（复用目录扫描逻辑）
    editor_api: Arc<EditorApi>,
    /// 工作区偏好存储
    preferences: Arc<PreferencesStore>,
}

impl WorkspaceApi {
    /// 创建新的WorkspaceApi实例
    pub fn new(editor_api: Arc<EditorApi>, preferences: Arc<PreferencesStore>) -> Self {
        Self {
            editor_api,
            preferences,
        }
    }

    /// 打开目录
    ///
    /// # 参数
    /// - folder: 目录完整路径
    ///
    /// # 返回
    /// - Ok(OpenFolderResponse): 扫描结果 + 更新后的最近目录列表
    /// - Err(ApiError): API错误
    ///
    /// # 说明
    /// 先扫描后记录：目录不存在时直接报错，不污染最近目录列表。
    pub async fn open_folder(&self, folder: &str) -> ApiResult<OpenFolderResponse> {
        validate_folder_path(folder)?;

        let scan = self.editor_api.scan_folder(folder).await?;

        let prefs = self
            .preferences
            .record_recent_folder(folder)
            .await
            .map_err(|e| ApiError::PreferencesError(e.to_string()))?;

        tracing::info!(folder = %folder, total = scan.total, "目录已打开");

        Ok(OpenFolderResponse {
            folder: scan.folder,
            files: scan.files,
            total: scan.total,
            recent_folders: prefs.recent_folders,
        })
    }

    /// 查询全部工作区偏好
    pub async fn get_preferences(&self) -> ApiResult<WorkspacePreferences> {
        Ok(self.preferences.load().await)
    }

    /// 查询最近目录列表（最新在前，最多5条）
    pub async fn get_recent_folders(&self) -> ApiResult<Vec<RecentFolder>> {
        Ok(self.preferences.load().await.recent_folders)
    }

    /// 从最近目录列表中移除一条
    ///
    /// # 参数
    /// - folder: 要移除的目录路径，不在列表中时为空操作
    ///
    /// # 返回
    /// - Ok(Vec<RecentFolder>): 移除后的最近目录列表
    /// - Err(ApiError): API错误
    pub async fn remove_recent_folder(&self, folder: &str) -> ApiResult<Vec<RecentFolder>> {
        validate_folder_path(folder)?;

        let prefs = self
            .preferences
            .remove_recent_folder(folder)
            .await
            .map_err(|e| ApiError::PreferencesError(e.to_string()))?;

        tracing::info!(folder = %folder, "最近目录条目已移除");

        Ok(prefs.recent_folders)
    }

    /// 查询默认目录
    ///
    /// # 返回
    /// - Ok(Some(path)): 已设置默认目录
    /// - Ok(None): 未设置
    pub async fn get_default_folder(&self) -> ApiResult<Option<String>> {
        Ok(self.preferences.load().await.default_folder)
    }

    /// 设置或清除默认目录
    ///
    /// # 参数
    /// - folder: Some(path) 设置默认目录，None 清除
    ///
    /// # 返回
    /// - Ok(WorkspacePreferences): 更新后的偏好
    /// - Err(ApiError): API错误
    pub async fn set_default_folder(
        &self,
        folder: Option<&str>,
    ) -> ApiResult<WorkspacePreferences> {
        if let Some(path) = folder {
            validate_folder_path(path)?;
        }

        self.preferences
            .set_default_folder(folder)
            .await
            .map_err(|e| ApiError::PreferencesError(e.to_string()))
    }
}
