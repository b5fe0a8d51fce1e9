// ==========================================
// INI 配置表单编辑器 - 偏好设置存储
// ==========================================
// 职责: WorkspacePreferences 的加载与持久化
// 红线: 读取失败不致命,一律降级为默认值并告警
// 约束: "读-改-写"操作串行化,避免并发打开目录时互相覆盖
// ==========================================

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::WorkspacePreferences;
use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// PreferencesStore - 偏好设置存储
// ==========================================
pub struct PreferencesStore {
    /// 偏好文件路径（JSON 文档）
    prefs_path: PathBuf,

    /// 读-改-写互斥锁
    write_lock: Mutex<()>,
}

impl PreferencesStore {
    /// 创建新的偏好设置存储
    ///
    /// # 参数
    /// - prefs_path: 偏好文件路径,文件不存在时首次保存会创建
    pub fn new(prefs_path: impl Into<PathBuf>) -> Self {
        Self {
            prefs_path: prefs_path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// 偏好文件路径
    pub fn prefs_path(&self) -> &Path {
        &self.prefs_path
    }

    /// 加载偏好设置
    ///
    /// # 说明
    /// 文件缺失、不可读或内容损坏时一律返回默认值;
    /// 损坏的文件会在下次保存时被完整覆盖。
    pub async fn load(&self) -> WorkspacePreferences {
        let raw = match tokio::fs::read_to_string(&self.prefs_path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return WorkspacePreferences::default();
            }
            Err(e) => {
                warn!(path = ?self.prefs_path, error = %e, "偏好设置读取失败,使用默认值");
                return WorkspacePreferences::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = ?self.prefs_path, error = %e, "偏好设置解析失败,使用默认值");
                WorkspacePreferences::default()
            }
        }
    }

    /// 持久化偏好设置
    pub async fn save(&self, prefs: &WorkspacePreferences) -> RepositoryResult<()> {
        let json = serde_json::to_string_pretty(prefs)
            .map_err(|e| RepositoryError::SerializationError(e.to_string()))?;

        // 首次保存时偏好目录可能尚未创建
        if let Some(parent) = self.prefs_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| RepositoryError::WriteError {
                        path: parent.display().to_string(),
                        message: e.to_string(),
                    })?;
            }
        }

        tokio::fs::write(&self.prefs_path, json)
            .await
            .map_err(|e| RepositoryError::WriteError {
                path: self.prefs_path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(())
    }

    /// 记录一次目录打开并持久化
    ///
    /// # 返回
    /// - Ok(WorkspacePreferences): 更新后的偏好快照
    pub async fn record_recent_folder(
        &self,
        folder: &str,
    ) -> RepositoryResult<WorkspacePreferences> {
        let _guard = self.write_lock.lock().await;

        let mut prefs = self.load().await;
        prefs.record_recent_folder(folder, Utc::now());
        self.save(&prefs).await?;

        info!(folder = %folder, "已记录最近打开目录");
        Ok(prefs)
    }

    /// 从最近目录列表中移除一条并持久化
    ///
    /// # 返回
    /// - Ok(WorkspacePreferences): 更新后的偏好快照（路径不在列表中时与移除前相同）
    pub async fn remove_recent_folder(
        &self,
        folder: &str,
    ) -> RepositoryResult<WorkspacePreferences> {
        let _guard = self.write_lock.lock().await;

        let mut prefs = self.load().await;
        prefs.remove_recent_folder(folder);
        self.save(&prefs).await?;

        info!(folder = %folder, "已移除最近目录");
        Ok(prefs)
    }

    /// 设置默认目录并持久化（None 表示清除）
    pub async fn set_default_folder(
        &self,
        folder: Option<&str>,
    ) -> RepositoryResult<WorkspacePreferences> {
        let _guard = self.write_lock.lock().await;

        let mut prefs = self.load().await;
        prefs.default_folder = folder.map(|f| f.to_string());
        self.save(&prefs).await?;

        Ok(prefs)
    }
}
