// ==========================================
// INI 配置表单编辑器 - 应用状态
// ==========================================
// 职责: 管理应用级别的共享状态和API实例
// ==========================================

use std::sync::Arc;

use crate::api::{EditorApi, WorkspaceApi};
use crate::config::PreferencesStore;
use crate::repository::DiskFileStore;

/// 应用状态
///
/// 包含所有API实例和共享资源
/// 在Tauri应用中作为全局状态管理
pub struct AppState {
    /// 偏好文件路径
    pub prefs_path: String,

    /// 编辑器API
    pub editor_api: Arc<EditorApi>,

    /// 工作区API
    pub workspace_api: Arc<WorkspaceApi>,
}

impl AppState {
    /// 创建新的AppState实例
    ///
    /// # 参数
    /// - prefs_path: 工作区偏好文件路径
    ///
    /// # 返回
    /// - Ok(AppState): 应用状态实例
    /// - Err(String): 初始化错误
    ///
    /// # 说明
    /// 该方法会：
    /// 1. 初始化文件存取层
    /// 2. 初始化偏好存储（确保父目录存在）
    /// 3. 创建所有API实例
    pub fn new(prefs_path: String) -> Result<Self, String> {
        tracing::info!("初始化AppState，偏好文件路径: {}", prefs_path);

        // ==========================================
        // 初始化Repository层
        // ==========================================

        let file_store = Arc::new(DiskFileStore::new());

        // ==========================================
        // 初始化Config层
        // ==========================================

        // 偏好文件父目录不存在时首次保存会失败，提前创建
        if let Some(parent) = std::path::Path::new(&prefs_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| format!("无法创建偏好目录 {}: {}", parent.display(), e))?;
            }
        }
        let preferences = Arc::new(PreferencesStore::new(&prefs_path));

        // ==========================================
        // 初始化API层
        // ==========================================

        let editor_api = Arc::new(EditorApi::new(file_store));

        let workspace_api = Arc::new(WorkspaceApi::new(editor_api.clone(), preferences));

        tracing::info!("AppState初始化完成");

        Ok(Self {
            prefs_path,
            editor_api,
            workspace_api,
        })
    }

    /// 获取偏好文件路径
    pub fn get_prefs_path(&self) -> &str {
        &self.prefs_path
    }
}

// ==========================================
// 默认偏好文件路径辅助函数
// ==========================================

/// 获取默认偏好文件路径
///
/// # 返回
/// - 开发环境: 用户数据目录/ini-form-editor-dev/preferences.json
/// - 生产环境: 用户数据目录/ini-form-editor/preferences.json
pub fn get_default_prefs_path() -> String {
    use std::path::PathBuf;

    // 允许通过环境变量显式指定偏好文件路径（便于调试/测试/CI）
    if let Ok(path) = std::env::var("INI_FORM_EDITOR_PREFS_PATH") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    // 先给一个默认回退值，后续如果能拿到 data_dir 再覆盖
    let mut path = PathBuf::from("./preferences.json");

    if let Some(data_dir) = dirs::data_dir() {
        // 开发环境使用独立目录，避免污染生产偏好
        #[cfg(debug_assertions)]
        {
            path = data_dir.join("ini-form-editor-dev");
        }

        #[cfg(not(debug_assertions))]
        {
            path = data_dir.join("ini-form-editor");
        }

        // 确保目录存在
        std::fs::create_dir_all(&path).ok();
        path = path.join("preferences.json");
    }

    path.to_string_lossy().to_string()
}
