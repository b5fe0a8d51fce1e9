// ==========================================
// API集成测试辅助工具
// ==========================================
// 职责: 提供API层集成测试的通用测试环境
// ==========================================

#[path = "../test_helpers.rs"]
mod test_helpers;

use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

use ini_form_editor::api::{EditorApi, WorkspaceApi};
use ini_form_editor::config::PreferencesStore;
use ini_form_editor::repository::DiskFileStore;

// ==========================================
// API测试环境
// ==========================================

/// API测试环境
///
/// 包含所有API实例和临时工作区
pub struct ApiTestEnv {
    /// 工作区目录（内含示例 INI 文件）
    pub workspace_dir: String,
    /// 偏好文件路径
    pub prefs_path: String,

    pub editor_api: Arc<EditorApi>,
    pub workspace_api: Arc<WorkspaceApi>,
    pub preferences: Arc<PreferencesStore>,

    // 临时目录（确保生命周期）
    _temp_dir: TempDir,
}

impl ApiTestEnv {
    /// 创建新的API测试环境
    ///
    /// # 说明
    /// - 工作区为临时目录，内含 game.ini / SYSTEM.INI / readme.txt
    /// - 偏好文件写入同一临时目录下的 prefs/preferences.json
    pub fn new() -> Result<Self, String> {
        let (temp_dir, workspace_dir) = test_helpers::create_test_workspace()
            .map_err(|e| format!("创建测试工作区失败: {}", e))?;

        let prefs_path = temp_dir
            .path()
            .join("prefs")
            .join("preferences.json")
            .to_string_lossy()
            .to_string();

        let file_store = Arc::new(DiskFileStore::new());
        let editor_api = Arc::new(EditorApi::new(file_store));
        let preferences = Arc::new(PreferencesStore::new(&prefs_path));
        let workspace_api = Arc::new(WorkspaceApi::new(editor_api.clone(), preferences.clone()));

        Ok(Self {
            workspace_dir,
            prefs_path,
            editor_api,
            workspace_api,
            preferences,
            _temp_dir: temp_dir,
        })
    }

    /// 在工作区中追加一个文件，返回完整路径
    pub fn add_file(&self, file_name: &str, content: &str) -> Result<String, String> {
        test_helpers::write_ini_file(Path::new(&self.workspace_dir), file_name, content)
            .map_err(|e| format!("写入测试文件失败: {}", e))
    }

    /// 在临时目录下创建一个空的子目录，返回完整路径
    pub fn add_folder(&self, name: &str) -> Result<String, String> {
        let path = self._temp_dir.path().join(name);
        std::fs::create_dir_all(&path).map_err(|e| format!("创建测试目录失败: {}", e))?;
        Ok(path.to_string_lossy().to_string())
    }

    /// 工作区中某个文件的完整路径
    pub fn file_path(&self, file_name: &str) -> String {
        Path::new(&self.workspace_dir)
            .join(file_name)
            .to_string_lossy()
            .to_string()
    }
}
