use crate::app::state::AppState;
use crate::i18n;

use super::common::map_api_error;

// ==========================================
// 工作区相关命令
// ==========================================

/// 打开目录（扫描 + 记入最近目录）
///
/// # 参数
/// - folder: 目录完整路径
///
/// # 返回
/// - 成功: OpenFolderResponse JSON
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn open_folder(
    state: tauri::State<'_, AppState>,
    folder: String,
) -> Result<String, String> {
    let result = state
        .workspace_api
        .open_folder(&folder)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询最近目录列表
#[tauri::command(rename_all = "snake_case")]
pub async fn get_recent_folders(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .workspace_api
        .get_recent_folders()
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 从最近目录列表中移除一条
///
/// # 参数
/// - folder: 要移除的目录路径
///
/// # 返回
/// - 成功: 移除后的最近目录列表 JSON
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn remove_recent_folder(
    state: tauri::State<'_, AppState>,
    folder: String,
) -> Result<String, String> {
    let result = state
        .workspace_api
        .remove_recent_folder(&folder)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询默认目录
#[tauri::command(rename_all = "snake_case")]
pub async fn get_default_folder(state: tauri::State<'_, AppState>) -> Result<String, String> {
    let result = state
        .workspace_api
        .get_default_folder()
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 设置或清除默认目录
///
/// # 参数
/// - folder: 目录路径，传 null 清除默认目录
#[tauri::command(rename_all = "snake_case")]
pub async fn set_default_folder(
    state: tauri::State<'_, AppState>,
    folder: Option<String>,
) -> Result<String, String> {
    let result = state
        .workspace_api
        .set_default_folder(folder.as_deref())
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 查询当前界面语言
#[tauri::command(rename_all = "snake_case")]
pub async fn get_app_locale() -> Result<String, String> {
    serde_json::to_string(&serde_json::json!({ "locale": i18n::current_locale() }))
        .map_err(|e| format!("序列化失败: {}", e))
}

/// 切换界面语言
///
/// # 参数
/// - locale: 语言代码（见 i18n::SUPPORTED_LOCALES）
#[tauri::command(rename_all = "snake_case")]
pub async fn set_app_locale(locale: String) -> Result<String, String> {
    if !i18n::is_supported(&locale) {
        return Err(i18n::t_with_args("locale.invalid", &[("locale", &locale)]));
    }

    i18n::set_locale(&locale);
    tracing::info!(locale = %locale, "界面语言已切换");

    serde_json::to_string(&serde_json::json!({ "locale": locale }))
        .map_err(|e| format!("序列化失败: {}", e))
}
