use std::collections::HashMap;

use crate::api::FileEdits;
use crate::app::state::AppState;

use super::common::map_api_error;

// ==========================================
// 编辑器相关命令
// ==========================================

/// 扫描目录下的 .ini 文件
///
/// # 参数
/// - folder: 目录完整路径
///
/// # 返回
/// - 成功: ScanFolderResponse JSON
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn scan_folder(
    state: tauri::State<'_, AppState>,
    folder: String,
) -> Result<String, String> {
    let result = state
        .editor_api
        .scan_folder(&folder)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 加载单个文件为表单结构
///
/// # 参数
/// - file_path: 文件完整路径
///
/// # 返回
/// - 成功: FileForm JSON
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn load_ini_file(
    state: tauri::State<'_, AppState>,
    file_path: String,
) -> Result<String, String> {
    let result = state
        .editor_api
        .load_file(&file_path)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 保存单个文件（整行替换式保存）
///
/// # 参数
/// - file_path: 文件完整路径
/// - edited_values: 被编辑的键 -> 新值
///
/// # 返回
/// - 成功: SaveReport JSON
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn save_ini_file(
    state: tauri::State<'_, AppState>,
    file_path: String,
    edited_values: HashMap<String, String>,
) -> Result<String, String> {
    let result = state
        .editor_api
        .save_file(&file_path, &edited_values)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}

/// 批量保存多个文件（允许部分失败）
///
/// # 参数
/// - files: 文件及其编辑集列表
///
/// # 返回
/// - 成功: SaveAllResponse JSON（含失败明细）
/// - 失败: 错误消息
#[tauri::command(rename_all = "snake_case")]
pub async fn save_all_ini_files(
    state: tauri::State<'_, AppState>,
    files: Vec<FileEdits>,
) -> Result<String, String> {
    let result = state
        .editor_api
        .save_all(&files)
        .await
        .map_err(map_api_error)?;

    serde_json::to_string(&result).map_err(|e| format!("序列化失败: {}", e))
}
