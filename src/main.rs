// ==========================================
// INI 配置表单编辑器 - Tauri 主入口
// ==========================================
// 技术栈: Tauri + Rust
// 系统定位: 桌面 INI 配置文件表单化编辑工具
// ==========================================

// 禁止控制台窗口 (Windows)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use ini_form_editor::app::{get_default_prefs_path, AppState};

#[cfg(feature = "tauri-app")]
fn main() {
    use ini_form_editor::app::tauri_commands::*;

    // 初始化日志系统
    tracing_subscriber::fmt::init();

    tracing::info!("==================================================");
    tracing::info!("{}", ini_form_editor::APP_NAME);
    tracing::info!("系统版本: {}", ini_form_editor::VERSION);
    tracing::info!("==================================================");

    // 获取偏好文件路径
    let prefs_path = get_default_prefs_path();
    tracing::info!("使用偏好文件: {}", prefs_path);

    // 创建AppState
    tracing::info!("正在初始化AppState...");
    let app_state = AppState::new(prefs_path)
        .expect("无法初始化AppState");

    tracing::info!("AppState初始化成功");
    tracing::info!("启动Tauri应用...");

    // 启动Tauri应用
    tauri::Builder::default()
        .manage(app_state)
        .invoke_handler(tauri::generate_handler![
            // ==========================================
            // 编辑器相关命令 (4个)
            // ==========================================
            scan_folder,
            load_ini_file,
            save_ini_file,
            save_all_ini_files,

            // ==========================================
            // 工作区相关命令 (7个)
            // ==========================================
            open_folder,
            get_recent_folders,
            remove_recent_folder,
            get_default_folder,
            set_default_folder,
            get_app_locale,
            set_app_locale,
        ])
        .run(tauri::generate_context!())
        .expect("启动Tauri应用失败");

    tracing::info!("Tauri应用已退出");
}

#[cfg(not(feature = "tauri-app"))]
fn main() {
    println!("==================================================");
    println!("{}", ini_form_editor::APP_NAME);
    println!("系统版本: {}", ini_form_editor::VERSION);
    println!("==================================================");
    println!();
    println!("此可执行文件需要启用 tauri-app 特性");
    println!("使用: cargo run --features tauri-app");
    println!();
    println!("或者使用库模式:");
    println!("use ini_form_editor::app::AppState;");
}
