// ==========================================
// INI 配置表单编辑器 - Tauri 命令（按域拆分）
// ==========================================
// 职责: Tauri 命令定义,连接前端与后端 API
// ==========================================

#![cfg(feature = "tauri-app")]

mod common;
mod editor;
mod workspace;

pub use editor::*;
pub use workspace::*;
