// ==========================================
// INI 配置表单编辑器 - API 层
// ==========================================
// 职责: 提供业务 API 接口,供 Tauri 命令调用
// ==========================================

pub mod error;
pub mod editor_api;
pub mod workspace_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use editor_api::{
    EditorApi, FileEdits, SaveAllResponse, SaveFailure, SaveReport, ScanFolderResponse,
    ScannedFile,
};
pub use workspace_api::{OpenFolderResponse, WorkspaceApi};
