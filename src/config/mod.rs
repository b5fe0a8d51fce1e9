// ==========================================
// INI 配置表单编辑器 - 配置层
// ==========================================
// 职责: 工作区偏好设置的持久化（默认目录/最近目录）
// 存储: 平台配置目录下的 JSON 文档
// ==========================================

pub mod preferences;

// 重导出核心配置存储
pub use preferences::PreferencesStore;
