// ==========================================
// INI 配置表单编辑器 - 领域模型层
// ==========================================
// 职责: 定义行模型、表单模型、工作区偏好类型
// 红线: 不含文件访问逻辑,不含解析/回写逻辑
// ==========================================

pub mod form;
pub mod line;
pub mod workspace;

// 重导出核心类型
pub use form::{FileForm, FormRow};
pub use line::{DescriptionDelimiter, IniEntry, IniLine, InlineDescription};
pub use workspace::{RecentFolder, WorkspacePreferences, MAX_RECENT_FOLDERS};
