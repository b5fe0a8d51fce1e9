// ==========================================
// INI 配置表单编辑器 - 引擎层
// ==========================================
// 职责: 实现行解析、回写替换、目录过滤、表单构建规则
// 红线: Engine 不做文件 I/O,纯函数可单测
// ==========================================

pub mod form_builder;
pub mod line_parser;
pub mod scanner;
pub mod writer;

// 重导出核心引擎
pub use form_builder::FormBuilder;
pub use line_parser::LineParser;
pub use scanner::FolderScanner;
pub use writer::{RewriteOutcome, RoundTripWriter};
