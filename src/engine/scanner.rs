// ==========================================
// INI 配置表单编辑器 - 目录过滤器
// ==========================================
// 职责: 判定文件名是否为 .ini 文件（大小写不敏感）
// 约束: 不保证目录枚举顺序,接受操作系统返回的顺序
// ==========================================

// ==========================================
// FolderScanner - 目录过滤器
// ==========================================
// 目录枚举本身由仓储层完成,这里只做文件名过滤
pub struct FolderScanner {}

impl FolderScanner {
    /// 创建新的目录过滤器
    pub fn new() -> Self {
        Self {}
    }

    /// 文件名是否以 .ini 结尾（大小写不敏感）
    pub fn is_ini_file(&self, file_name: &str) -> bool {
        file_name.to_ascii_lowercase().ends_with(".ini")
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FolderScanner {
    fn default() -> Self {
        Self::new()
    }
}
