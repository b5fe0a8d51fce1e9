// ==========================================
// INI 配置表单编辑器 - 表单构建器
// ==========================================
// 职责: 将解析后的行序列物化为前端可渲染的表单
// 约束: 注释/空行/未知行不产生表单行,仅节标题与键值行可见
// ==========================================

use std::path::Path;

use crate::domain::{FileForm, FormRow, IniLine};

// ==========================================
// FormBuilder - 表单构建器
// ==========================================
pub struct FormBuilder {}

impl FormBuilder {
    /// 创建新的表单构建器
    pub fn new() -> Self {
        Self {}
    }

    /// 构建单文件表单
    ///
    /// # 参数
    /// - file_path: 文件完整路径（标签页标题取其文件名部分）
    /// - lines: 解析后的行序列
    ///
    /// # 返回
    /// - FileForm: 表单 DTO,行序与文件内顺序一致
    pub fn build(&self, file_path: &str, lines: &[IniLine]) -> FileForm {
        let file_name = Path::new(file_path)
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| file_path.to_string());

        let mut rows = Vec::new();
        let mut field_count = 0;
        let mut section_count = 0;

        for line in lines {
            match line {
                IniLine::SectionHeader(title) => {
                    section_count += 1;
                    rows.push(FormRow::Section {
                        title: title.clone(),
                    });
                }
                IniLine::Entry(entry) => {
                    field_count += 1;
                    rows.push(FormRow::Field {
                        key: entry.key.clone(),
                        value: entry.value.clone(),
                        description: entry.description_text().map(|text| text.to_string()),
                    });
                }
                // 注释/空行/未知行只存在于文件中,保存时靠重读原文件保留
                IniLine::Comment(_) | IniLine::Blank | IniLine::Opaque(_) => {}
            }
        }

        FileForm {
            file_path: file_path.to_string(),
            file_name,
            rows,
            field_count,
            section_count,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}
