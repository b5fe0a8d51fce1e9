// ==========================================
// INI 配置表单编辑器 - 表单模型
// ==========================================
// 职责: 定义前端渲染所需的表单 DTO（一文件一标签页,一键一行）
// 用途: 表单构建器输出,前端只读;编辑结果以 EditedValues 映射回传
// 约束: 注释/空行/未知行不产生表单行,保存时靠重读原文件保留
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// FormRow - 表单行
// ==========================================
// Section: 节标题分隔行（不可编辑）
// Field: 可编辑的键值行（含行内说明文本）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormRow {
    Section {
        title: String, // 节标题（含方括号,如 "[graphics]"）
    },
    Field {
        key: String,                 // 键（编辑结果按键回传）
        value: String,               // 当前值
        description: Option<String>, // 行内说明文本（仅展示,不可编辑）
    },
}

// ==========================================
// FileForm - 单文件表单
// ==========================================
// 一个 .ini 文件对应一个标签页
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileForm {
    pub file_path: String,      // 文件完整路径（保存时回传）
    pub file_name: String,      // 文件名（标签页标题）
    pub rows: Vec<FormRow>,     // 表单行,按文件内顺序
    pub field_count: usize,     // 可编辑字段数
    pub section_count: usize,   // 节数
}

impl FileForm {
    /// 遍历可编辑字段（跳过节标题行）
    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.rows.iter().filter_map(|row| match row {
            FormRow::Field { key, value, .. } => Some((key.as_str(), value.as_str())),
            FormRow::Section { .. } => None,
        })
    }
}
