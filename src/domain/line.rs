// ==========================================
// INI 配置表单编辑器 - 行模型
// ==========================================
// 职责: 定义 INI 文件的行级领域模型
// 红线: 行序列与原始文件一一对应,仅 Entry 的值允许替换
// 用途: 解析器输出,回写器与表单构建器输入
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// DescriptionDelimiter - 行内说明分隔符
// ==========================================
// 约束: 分号优先于双斜杠;编辑后必须按原分隔符回写
// 序列化格式: SCREAMING_SNAKE_CASE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DescriptionDelimiter {
    Semicolon,   // ;
    DoubleSlash, // //
}

impl DescriptionDelimiter {
    /// 分隔符的原始字面量
    pub fn as_str(&self) -> &'static str {
        match self {
            DescriptionDelimiter::Semicolon => ";",
            DescriptionDelimiter::DoubleSlash => "//",
        }
    }
}

impl fmt::Display for DescriptionDelimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ==========================================
// InlineDescription - 行内说明
// ==========================================
// 用途: key=value 右侧的尾部注释,编辑后保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineDescription {
    pub delimiter: DescriptionDelimiter, // 引入说明的分隔符（; 或 //）
    pub text: String,                    // 说明文本（已去除首尾空白）
}

impl InlineDescription {
    pub fn new(delimiter: DescriptionDelimiter, text: impl Into<String>) -> Self {
        Self {
            delimiter,
            text: text.into(),
        }
    }
}

// ==========================================
// IniEntry - 键值行
// ==========================================
// 约束: key 允许为空字符串,不做任何校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IniEntry {
    pub key: String,                            // 键（首尾空白已去除）
    pub value: String,                          // 值（首尾空白已去除）
    pub description: Option<InlineDescription>, // 行内说明（可选）
}

impl IniEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: InlineDescription) -> Self {
        self.description = Some(description);
        self
    }

    /// 行内说明文本（无说明时为 None）
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_ref().map(|d| d.text.as_str())
    }
}

// ==========================================
// IniLine - 行分类
// ==========================================
// 解析器对每一行的分类结果,五选一:
// - Comment: 首个非空白字符为 ';' 的行
// - Blank: 空行或纯空白行
// - SectionHeader: 以 '[' 开头的行（保留方括号,整行去空白）
// - Entry: 含 '=' 的键值行
// - Opaque: 无 '=' 的未知行,回写时逐字保留
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IniLine {
    Comment(String),
    Blank,
    SectionHeader(String),
    Entry(IniEntry),
    Opaque(String),
}

impl IniLine {
    /// 是否为可编辑的键值行
    pub fn is_entry(&self) -> bool {
        matches!(self, IniLine::Entry(_))
    }

    /// 取键值行（非键值行返回 None）
    pub fn as_entry(&self) -> Option<&IniEntry> {
        match self {
            IniLine::Entry(entry) => Some(entry),
            _ => None,
        }
    }
}
