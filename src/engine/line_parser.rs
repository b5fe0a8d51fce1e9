// ==========================================
// INI 配置表单编辑器 - 行解析器
// ==========================================
// 职责: 将单行文本分类为 Comment/Blank/SectionHeader/Entry/Opaque
// 红线: 解析是全函数,任何输入行都不被拒绝（宽容解析）
// ==========================================
// 规则:
// 1. 首个非空白字符为 ';' → Comment（余下部分去空白）
// 2. 空行或纯空白行 → Blank
// 3. 以 '[' 开头 → SectionHeader（整行去空白,保留方括号）
// 4. 其余按首个 '=' 切分; 无 '=' → Opaque（回写时逐字保留）
// 5. 右侧先查 ';' 再查 '//' 切出行内说明,两者同时出现时分号优先
// ==========================================

use crate::domain::{DescriptionDelimiter, IniEntry, IniLine, InlineDescription};

// ==========================================
// LineParser - 行解析器
// ==========================================
pub struct LineParser {}

impl LineParser {
    /// 创建新的行解析器
    pub fn new() -> Self {
        Self {}
    }

    /// 解析整个文件内容
    ///
    /// 按 `str::lines` 切行（CRLF 输入中的 '\r' 在此被剥离）
    pub fn parse_lines(&self, content: &str) -> Vec<IniLine> {
        content.lines().map(|line| self.parse_line(line)).collect()
    }

    /// 解析单行
    ///
    /// # 参数
    /// - raw: 原始行文本（不含换行符）
    ///
    /// # 返回
    /// - IniLine: 行分类结果,任何输入都有结果
    pub fn parse_line(&self, raw: &str) -> IniLine {
        let trimmed = raw.trim();

        // 注释行: 首个非空白字符为 ';'
        if let Some(rest) = trimmed.strip_prefix(';') {
            return IniLine::Comment(rest.trim().to_string());
        }

        // 空行
        if trimmed.is_empty() {
            return IniLine::Blank;
        }

        // 节标题: 保留方括号,整行去空白
        if trimmed.starts_with('[') {
            return IniLine::SectionHeader(trimmed.to_string());
        }

        // 键值行: 按首个 '=' 切分原始行（键允许为空,不校验）
        match raw.split_once('=') {
            Some((left, right)) => {
                let key = left.trim().to_string();
                let (value, description) = split_value_and_description(right.trim());
                IniLine::Entry(IniEntry {
                    key,
                    value,
                    description,
                })
            }
            // 无 '=' 的未知行: 原样保留
            None => IniLine::Opaque(raw.to_string()),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for LineParser {
    fn default() -> Self {
        Self::new()
    }
}

/// 将 '=' 右侧文本切分为值与行内说明
///
/// 分隔符查找顺序: 先 ';' 后 "//"; 两者同时出现时按 ';' 切分,
/// 即使 "//" 出现在更靠前的位置。分隔符存在即产生说明,其后
/// 为空白时说明文本为空字符串（回写时悬挂分隔符得以保留）。
fn split_value_and_description(value_part: &str) -> (String, Option<InlineDescription>) {
    if let Some(idx) = value_part.find(';') {
        let value = value_part[..idx].trim().to_string();
        let text = value_part[idx + 1..].trim();
        return (
            value,
            Some(InlineDescription::new(DescriptionDelimiter::Semicolon, text)),
        );
    }

    if let Some(idx) = value_part.find("//") {
        let value = value_part[..idx].trim().to_string();
        let text = value_part[idx + 2..].trim();
        return (
            value,
            Some(InlineDescription::new(
                DescriptionDelimiter::DoubleSlash,
                text,
            )),
        );
    }

    (value_part.to_string(), None)
}
