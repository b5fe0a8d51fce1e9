// ==========================================
// INI 配置表单编辑器 - 回写器
// ==========================================
// 职责: 对原始文件内容做逐行替换,仅替换被编辑的键
// 红线: 未编辑行逐字节保留;空编辑集时输出与输入相同（幂等）
// ==========================================
// 输入: 保存时重新读取的原始文件内容 + 键到新值的编辑映射
// 输出: 回写后的完整内容与替换行数
// ==========================================

use std::collections::HashMap;

use tracing::instrument;

use crate::domain::IniLine;
use crate::engine::line_parser::LineParser;

// ==========================================
// RewriteOutcome - 回写结果
// ==========================================
#[derive(Debug, Clone)]
pub struct RewriteOutcome {
    /// 回写后的完整文件内容（每行以 '\n' 结尾）
    pub content: String,

    /// 被替换的行数（同一个键出现在多行时逐行计数）
    pub replaced_count: usize,
}

// ==========================================
// RoundTripWriter - 回写器
// ==========================================
pub struct RoundTripWriter {
    parser: LineParser,
}

impl RoundTripWriter {
    /// 创建新的回写器
    pub fn new() -> Self {
        Self {
            parser: LineParser::new(),
        }
    }

    /// 对完整文件内容执行逐行替换
    ///
    /// # 参数
    /// - original: 原始文件内容（保存时从磁盘重新读取,而非内存中的解析结果）
    /// - edited_values: 键到新值的编辑映射,未出现的键对应行保持原样
    ///
    /// # 返回
    /// - RewriteOutcome: 回写内容与替换计数
    ///
    /// # 说明
    /// 每行输出均以 '\n' 结尾: CRLF 输入被归一化为 LF,且输出保证以换行结尾。
    /// 键在多行重复出现时,每一行都会被替换（按行最后写入生效）。
    #[instrument(skip(self, original, edited_values), fields(edited_keys = edited_values.len()))]
    pub fn rewrite(&self, original: &str, edited_values: &HashMap<String, String>) -> RewriteOutcome {
        let mut content = String::with_capacity(original.len() + 16);
        let mut replaced_count = 0;

        for raw in original.lines() {
            match self.substitute_line(raw, edited_values) {
                Some(line) => {
                    content.push_str(&line);
                    replaced_count += 1;
                }
                None => content.push_str(raw),
            }
            content.push('\n');
        }

        RewriteOutcome {
            content,
            replaced_count,
        }
    }

    /// 对单行执行替换
    ///
    /// # 返回
    /// - Some(新行): 该行是键值行且键在编辑映射中
    /// - None: 其余情况,调用方应原样输出该行
    ///
    /// # 说明
    /// 被替换的行重排为 `key=新值`,存在行内说明时在其后追加
    /// 一个空格加原分隔符加说明文本（`level=7 ;max level is 10`,
    /// `name=Alice //nickname`）。说明文本为空时仅剩悬挂分隔符
    /// （`x=2 ;`）。'=' 两侧原有的空白不保留。
    pub fn substitute_line(
        &self,
        raw: &str,
        edited_values: &HashMap<String, String>,
    ) -> Option<String> {
        let entry = match self.parser.parse_line(raw) {
            IniLine::Entry(entry) => entry,
            _ => return None,
        };

        let new_value = edited_values.get(&entry.key)?;

        let mut line = format!("{}={}", entry.key, new_value);
        if let Some(description) = &entry.description {
            line.push(' ');
            line.push_str(description.delimiter.as_str());
            line.push_str(&description.text);
        }
        Some(line)
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RoundTripWriter {
    fn default() -> Self {
        Self::new()
    }
}
