// ==========================================
// INI 配置表单编辑器 - 国际化
// ==========================================
// 工具: rust-i18n（i18n! 宏在 lib.rs 初始化,zh-CN 兜底）
// 约束: 语言为进程级全局状态,切换即时生效
// ==========================================

/// 支持的界面语言
pub const SUPPORTED_LOCALES: &[&str] = &["zh-CN", "en"];

/// 语言代码是否受支持
pub fn is_supported(locale: &str) -> bool {
    SUPPORTED_LOCALES.contains(&locale)
}

/// 当前界面语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 切换界面语言
///
/// # 参数
/// - locale: 语言代码（见 SUPPORTED_LOCALES）,未知代码由 rust-i18n 兜底处理
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 按键取翻译文本
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 按键取翻译文本并填充 %{param} 占位符
///
/// # 参数
/// - key: 消息键（如 "file.not_found"）
/// - args: 占位符名到值的替换表
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(rust_i18n::t!(key).to_string(), |msg, (name, value)| {
            msg.replace(&format!("%{{{}}}", name), value)
        })
}
