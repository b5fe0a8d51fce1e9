// ==========================================
// INI 配置表单编辑器 - 日志初始化
// ==========================================
// 工具: tracing + tracing-subscriber（EnvFilter）
// 约束: init 进程内只能调用一次;init_test 可在多个测试中重复调用
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// 初始化应用日志
///
/// # 说明
/// 级别过滤来自 RUST_LOG 环境变量,未设置时默认 info。
/// 桌面应用内嵌库模式使用时由宿主调用,例如:
///
/// ```no_run
/// use ini_form_editor::logging;
/// logging::init();
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .init();
}

/// 初始化测试日志
///
/// 固定 debug 级别并使用测试捕获输出;
/// try_init 允许同一进程内的多个测试重复调用。
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
