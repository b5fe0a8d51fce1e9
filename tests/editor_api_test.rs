// ==========================================
// EditorApi 集成测试
// ==========================================
// 测试范围:
// 1. 目录扫描: scan_folder
// 2. 文件加载: load_file
// 3. 保存: save_file, save_all
// 4. 参数验证与错误路径
// ==========================================

mod helpers;

use std::collections::HashMap;

use helpers::api_test_helper::ApiTestEnv;
use ini_form_editor::api::{ApiError, FileEdits};
use ini_form_editor::domain::FormRow;

fn edits(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ==========================================
// 目录扫描测试
// ==========================================

#[tokio::test]
async fn test_scan_folder_扩展名大小写不敏感() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let result = env
        .editor_api
        .scan_folder(&env.workspace_dir)
        .await
        .expect("扫描失败");

    // 工作区内含 game.ini / SYSTEM.INI / readme.txt
    assert_eq!(result.total, 2, "应只扫描到两个 .ini 文件");
    let mut names: Vec<_> = result.files.iter().map(|f| f.file_name.as_str()).collect();
    names.sort();
    assert_eq!(names, vec!["SYSTEM.INI", "game.ini"]);
}

#[tokio::test]
async fn test_scan_folder_目录不存在() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let missing = format!("{}/no_such_dir", env.workspace_dir);
    let result = env.editor_api.scan_folder(&missing).await;

    assert!(result.is_err(), "不存在的目录应该返回错误");
    match result {
        Err(ApiError::NotFound(msg)) => {
            assert!(msg.contains("目录不存在"), "错误消息应说明目录不存在");
        }
        _ => panic!("Expected NotFound"),
    }
}

#[tokio::test]
async fn test_scan_folder_空目录() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let empty = env.add_folder("empty").expect("创建目录失败");
    let result = env.editor_api.scan_folder(&empty).await.expect("扫描失败");

    assert_eq!(result.total, 0, "空目录应返回空文件列表");
    assert!(result.files.is_empty());
}

// ==========================================
// 文件加载测试
// ==========================================

#[tokio::test]
async fn test_load_file_表单结构() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = env
        .editor_api
        .load_file(&env.file_path("game.ini"))
        .await
        .expect("加载失败");

    assert_eq!(form.file_name, "game.ini");
    assert_eq!(form.section_count, 2, "[General] 和 [Display] 两个节");
    assert_eq!(form.field_count, 6, "六个可编辑字段");

    // 首个表单行应是 [General] 节标题
    match &form.rows[0] {
        FormRow::Section { title } => assert_eq!(title, "[General]"),
        other => panic!("首行应为节标题, got {:?}", other),
    }

    // level 行: 值与行内说明分离
    let level_row = form
        .rows
        .iter()
        .find(|row| matches!(row, FormRow::Field { key, .. } if key == "level"))
        .expect("应存在 level 字段");
    match level_row {
        FormRow::Field {
            value, description, ..
        } => {
            assert_eq!(value, "5");
            assert_eq!(description.as_deref(), Some("max level is 10"));
        }
        _ => unreachable!(),
    }

    // name 行: // 分隔的说明
    let name_row = form
        .rows
        .iter()
        .find(|row| matches!(row, FormRow::Field { key, .. } if key == "name"))
        .expect("应存在 name 字段");
    match name_row {
        FormRow::Field {
            value, description, ..
        } => {
            assert_eq!(value, "Bob");
            assert_eq!(description.as_deref(), Some("nickname"));
        }
        _ => unreachable!(),
    }
}

#[tokio::test]
async fn test_load_file_注释与透传行不产生表单行() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let form = env
        .editor_api
        .load_file(&env.file_path("game.ini"))
        .await
        .expect("加载失败");

    // 表单行总数 = 节 + 字段（注释/空行/无等号行均不出现）
    assert_eq!(form.rows.len(), form.section_count + form.field_count);
}

#[tokio::test]
async fn test_load_file_文件不存在() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let result = env
        .editor_api
        .load_file(&env.file_path("missing.ini"))
        .await;

    assert!(matches!(result, Err(ApiError::NotFound(_))));
}

// ==========================================
// 保存测试
// ==========================================

#[tokio::test]
async fn test_save_file_后重新加载() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let path = env.file_path("game.ini");

    let report = env
        .editor_api
        .save_file(&path, &edits(&[("level", "8"), ("width", "2560")]))
        .await
        .expect("保存失败");

    assert_eq!(report.replaced_count, 2);
    assert_eq!(report.file_path, path);

    // 重新加载验证
    let form = env.editor_api.load_file(&path).await.expect("加载失败");
    let fields: HashMap<_, _> = form.fields().collect();
    assert_eq!(fields["level"], "8");
    assert_eq!(fields["width"], "2560");
    assert_eq!(fields["name"], "Bob", "未编辑字段应保持原值");
}

#[tokio::test]
async fn test_save_file_未知键不产生替换() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");
    let path = env.file_path("SYSTEM.INI");

    let report = env
        .editor_api
        .save_file(&path, &edits(&[("no_such_key", "1")]))
        .await
        .expect("保存失败");

    assert_eq!(report.replaced_count, 0, "文件中不存在的键不应产生替换");
}

#[tokio::test]
async fn test_save_all_部分失败() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let files = vec![
        FileEdits {
            file_path: env.file_path("game.ini"),
            edited_values: edits(&[("level", "9")]),
        },
        FileEdits {
            file_path: env.file_path("missing.ini"),
            edited_values: edits(&[("x", "1")]),
        },
    ];

    let result = env.editor_api.save_all(&files).await.expect("批量保存失败");

    assert_eq!(result.success_count, 1);
    assert_eq!(result.fail_count, 1);
    assert_eq!(result.reports.len(), 1);
    assert_eq!(result.failures.len(), 1);
    assert!(result.failures[0].file_path.ends_with("missing.ini"));
    assert!(result.message.contains("成功 1"), "结果说明应包含成功数");

    // 成功的文件确实已写盘
    let form = env
        .editor_api
        .load_file(&env.file_path("game.ini"))
        .await
        .expect("加载失败");
    let fields: HashMap<_, _> = form.fields().collect();
    assert_eq!(fields["level"], "9");
}

// ==========================================
// 参数验证测试
// ==========================================

#[tokio::test]
async fn test_空路径参数() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    assert!(matches!(
        env.editor_api.scan_folder("").await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        env.editor_api.load_file("   ").await,
        Err(ApiError::InvalidInput(_))
    ));
    assert!(matches!(
        env.editor_api.save_file("", &HashMap::new()).await,
        Err(ApiError::InvalidInput(_))
    ));
}

#[tokio::test]
async fn test_save_all_空列表() {
    let env = ApiTestEnv::new().expect("无法创建测试环境");

    let result = env.editor_api.save_all(&[]).await;
    assert!(matches!(result, Err(ApiError::InvalidInput(_))));
}
