// ==========================================
// INI 配置表单编辑器 - 编辑器 API
// ==========================================
// 职责: 目录扫描、文件加载为表单、整行替换式保存
// 红线: 保存时只替换被编辑的键值行，其余行逐字节保留
// 架构: API 层 → Engine 层 (解析/重写) + Repository 层 (文件存取)
// ==========================================

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::api::error::{validate_file_path, validate_folder_path, ApiError, ApiResult};
use crate::domain::FileForm;
use crate::engine::{FolderScanner, FormBuilder, LineParser, RoundTripWriter};
use crate::repository::IniFileStore;

// ==========================================
// DTO 类型定义
// ==========================================

/// 扫描到的单个配置文件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScannedFile {
    /// 文件名（含扩展名）
    pub file_name: String,
    /// 文件完整路径
    pub file_path: String,
}

/// 目录扫描响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanFolderResponse {
    /// 被扫描的目录
    pub folder: String,
    /// 目录下的 .ini 文件（扩展名大小写不敏感）
    pub files: Vec<ScannedFile>,
    /// 文件总数
    pub total: usize,
}

/// 单文件保存报告
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveReport {
    /// 文件完整路径
    pub file_path: String,
    /// 实际被替换的键值行数
    pub replaced_count: usize,
    /// 保存耗时（毫秒）
    pub elapsed_ms: i64,
}

/// 批量保存输入：单个文件及其编辑集
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileEdits {
    /// 文件完整路径
    pub file_path: String,
    /// 被编辑的键 -> 新值
    pub edited_values: HashMap<String, String>,
}

/// 批量保存中单个文件的失败明细
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveFailure {
    /// 文件完整路径
    pub file_path: String,
    /// 失败原因
    pub message: String,
}

/// 批量保存响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveAllResponse {
    /// 成功保存的文件报告
    pub reports: Vec<SaveReport>,
    /// 成功保存的文件数
    pub success_count: usize,
    /// 保存失败的文件数
    pub fail_count: usize,
    /// 处理结果说明
    pub message: String,
    /// 失败文件明细
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<SaveFailure>,
    /// 批量保存总耗时（毫秒）
    pub elapsed_ms: i64,
}

// ==========================================
// EditorApi - 编辑器 API
// ==========================================

/// 编辑器API
///
/// 职责：
/// 1. 扫描目录下的 .ini 文件
/// 2. 加载单个文件并解析为表单结构
/// 3. 保存单个文件（整行替换，非编辑行保留）
/// 4. 批量保存（逐文件处理，允许部分失败）
pub struct EditorApi {
    /// 文件存取抽象（生产环境为磁盘实现）
    file_store: Arc<dyn IniFileStore>,
    parser: LineParser,
    writer: RoundTripWriter,
    form_builder: FormBuilder,
    scanner: FolderScanner,
}

impl EditorApi {
    /// 创建新的EditorApi实例
    pub fn new(file_store: Arc<dyn IniFileStore>) -> Self {
        Self {
            file_store,
            parser: LineParser::new(),
            writer: RoundTripWriter::new(),
            form_builder: FormBuilder::new(),
            scanner: FolderScanner::new(),
        }
    }

    // ==========================================
    // 目录扫描接口
    // ==========================================

    /// 扫描目录下的 .ini 文件
    ///
    /// # 参数
    /// - folder: 目录完整路径
    ///
    /// # 返回
    /// - Ok(ScanFolderResponse): 扫描结果（不保证文件顺序）
    /// - Err(ApiError): API错误
    pub async fn scan_folder(&self, folder: &str) -> ApiResult<ScanFolderResponse> {
        validate_folder_path(folder)?;

        let entries = self.file_store.list_dir(folder).await?;
        let files: Vec<ScannedFile> = entries
            .into_iter()
            .filter(|entry| self.scanner.is_ini_file(&entry.file_name))
            .map(|entry| ScannedFile {
                file_name: entry.file_name,
                file_path: entry.file_path,
            })
            .collect();

        let total = files.len();
        tracing::info!(folder = %folder, total = total, "目录扫描完成");

        Ok(ScanFolderResponse {
            folder: folder.to_string(),
            files,
            total,
        })
    }

    // ==========================================
    // 文件加载接口
    // ==========================================

    /// 加载单个文件并解析为表单结构
    ///
    /// # 参数
    /// - file_path: 文件完整路径
    ///
    /// # 返回
    /// - Ok(FileForm): 表单结构（节标题行 + 键值字段行）
    /// - Err(ApiError): API错误
    pub async fn load_file(&self, file_path: &str) -> ApiResult<FileForm> {
        validate_file_path(file_path)?;

        let content = self.file_store.read_to_string(file_path).await?;
        let lines = self.parser.parse_lines(&content);
        let form = self.form_builder.build(file_path, &lines);

        tracing::info!(
            file_path = %file_path,
            fields = form.field_count,
            sections = form.section_count,
            "文件加载完成"
        );

        Ok(form)
    }

    // ==========================================
    // 保存接口
    // ==========================================

    /// 保存单个文件
    ///
    /// # 参数
    /// - file_path: 文件完整路径
    /// - edited_values: 被编辑的键 -> 新值
    ///
    /// # 返回
    /// - Ok(SaveReport): 保存报告
    /// - Err(ApiError): API错误
    ///
    /// # 说明
    /// 保存时从磁盘重新读取当前内容逐行替换，而非回写加载时的解析结果；
    /// 加载与保存之间外部对未编辑行的修改会被保留。
    /// edited_values 为空时文件内容不变（仅统一换行符为 LF）。
    pub async fn save_file(
        &self,
        file_path: &str,
        edited_values: &HashMap<String, String>,
    ) -> ApiResult<SaveReport> {
        let start_time = Instant::now();
        validate_file_path(file_path)?;

        let original = self.file_store.read_to_string(file_path).await?;
        let outcome = self.writer.rewrite(&original, edited_values);
        self.file_store
            .write_string(file_path, &outcome.content)
            .await?;

        let report = SaveReport {
            file_path: file_path.to_string(),
            replaced_count: outcome.replaced_count,
            elapsed_ms: start_time.elapsed().as_millis() as i64,
        };

        tracing::info!(
            file_path = %file_path,
            replaced_count = report.replaced_count,
            elapsed_ms = report.elapsed_ms,
            "文件保存完成"
        );

        Ok(report)
    }

    /// 批量保存多个文件
    ///
    /// # 参数
    /// - files: 文件及其编辑集列表
    ///
    /// # 返回
    /// - Ok(SaveAllResponse): 批量保存结果
    /// - Err(ApiError): API错误
    ///
    /// # 说明
    /// - 各文件并发保存，允许部分失败
    /// - 单个文件失败不影响其他文件，失败明细在响应中返回
    pub async fn save_all(&self, files: &[FileEdits]) -> ApiResult<SaveAllResponse> {
        use futures::future::join_all;

        let start_time = Instant::now();

        // 参数验证
        if files.is_empty() {
            return Err(ApiError::InvalidInput("文件列表不能为空".to_string()));
        }

        let save_tasks = files
            .iter()
            .map(|file| self.save_file(&file.file_path, &file.edited_values));
        let results = join_all(save_tasks).await;

        let mut reports = Vec::new();
        let mut failures = Vec::new();

        for (file, result) in files.iter().zip(results) {
            match result {
                Ok(report) => {
                    reports.push(report);
                }
                Err(e) => {
                    tracing::warn!(
                        file_path = %file.file_path,
                        error = ?e,
                        "文件保存失败"
                    );
                    failures.push(SaveFailure {
                        file_path: file.file_path.clone(),
                        message: e.to_string(),
                    });
                }
            }
        }

        let success_count = reports.len();
        let fail_count = failures.len();

        Ok(SaveAllResponse {
            reports,
            success_count,
            fail_count,
            message: format!(
                "批量保存完成：成功 {} 个，失败 {} 个",
                success_count, fail_count
            ),
            failures,
            elapsed_ms: start_time.elapsed().as_millis() as i64,
        })
    }
}
