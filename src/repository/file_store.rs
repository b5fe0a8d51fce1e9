// ==========================================
// INI 配置表单编辑器 - 文件仓储
// ==========================================
// 职责: 定义文件访问接口（不含业务逻辑）+ 磁盘实现
// 红线: 写入必须原子化（同目录临时文件 + rename）,失败时目标文件保持原内容
// ==========================================

use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::repository::error::{RepositoryError, RepositoryResult};

// ==========================================
// StoredFileEntity - 目录枚举条目
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFileEntity {
    pub file_name: String, // 文件名（不含目录）
    pub file_path: String, // 完整路径
}

// ==========================================
// IniFileStore Trait
// ==========================================
// 用途: API 层所需的文件访问接口
// 实现者: DiskFileStore（tokio::fs）;测试中可用内存 Mock 替换
#[async_trait]
pub trait IniFileStore: Send + Sync {
    /// 读取整个文件为字符串
    ///
    /// # 返回
    /// - Ok(String): 文件完整内容
    /// - Err(FileNotFound/ReadError): 文件缺失或不可读,不产生任何部分状态
    async fn read_to_string(&self, path: &str) -> RepositoryResult<String>;

    /// 写入整个文件
    ///
    /// # 说明
    /// 原子化替换: 任何失败都不会让目标文件处于截断状态
    async fn write_string(&self, path: &str, content: &str) -> RepositoryResult<()>;

    /// 枚举目录下的普通文件（顺序由操作系统决定,不保证）
    async fn list_dir(&self, dir: &str) -> RepositoryResult<Vec<StoredFileEntity>>;
}

// ==========================================
// DiskFileStore - 磁盘实现
// ==========================================
pub struct DiskFileStore {}

impl DiskFileStore {
    /// 创建新的磁盘文件仓储
    pub fn new() -> Self {
        Self {}
    }

    /// 目标文件的同目录临时文件路径（".<文件名>.tmp~"）
    ///
    /// 临时文件与目标同目录,保证 rename 不跨文件系统
    fn temp_path_for(target: &Path) -> RepositoryResult<PathBuf> {
        let file_name = target
            .file_name()
            .ok_or_else(|| RepositoryError::InvalidPath(target.display().to_string()))?;

        let mut tmp_name = OsString::from(".");
        tmp_name.push(file_name);
        tmp_name.push(".tmp~");
        Ok(target.with_file_name(tmp_name))
    }
}

#[async_trait]
impl IniFileStore for DiskFileStore {
    async fn read_to_string(&self, path: &str) -> RepositoryResult<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => RepositoryError::FileNotFound {
                    path: path.to_string(),
                },
                _ => RepositoryError::ReadError {
                    path: path.to_string(),
                    message: e.to_string(),
                },
            })
    }

    async fn write_string(&self, path: &str, content: &str) -> RepositoryResult<()> {
        let target = Path::new(path);
        let tmp_path = Self::temp_path_for(target)?;

        tokio::fs::write(&tmp_path, content)
            .await
            .map_err(|e| RepositoryError::WriteError {
                path: path.to_string(),
                message: e.to_string(),
            })?;

        if let Err(e) = tokio::fs::rename(&tmp_path, target).await {
            // rename 失败时清理临时文件,目标文件保持原内容
            let _ = tokio::fs::remove_file(&tmp_path).await;
            return Err(RepositoryError::WriteError {
                path: path.to_string(),
                message: e.to_string(),
            });
        }

        debug!(path = %path, bytes = content.len(), "文件写入完成");
        Ok(())
    }

    async fn list_dir(&self, dir: &str) -> RepositoryResult<Vec<StoredFileEntity>> {
        let mut read_dir = tokio::fs::read_dir(dir).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => RepositoryError::DirNotFound {
                path: dir.to_string(),
            },
            _ => RepositoryError::ListDirError {
                path: dir.to_string(),
                message: e.to_string(),
            },
        })?;

        let mut entries = Vec::new();
        loop {
            let entry = match read_dir.next_entry().await {
                Ok(Some(entry)) => entry,
                Ok(None) => break,
                Err(e) => {
                    return Err(RepositoryError::ListDirError {
                        path: dir.to_string(),
                        message: e.to_string(),
                    })
                }
            };

            // best-effort: 单个条目类型获取失败只跳过,不中断整个枚举
            let file_type = match entry.file_type().await {
                Ok(file_type) => file_type,
                Err(e) => {
                    warn!(path = ?entry.path(), error = %e, "无法获取文件类型,已跳过");
                    continue;
                }
            };
            if !file_type.is_file() {
                continue;
            }

            entries.push(StoredFileEntity {
                file_name: entry.file_name().to_string_lossy().to_string(),
                file_path: entry.path().to_string_lossy().to_string(),
            });
        }

        Ok(entries)
    }
}
