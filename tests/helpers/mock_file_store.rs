// ==========================================
// 内存文件存取 Mock
// ==========================================
// 职责: 提供可注入故障的内存文件存取实现，用于批量保存的部分失败测试
// ==========================================

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use ini_form_editor::repository::error::{RepositoryError, RepositoryResult};
use ini_form_editor::repository::file_store::StoredFileEntity;
use ini_form_editor::repository::IniFileStore;

/// 内存文件存取（可注入写入故障）
pub struct MockFileStore {
    files: Mutex<HashMap<String, String>>,
    failing_writes: Mutex<HashSet<String>>,
}

impl MockFileStore {
    pub fn new() -> Self {
        Self {
            files: Mutex::new(HashMap::new()),
            failing_writes: Mutex::new(HashSet::new()),
        }
    }

    /// 预置一个文件
    pub fn insert_file(&self, path: &str, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_string(), content.to_string());
    }

    /// 查询文件当前内容
    pub fn content_of(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// 对指定路径的写入注入故障
    pub fn fail_writes_for(&self, path: &str) {
        self.failing_writes.lock().unwrap().insert(path.to_string());
    }
}

impl Default for MockFileStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl IniFileStore for MockFileStore {
    async fn read_to_string(&self, file_path: &str) -> RepositoryResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(file_path)
            .cloned()
            .ok_or_else(|| RepositoryError::FileNotFound {
                path: file_path.to_string(),
            })
    }

    async fn write_string(&self, file_path: &str, content: &str) -> RepositoryResult<()> {
        if self.failing_writes.lock().unwrap().contains(file_path) {
            return Err(RepositoryError::WriteError {
                path: file_path.to_string(),
                message: "注入的写入故障".to_string(),
            });
        }

        self.files
            .lock()
            .unwrap()
            .insert(file_path.to_string(), content.to_string());
        Ok(())
    }

    async fn list_dir(&self, dir_path: &str) -> RepositoryResult<Vec<StoredFileEntity>> {
        let prefix = format!("{}/", dir_path.trim_end_matches('/'));
        let files = self.files.lock().unwrap();
        Ok(files
            .keys()
            .filter(|path| path.starts_with(&prefix))
            .map(|path| StoredFileEntity {
                file_name: path.rsplit('/').next().unwrap_or(path).to_string(),
                file_path: path.clone(),
            })
            .collect())
    }
}
