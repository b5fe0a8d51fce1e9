// ==========================================
// INI 配置表单编辑器 - 工作区偏好模型
// ==========================================
// 职责: 默认目录与最近打开目录（MRU）的数据模型
// 约束: 最近目录按最近优先排序,按路径去重,最多保留 5 条
// ==========================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 最近目录列表的最大长度
pub const MAX_RECENT_FOLDERS: usize = 5;

// ==========================================
// RecentFolder - 最近打开的目录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentFolder {
    pub path: String,                    // 目录完整路径
    pub last_opened_at: DateTime<Utc>,   // 最近打开时间
}

// ==========================================
// WorkspacePreferences - 工作区偏好设置
// ==========================================
// 持久化为 JSON 文档,读取失败时降级为默认值
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspacePreferences {
    /// 启动时默认打开的目录（未设置时为 None）
    #[serde(default)]
    pub default_folder: Option<String>,

    /// 最近打开的目录,最近优先
    #[serde(default)]
    pub recent_folders: Vec<RecentFolder>,
}

impl WorkspacePreferences {
    /// 记录一次目录打开
    ///
    /// # 参数
    /// - path: 目录路径
    /// - opened_at: 打开时间
    ///
    /// # 规则
    /// 1. 已存在的同路径条目先移除（去重）
    /// 2. 新条目插入队首（最近优先）
    /// 3. 超出上限时丢弃队尾
    pub fn record_recent_folder(&mut self, path: &str, opened_at: DateTime<Utc>) {
        self.recent_folders.retain(|entry| entry.path != path);
        self.recent_folders.insert(
            0,
            RecentFolder {
                path: path.to_string(),
                last_opened_at: opened_at,
            },
        );
        self.recent_folders.truncate(MAX_RECENT_FOLDERS);
    }

    /// 从最近目录中移除指定路径的条目
    ///
    /// 路径不在列表中时为空操作,其余条目顺序不变
    pub fn remove_recent_folder(&mut self, path: &str) {
        self.recent_folders.retain(|entry| entry.path != path);
    }

    /// 最近目录路径列表（最近优先）
    pub fn recent_paths(&self) -> Vec<&str> {
        self.recent_folders
            .iter()
            .map(|entry| entry.path.as_str())
            .collect()
    }
}
