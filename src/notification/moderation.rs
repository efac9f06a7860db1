//! 审核状态
//!
//! 文档存储里的 `moderation` 字段，只有 `accepted` 表示内容已公开可见。

use serde::{Deserialize, Serialize};
use std::fmt;

/// 审核状态（wire 格式为 kebab-case 字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModerationStatus {
    /// 草稿
    Draft,
    /// 等待审核
    AwaitingModeration,
    /// 需要修改
    ImprovementsNeeded,
    /// 已拒绝
    Rejected,
    /// 已通过（公开可见）
    Accepted,
    /// 未识别的状态，原样保留
    Other(String),
}

impl ModerationStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Draft => "draft",
            Self::AwaitingModeration => "awaiting-moderation",
            Self::ImprovementsNeeded => "improvements-needed",
            Self::Rejected => "rejected",
            Self::Accepted => "accepted",
            Self::Other(s) => s,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<String> for ModerationStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "draft" => Self::Draft,
            "awaiting-moderation" => Self::AwaitingModeration,
            "improvements-needed" => Self::ImprovementsNeeded,
            "rejected" => Self::Rejected,
            "accepted" => Self::Accepted,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ModerationStatus {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ModerationStatus> for String {
    fn from(status: ModerationStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for ModerationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
