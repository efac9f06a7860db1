//! 触发器适配
//!
//! 把文档存储推送的变更 envelope（JSON）转换为 `(DocumentKind, TransitionEvent)`。
//!
//! ```json
//! {"collection": "v3_mappins/abc123", "trigger": "update", "before": {...}, "after": {...}}
//! {"collection": "questions_rev20230926", "trigger": "create", "snapshot": {...}}
//! ```

use crate::notification::{ContentSnapshot, DocumentKind, TransitionEvent};
use serde::{Deserialize, Serialize};
use std::io::Read;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TriggerError {
    #[error("unknown collection: {0}")]
    UnknownCollection(String),

    #[error("create event for {0} has no snapshot")]
    MissingSnapshot(String),

    #[error("malformed trigger envelope: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("failed to read trigger envelope: {0}")]
    Io(#[from] std::io::Error),
}

/// 触发类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerKind {
    Update,
    Create,
}

/// 变更 envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerEnvelope {
    /// collection 名称或文档路径
    pub collection: String,
    pub trigger: TriggerKind,
    #[serde(default)]
    pub before: Option<ContentSnapshot>,
    #[serde(default)]
    pub after: Option<ContentSnapshot>,
    /// create 事件的快照；缺失时退回使用 `after`
    #[serde(default)]
    pub snapshot: Option<ContentSnapshot>,
}

impl TriggerEnvelope {
    pub fn from_json(json: &str) -> Result<Self, TriggerError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader(mut reader: impl Read) -> Result<Self, TriggerError> {
        let mut buf = String::new();
        reader.read_to_string(&mut buf)?;
        Self::from_json(&buf)
    }

    /// 解析为文档类型和事件
    pub fn into_event(self) -> Result<(DocumentKind, TransitionEvent), TriggerError> {
        let kind = DocumentKind::from_collection(&self.collection)
            .ok_or_else(|| TriggerError::UnknownCollection(self.collection.clone()))?;

        let event = match self.trigger {
            TriggerKind::Update => TransitionEvent::updated(self.before, self.after),
            TriggerKind::Create => {
                let snapshot = self
                    .snapshot
                    .or(self.after)
                    .ok_or(TriggerError::MissingSnapshot(self.collection))?;
                TransitionEvent::created(snapshot)
            }
        };

        Ok((kind, event))
    }
}
