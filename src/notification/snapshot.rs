//! 文档快照与变更事件
//!
//! 快照只关心 `moderation` 字段，其余字段原样保存在 JSON map 中，
//! 渲染消息时按需读取。

use super::moderation::ModerationStatus;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 文档类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// 地图标记
    Pin,
    /// How-to 教程
    HowTo,
    /// 问题
    Question,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [Self::Pin, Self::HowTo, Self::Question];

    /// 文档存储中的 collection 名称
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Pin => "v3_mappins",
            Self::HowTo => "v3_howtos",
            Self::Question => "questions_rev20230926",
        }
    }

    /// 从 collection 名称或文档路径（`v3_mappins/abc123`）解析
    pub fn from_collection(path: &str) -> Option<Self> {
        let collection = path.trim_start_matches('/').split('/').next()?;
        Self::ALL.into_iter().find(|k| k.collection() == collection)
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pin => "pin",
            Self::HowTo => "how-to",
            Self::Question => "question",
        };
        f.write_str(name)
    }
}

/// 某一时刻的文档快照（只读）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    /// 审核状态，字段缺失、为 null 或不是字符串时为 None
    #[serde(
        default,
        deserialize_with = "lenient_moderation",
        skip_serializing_if = "Option::is_none"
    )]
    pub moderation: Option<ModerationStatus>,
    /// 其余文档字段
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ContentSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_moderation(mut self, status: impl Into<ModerationStatus>) -> Self {
        self.moderation = Some(status.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn is_accepted(&self) -> bool {
        self.moderation.as_ref().is_some_and(ModerationStatus::is_accepted)
    }

    /// 读取字段的文本形式：缺失或 null 返回空串，非字符串返回其 JSON 文本
    pub fn text(&self, key: &str) -> String {
        match self.fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn id(&self) -> String {
        self.text("_id")
    }

    /// pin 的类型（`type` 字段）
    pub fn content_type(&self) -> String {
        self.text("type")
    }

    pub fn title(&self) -> String {
        self.text("title")
    }

    /// 作者（`_createdBy` 字段）
    pub fn author(&self) -> String {
        self.text("_createdBy")
    }

    pub fn slug(&self) -> String {
        self.text("slug")
    }
}

/// 非字符串的 moderation（数字、对象等）视为未审核，不让整个快照解析失败
fn lenient_moderation<'de, D>(deserializer: D) -> Result<Option<ModerationStatus>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(ModerationStatus::from(s)),
        _ => None,
    })
}

/// 变更事件
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent {
    /// 更新：before/after 任一可能缺失
    Updated {
        before: Option<ContentSnapshot>,
        after: Option<ContentSnapshot>,
    },
    /// 创建：没有 before
    Created { snapshot: ContentSnapshot },
}

impl TransitionEvent {
    pub fn updated(before: Option<ContentSnapshot>, after: Option<ContentSnapshot>) -> Self {
        Self::Updated { before, after }
    }

    pub fn created(snapshot: ContentSnapshot) -> Self {
        Self::Created { snapshot }
    }

    /// 变更后的快照
    pub fn after(&self) -> Option<&ContentSnapshot> {
        match self {
            Self::Updated { after, .. } => after.as_ref(),
            Self::Created { snapshot } => Some(snapshot),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_from_collection() {
        assert_eq!(DocumentKind::from_collection("v3_mappins"), Some(DocumentKind::Pin));
        assert_eq!(DocumentKind::from_collection("v3_howtos/some-id"), Some(DocumentKind::HowTo));
        assert_eq!(
            DocumentKind::from_collection("/questions_rev20230926/q1"),
            Some(DocumentKind::Question)
        );
        assert_eq!(DocumentKind::from_collection("v3_users"), None);
        assert_eq!(DocumentKind::from_collection(""), None);
    }

    #[test]
    fn test_snapshot_deserialize_keeps_fields() {
        let snapshot: ContentSnapshot = serde_json::from_value(json!({
            "_id": "abc123",
            "type": "trash",
            "moderation": "accepted",
            "location": {"lat": 1.0, "lng": 2.0}
        }))
        .unwrap();

        assert!(snapshot.is_accepted());
        assert_eq!(snapshot.id(), "abc123");
        assert_eq!(snapshot.content_type(), "trash");
        assert!(snapshot.fields.contains_key("location"));
    }

    #[test]
    fn test_snapshot_null_moderation() {
        let snapshot: ContentSnapshot =
            serde_json::from_value(json!({"moderation": null, "title": "x"})).unwrap();
        assert_eq!(snapshot.moderation, None);
        assert!(!snapshot.is_accepted());
    }

    #[test]
    fn test_non_string_moderation_is_not_accepted() {
        for raw in [json!(3), json!(true), json!({"status": "accepted"}), json!(["accepted"])] {
            let snapshot: ContentSnapshot =
                serde_json::from_value(json!({"moderation": raw, "_id": "p1"})).unwrap();
            assert_eq!(snapshot.moderation, None);
            assert!(!snapshot.is_accepted());
            assert_eq!(snapshot.id(), "p1");
        }
    }

    #[test]
    fn test_text_is_permissive() {
        let snapshot = ContentSnapshot::new()
            .with_field("title", Value::Null)
            .with_field("_id", 42);

        assert_eq!(snapshot.title(), "");
        assert_eq!(snapshot.author(), "");
        assert_eq!(snapshot.id(), "42");
    }

    #[test]
    fn test_event_after() {
        let snap = ContentSnapshot::new().with_moderation("accepted");
        assert_eq!(TransitionEvent::created(snap.clone()).after(), Some(&snap));
        assert_eq!(TransitionEvent::updated(Some(snap), None).after(), None);
    }
}
