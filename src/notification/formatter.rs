//! 消息格式化 - 将快照渲染为 Discord 消息文本
//!
//! 模板是固定的，字段缺失时替换为空串，不做校验。

use super::channel::NotificationMessage;
use super::snapshot::{ContentSnapshot, DocumentKind};

/// 按文档类型渲染通知消息
///
/// `site_url` 用于拼接深链接，末尾不应带 `/`（由配置加载时去除）。
pub fn render_message(kind: DocumentKind, after: &ContentSnapshot, site_url: &str) -> NotificationMessage {
    let content = match kind {
        DocumentKind::Pin => {
            let id = after.id();
            format!(
                "📍 *New {}* pin from {}. \n Location here <{}/map/#{}>",
                after.content_type(),
                id,
                site_url,
                id
            )
        }
        DocumentKind::HowTo => format!(
            "📓 Yeah! New How To **{}** by *{}*\n check it out: <{}/how-to/{}>",
            after.title(),
            after.author(),
            site_url,
            after.slug()
        ),
        DocumentKind::Question => format!(
            "❓ {} has a new question: {}\nHelp them out and answer here: <{}/questions/{}>",
            after.author(),
            after.title(),
            site_url,
            after.slug()
        ),
    };

    NotificationMessage::new(content)
}
