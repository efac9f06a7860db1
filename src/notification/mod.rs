//! 审核通知 - 文档进入 accepted 状态时推送到聊天 webhook
//!
//! # 流程
//! 1. `detector::evaluate` 判断事件是否为进入 accepted 的上升沿，并渲染消息（纯函数）
//! 2. `TransitionNotifier::dispatch` 通过 `WebhookChannel` 发起一次 POST
//!
//! # 使用示例
//! ```ignore
//! use moderation_notifier::notification::{
//!     DiscordWebhookChannel, DiscordWebhookConfig, DocumentKind, TransitionEvent, TransitionNotifier,
//! };
//!
//! let channel = DiscordWebhookChannel::new(DiscordWebhookConfig {
//!     webhook_url: "https://discord.com/api/webhooks/...".to_string(),
//!     timeout_secs: 30,
//! })?;
//! let notifier = TransitionNotifier::new(channel, "https://community.preciousplastic.com");
//! notifier.handle(DocumentKind::Pin, &TransitionEvent::updated(before, after)).await?;
//! ```

pub mod channel;
pub mod channels;
pub mod detector;
pub mod dispatcher;
pub mod formatter;
pub mod moderation;
pub mod snapshot;

pub use channel::{DeliveryError, DeliveryReceipt, NotificationMessage, WebhookChannel};
pub use channels::{DiscordWebhookChannel, DiscordWebhookConfig};
pub use detector::{evaluate, should_notify};
pub use dispatcher::{NotifyOutcome, TransitionNotifier};
pub use formatter::render_message;
pub use moderation::ModerationStatus;
pub use snapshot::{ContentSnapshot, DocumentKind, TransitionEvent};
