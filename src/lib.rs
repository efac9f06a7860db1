//! Moderation Notifier - 内容审核通过时推送 Discord 通知

pub mod config;
pub mod notification;
pub mod trigger;

pub use config::{ConfigError, NotifierConfig};
pub use notification::{
    evaluate, render_message, should_notify, ContentSnapshot, DeliveryError, DeliveryReceipt,
    DiscordWebhookChannel, DiscordWebhookConfig, DocumentKind, ModerationStatus, NotificationMessage,
    NotifyOutcome, TransitionEvent, TransitionNotifier, WebhookChannel,
};
pub use trigger::{TriggerEnvelope, TriggerError, TriggerKind};
