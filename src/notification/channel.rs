//! 通知渠道 trait 定义

use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// 通知消息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// 消息内容（已格式化）
    pub content: String,
}

impl NotificationMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// 发送成功后的响应描述
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryReceipt {
    /// HTTP 状态码（2xx）
    pub status: u16,
}

/// 投递失败
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// 网络层错误，未能到达 webhook
    #[error("webhook transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// webhook 返回非 2xx 状态
    #[error("webhook rejected message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Webhook 渠道
///
/// 每次调用最多发起一次请求，不做重试。
pub trait WebhookChannel: Send + Sync {
    /// 渠道名称（用于日志）
    fn name(&self) -> &str;

    /// 发送消息
    fn send(
        &self,
        message: &NotificationMessage,
    ) -> impl Future<Output = Result<DeliveryReceipt, DeliveryError>> + Send;
}
