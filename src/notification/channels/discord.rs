//! Discord webhook 渠道
//!
//! POST `{"content": "..."}` 到 webhook URL，任何 2xx 视为成功。

use crate::notification::channel::{DeliveryError, DeliveryReceipt, NotificationMessage, WebhookChannel};
use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{error, info};

/// Discord webhook 渠道配置
#[derive(Debug, Clone)]
pub struct DiscordWebhookConfig {
    /// Webhook URL
    pub webhook_url: String,
    /// 超时时间 (秒)
    pub timeout_secs: u64,
}

/// Discord webhook 渠道
#[derive(Debug, Clone)]
pub struct DiscordWebhookChannel {
    client: Client,
    config: DiscordWebhookConfig,
}

impl DiscordWebhookChannel {
    /// 创建渠道
    ///
    /// HTTP client 构建失败不属于投递错误，返回 anyhow 错误。
    pub fn new(config: DiscordWebhookConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, config })
    }

    /// 使用已有的 HTTP client（共享连接池或自定义代理设置）
    pub fn with_client(client: Client, config: DiscordWebhookConfig) -> Self {
        Self { client, config }
    }
}

impl WebhookChannel for DiscordWebhookChannel {
    fn name(&self) -> &str {
        "discord"
    }

    async fn send(&self, message: &NotificationMessage) -> std::result::Result<DeliveryReceipt, DeliveryError> {
        let response = match self
            .client
            .post(&self.config.webhook_url)
            .json(message)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(channel = self.name(), error = %e, "Webhook request failed");
                return Err(DeliveryError::Transport(e));
            }
        };

        let status = response.status();
        if status.is_success() {
            info!(channel = self.name(), status = status.as_u16(), "post success");
            return Ok(DeliveryReceipt {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.unwrap_or_default();
        error!(
            channel = self.name(),
            status = status.as_u16(),
            body = %body,
            "Webhook rejected message"
        );
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
