//! 通知分发器 - 判断事件并投递到 webhook

use super::channel::{DeliveryError, DeliveryReceipt, NotificationMessage, WebhookChannel};
use super::detector::evaluate;
use super::snapshot::{DocumentKind, TransitionEvent};
use tracing::{debug, info};

/// 单个事件的处理结果
#[derive(Debug, Clone, PartialEq)]
pub enum NotifyOutcome {
    /// 未触发（不是进入 accepted 的上升沿）
    Skipped,
    /// 已发送
    Sent(DeliveryReceipt),
    /// dry-run 模式，只渲染不发送
    DryRun(NotificationMessage),
}

/// 审核通过通知器
///
/// 无内部状态：每个事件独立处理，最多发起一次 webhook 请求。
pub struct TransitionNotifier<C> {
    channel: C,
    site_url: String,
    dry_run: bool,
}

impl<C: WebhookChannel> TransitionNotifier<C> {
    pub fn new(channel: C, site_url: impl Into<String>) -> Self {
        Self {
            channel,
            site_url: site_url.into(),
            dry_run: false,
        }
    }

    /// 设置 dry-run 模式
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn channel(&self) -> &C {
        &self.channel
    }

    /// 处理一个变更事件
    ///
    /// 投递失败原样返回给调用方（触发运行时自行决定是否重试）。
    pub async fn handle(&self, kind: DocumentKind, event: &TransitionEvent) -> Result<NotifyOutcome, DeliveryError> {
        debug!(kind = %kind, snapshot = ?event.after(), "Received transition event");

        let Some(message) = evaluate(kind, event, &self.site_url) else {
            info!(kind = %kind, "Not a transition into accepted, skipping");
            return Ok(NotifyOutcome::Skipped);
        };

        if self.dry_run {
            info!(channel = self.channel.name(), "Dry-run mode, not sending");
            return Ok(NotifyOutcome::DryRun(message));
        }

        let receipt = self.dispatch(&message).await?;
        Ok(NotifyOutcome::Sent(receipt))
    }

    /// 发送一条已渲染的消息
    pub async fn dispatch(&self, message: &NotificationMessage) -> Result<DeliveryReceipt, DeliveryError> {
        info!(channel = self.channel.name(), "Dispatching notification");
        self.channel.send(message).await
    }
}
