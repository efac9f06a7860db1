//! Moderation Notifier CLI
//!
//! 由文档存储的触发运行时调用：读取变更 envelope，判断是否审核通过，推送 Discord 通知。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use moderation_notifier::{
    DiscordWebhookChannel, DiscordWebhookConfig, NotifierConfig, NotifyOutcome, TransitionNotifier,
    TriggerEnvelope,
};
use std::fs::File;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "modnotify")]
#[command(about = "Moderation Notifier - 内容审核通过时推送 Discord 通知")]
#[command(version)]
struct Cli {
    /// 配置文件路径（默认 ~/.config/moderation-notifier/config.json）
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 处理一个变更事件
    Handle {
        /// envelope 文件路径（默认从 stdin 读取）
        #[arg(long, short)]
        event: Option<PathBuf>,
        /// Dry-run 模式（只打印不发送）
        #[arg(long)]
        dry_run: bool,
    },
    /// 校验配置并打印
    CheckConfig,
}

async fn handle(config: NotifierConfig, event: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let envelope = match &event {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            TriggerEnvelope::from_reader(file)?
        }
        None => TriggerEnvelope::from_reader(std::io::stdin().lock())?,
    };
    let (kind, event) = envelope.into_event()?;

    let channel = DiscordWebhookChannel::new(DiscordWebhookConfig {
        webhook_url: config.webhook_url.clone(),
        timeout_secs: config.timeout_secs,
    })?;
    let notifier = TransitionNotifier::new(channel, config.site_url).with_dry_run(dry_run);

    match notifier.handle(kind, &event).await {
        Ok(NotifyOutcome::Sent(receipt)) => {
            info!(kind = %kind, status = receipt.status, "Notification delivered");
        }
        Ok(NotifyOutcome::DryRun(message)) => {
            println!("{}", message.content);
        }
        Ok(NotifyOutcome::Skipped) => {}
        Err(e) => {
            error!(kind = %kind, error = %e, "Notification delivery failed");
            return Err(e).context("Notification delivery failed");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // 通过 RUST_LOG 环境变量控制日志级别，默认为 info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("moderation_notifier=info,modnotify=info"));

    fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .init();

    let cli = Cli::parse();

    // 配置缺失在启动时直接失败，不进入事件处理
    let config = NotifierConfig::load(cli.config.as_deref()).context("Invalid configuration")?;

    match cli.command {
        Commands::Handle { event, dry_run } => {
            handle(config, event, dry_run).await?;
        }
        Commands::CheckConfig => {
            println!("site_url:     {}", config.site_url);
            println!("webhook_url:  {}", config.redacted_webhook_url());
            println!("timeout_secs: {}", config.timeout_secs);
        }
    }

    Ok(())
}
