//! 具体渠道实现

pub mod discord;

pub use discord::{DiscordWebhookChannel, DiscordWebhookConfig};
