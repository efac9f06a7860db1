//! 配置加载
//!
//! 进程启动时加载一次，之后只读。优先级：环境变量 > 配置文件
//! （`~/.config/moderation-notifier/config.json`）。

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;
use url::Url;

pub const ENV_SITE_URL: &str = "SITE_URL";
pub const ENV_WEBHOOK_URL: &str = "DISCORD_WEBHOOK_URL";
pub const ENV_TIMEOUT_SECS: &str = "NOTIFIER_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required configuration value {0}")]
    Missing(&'static str),

    #[error("{key} is not a valid URL ({value}): {source}")]
    InvalidUrl {
        key: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{key} is not a valid number: {value}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 配置文件内容（所有字段可选，由环境变量补全）
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    site_url: Option<String>,
    discord_webhook_url: Option<String>,
    timeout_secs: Option<u64>,
}

/// 通知器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifierConfig {
    /// 站点根 URL，用于拼接深链接
    ///
    /// 加载时去掉末尾的 `/`：`https://example.org/` 会变成 `https://example.org`，
    /// 避免深链接出现 `//map/`。
    pub site_url: String,
    /// Discord webhook URL
    pub webhook_url: String,
    /// HTTP 超时时间 (秒)
    pub timeout_secs: u64,
}

impl NotifierConfig {
    /// 默认配置文件路径
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config/moderation-notifier/config.json"))
    }

    /// 从配置文件和进程环境变量加载
    ///
    /// `path` 为 None 时使用默认路径；默认路径不存在不算错误。
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => Some(read_file(p)?),
            None => match Self::default_path() {
                Some(p) if p.exists() => Some(read_file(&p)?),
                _ => None,
            },
        };

        Self::resolve(file.unwrap_or_default(), |key| std::env::var(key).ok())
    }

    /// 只从给定的 lookup 解析（用于测试和注入）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Self::resolve(FileConfig::default(), lookup)
    }

    fn resolve(file: FileConfig, lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let env = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let site_url = env(ENV_SITE_URL)
            .or(file.site_url)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_SITE_URL))?;
        let webhook_url = env(ENV_WEBHOOK_URL)
            .or(file.discord_webhook_url)
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing(ENV_WEBHOOK_URL))?;

        let timeout_secs = match env(ENV_TIMEOUT_SECS) {
            Some(v) => v.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                key: ENV_TIMEOUT_SECS,
                value: v,
            })?,
            None => file.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        let site_url = site_url.trim().trim_end_matches('/').to_string();
        let webhook_url = webhook_url.trim().to_string();
        validate_url(ENV_SITE_URL, &site_url)?;
        validate_url(ENV_WEBHOOK_URL, &webhook_url)?;

        Ok(Self {
            site_url,
            webhook_url,
            timeout_secs,
        })
    }

    /// 隐藏 token 的 webhook URL（用于日志和输出）
    pub fn redacted_webhook_url(&self) -> String {
        match Url::parse(&self.webhook_url) {
            Ok(url) => format!("{}://{}/…", url.scheme(), url.host_str().unwrap_or("")),
            Err(_) => "<invalid>".to_string(),
        }
    }
}

fn read_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Loaded config file");
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_url(key: &'static str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map(|_| ()).map_err(|source| ConfigError::InvalidUrl {
        key,
        value: value.to_string(),
        source,
    })
}
