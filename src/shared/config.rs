//! Application configuration. Bot token, command prefix, moderated channels.

use crate::domain::{ChannelMode, DomainError, PolicyTable};
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Default lifetime of moderation warnings, in seconds.
pub const DEFAULT_WARNING_TTL_SECS: u64 = 5;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Bot token. Read from MODGATE_TOKEN, falling back to DISCORD_BOT_TOKEN.
    #[serde(default)]
    pub token: Option<String>,

    /// Prefix for `status` / `help_config`. Read from MODGATE_COMMAND_PREFIX.
    #[serde(default)]
    pub command_prefix: Option<String>,

    /// Seconds before a warning is removed. Read from MODGATE_WARNING_TTL_SECS.
    #[serde(default)]
    pub warning_ttl_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Moderated channels (comma or whitespace separated ids)
    // ─────────────────────────────────────────────────────────────────────────
    /// Video-only channels. Read from MODGATE_VIDEO_CHANNELS.
    #[serde(default)]
    pub video_channels: Option<String>,

    /// Photo-only channels. Read from MODGATE_PHOTO_CHANNELS.
    #[serde(default)]
    pub photo_channels: Option<String>,

    /// Feed channels (text, GIFs, audio). Read from MODGATE_FEED_CHANNELS.
    #[serde(default)]
    pub feed_channels: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("MODGATE_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        // Environment wins over the file.
        c = c.add_source(config::Environment::with_prefix("MODGATE"));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        if cfg.token.is_none() {
            cfg.token = std::env::var("DISCORD_BOT_TOKEN").ok();
        }
        Ok(cfg)
    }

    /// Returns the bot token, or an error if it is missing or blank.
    pub fn token(&self) -> Result<String, DomainError> {
        self.token
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .ok_or_else(|| {
                DomainError::Config(
                    "Set DISCORD_BOT_TOKEN (or MODGATE_TOKEN) in the environment or .env".into(),
                )
            })
    }

    pub fn command_prefix_or_default(&self) -> String {
        self.command_prefix
            .clone()
            .filter(|p| !p.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMMAND_PREFIX.to_string())
    }

    pub fn warning_ttl(&self) -> Duration {
        Duration::from_secs(self.warning_ttl_secs.unwrap_or(DEFAULT_WARNING_TTL_SECS))
    }

    /// Build and validate the policy table. Any error is fatal at startup.
    pub fn policy_table(&self) -> Result<PolicyTable, DomainError> {
        let mut entries = Vec::with_capacity(ChannelMode::ALL.len());
        for mode in ChannelMode::ALL {
            let (field, raw) = match mode {
                ChannelMode::Video => ("video_channels", &self.video_channels),
                ChannelMode::Photo => ("photo_channels", &self.photo_channels),
                ChannelMode::Feed => ("feed_channels", &self.feed_channels),
            };
            let ids = match raw {
                Some(raw) => parse_channel_ids(field, raw)?,
                None => Vec::new(),
            };
            entries.push((mode, ids));
        }
        PolicyTable::new(entries)
    }
}

/// Parse a comma/whitespace separated list of non-zero numeric channel ids.
pub fn parse_channel_ids(field: &str, raw: &str) -> Result<Vec<u64>, DomainError> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| match token.parse::<u64>() {
            Ok(0) => Err(DomainError::Config(format!(
                "{field}: channel id must be non-zero"
            ))),
            Ok(id) => Ok(id),
            Err(_) => Err(DomainError::Config(format!(
                "{field}: '{token}' is not a numeric channel id"
            ))),
        })
        .collect()
}
