//! Prefix commands: `status` and `help_config`.
//!
//! Read-only introspection over the policy table. Replies are sent as notices;
//! send failures are logged and dropped.

use crate::domain::{ChannelMode, IncomingMessage, Notice, PolicyTable};
use crate::ports::ChannelGateway;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, warn};

const STATUS_COLOUR: u32 = 0x00ff00;
const HELP_COLOUR: u32 = 0x0099ff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status,
    HelpConfig,
}

impl Command {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "status" => Some(Command::Status),
            "help_config" => Some(Command::HelpConfig),
            _ => None,
        }
    }
}

/// Parse `<prefix><name> [args...]`. Unknown names yield `None`.
pub fn parse_command(prefix: &str, text: &str) -> Option<Command> {
    if prefix.is_empty() {
        return None;
    }
    let rest = text.trim().strip_prefix(prefix)?;
    let name = rest.split_whitespace().next()?;
    // `! status` is not a command: the name must follow the prefix directly.
    if !rest.starts_with(name) {
        return None;
    }
    Command::from_name(name)
}

pub struct CommandService {
    gateway: Arc<dyn ChannelGateway>,
    policy: Arc<PolicyTable>,
    prefix: String,
    started_at: DateTime<Utc>,
}

impl CommandService {
    pub fn new(
        gateway: Arc<dyn ChannelGateway>,
        policy: Arc<PolicyTable>,
        prefix: impl Into<String>,
    ) -> Self {
        Self {
            gateway,
            policy,
            prefix: prefix.into(),
            started_at: Utc::now(),
        }
    }

    /// Run the command in `message`, if any. Returns the command that was handled.
    pub async fn dispatch(&self, message: &IncomingMessage) -> Option<Command> {
        let command = parse_command(&self.prefix, &message.text)?;
        debug!(
            channel_id = message.channel_id,
            author_id = message.author_id,
            ?command,
            "running command"
        );
        let notice = match command {
            Command::Status => self.status_notice().await,
            Command::HelpConfig => help_config_notice(),
        };
        if let Err(e) = self.gateway.send_notice(message.channel_id, &notice).await {
            warn!(channel_id = message.channel_id, error = %e, ?command, "failed to send command reply");
        }
        Some(command)
    }

    async fn status_notice(&self) -> Notice {
        let mut notice = Notice::new("Moderator status", STATUS_COLOUR)
            .field("Status", "🟢 Online", true)
            .field("Servers", self.gateway.guild_count().to_string(), true)
            .field(
                "Online since",
                self.started_at.format("%Y-%m-%d %H:%M UTC").to_string(),
                true,
            );

        for mode in ChannelMode::ALL {
            let channels = self.policy.channels_for(mode);
            if channels.is_empty() {
                continue;
            }
            let mut lines = Vec::with_capacity(channels.len());
            for channel_id in channels {
                match self.gateway.resolve_channel_name(channel_id).await {
                    Some(name) => lines.push(format!("#{name}")),
                    None => lines.push(format!("ID: {channel_id}")),
                }
            }
            notice = notice.field(mode.heading(), lines.join("\n"), false);
        }
        notice
    }
}

fn help_config_notice() -> Notice {
    Notice::new("Channel configuration", HELP_COLOUR)
        .description(
            "Channels are configured at startup through environment variables \
             (or the file named by MODGATE_CONFIG). Restart the bot after changes.",
        )
        .field(
            "🎥 Video mode",
            "Accepts video files and links only\nExample: `MODGATE_VIDEO_CHANNELS=123456789`",
            false,
        )
        .field(
            "📸 Photo mode",
            "Accepts images only\nExample: `MODGATE_PHOTO_CHANNELS=987654321`",
            false,
        )
        .field(
            "📝 Feed mode",
            "Accepts text, GIFs and audio\nExample: `MODGATE_FEED_CHANNELS=555666777`",
            false,
        )
}
