//! Implements ChannelGateway over serenity's HTTP client.
//!
//! Discord has no server-side "delete after"; warnings are removed by a
//! detached task once the delay elapses.

use crate::adapters::discord::mapper;
use crate::domain::{GatewayError, MessageHandle, Notice};
use crate::ports::ChannelGateway;
use async_trait::async_trait;
use serenity::all::{ChannelId, CreateEmbed, CreateMessage, Http, MessageId};
use std::collections::HashSet;
use std::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tracing::debug;

/// Discord gateway adapter. Identity is filled in on `ready`; the guild set is
/// kept current by guild create/delete events.
pub struct SerenityGateway {
    http: Arc<Http>,
    /// 0 until the gateway reports ready.
    bot_user_id: AtomicU64,
    guilds: RwLock<HashSet<u64>>,
}

impl SerenityGateway {
    pub fn new(http: Arc<Http>) -> Self {
        Self {
            http,
            bot_user_id: AtomicU64::new(0),
            guilds: RwLock::new(HashSet::new()),
        }
    }

    /// Record the bot identity and the guilds listed in the ready event.
    pub fn set_identity(&self, bot_user_id: u64, guild_ids: impl IntoIterator<Item = u64>) {
        self.bot_user_id.store(bot_user_id, Ordering::Release);
        let mut guilds = self.guilds.write().unwrap_or_else(PoisonError::into_inner);
        guilds.clear();
        guilds.extend(guild_ids);
    }

    /// The bot joined a guild, or a guild became available. Idempotent.
    pub fn guild_joined(&self, guild_id: u64) {
        self.guilds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(guild_id);
    }

    /// The bot left or was removed from a guild.
    pub fn guild_left(&self, guild_id: u64) {
        self.guilds
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&guild_id);
    }

    fn channel(channel_id: u64) -> Result<ChannelId, GatewayError> {
        NonZeroU64::new(channel_id)
            .map(ChannelId::from)
            .ok_or_else(|| GatewayError::Transport(format!("invalid channel id {channel_id}")))
    }

    fn handle(sent: &serenity::all::Message) -> MessageHandle {
        MessageHandle {
            channel_id: sent.channel_id.get(),
            message_id: sent.id.get(),
        }
    }
}

#[async_trait]
impl ChannelGateway for SerenityGateway {
    async fn send_message(
        &self,
        channel_id: u64,
        text: &str,
        auto_delete_after: Option<Duration>,
    ) -> Result<MessageHandle, GatewayError> {
        let channel = Self::channel(channel_id)?;
        let sent = channel
            .say(&self.http, text)
            .await
            .map_err(mapper::gateway_error)?;

        if let Some(delay) = auto_delete_after {
            let http = Arc::clone(&self.http);
            let message_id = sent.id;
            tokio::spawn(async move {
                tokio::time::sleep(delay).await;
                if let Err(e) = channel.delete_message(&http, message_id).await {
                    debug!(channel_id, msg_id = message_id.get(), error = %e, "auto-delete failed");
                }
            });
        }

        Ok(Self::handle(&sent))
    }

    async fn send_notice(
        &self,
        channel_id: u64,
        notice: &Notice,
    ) -> Result<MessageHandle, GatewayError> {
        let channel = Self::channel(channel_id)?;
        let mut embed = CreateEmbed::new().title(&notice.title).colour(notice.colour);
        if let Some(description) = &notice.description {
            embed = embed.description(description);
        }
        for field in &notice.fields {
            embed = embed.field(&field.name, &field.value, field.inline);
        }
        let sent = channel
            .send_message(&self.http, CreateMessage::new().embed(embed))
            .await
            .map_err(mapper::gateway_error)?;
        Ok(Self::handle(&sent))
    }

    async fn delete_message(&self, handle: MessageHandle) -> Result<(), GatewayError> {
        let channel = Self::channel(handle.channel_id)?;
        let message_id = NonZeroU64::new(handle.message_id)
            .map(MessageId::from)
            .ok_or_else(|| {
                GatewayError::Transport(format!("invalid message id {}", handle.message_id))
            })?;
        channel
            .delete_message(&self.http, message_id)
            .await
            .map_err(mapper::gateway_error)
    }

    async fn resolve_channel_name(&self, channel_id: u64) -> Option<String> {
        let channel = Self::channel(channel_id).ok()?;
        channel.name(&self.http).await.ok()
    }

    fn bot_user_id(&self) -> Option<u64> {
        match self.bot_user_id.load(Ordering::Acquire) {
            0 => None,
            id => Some(id),
        }
    }

    fn guild_count(&self) -> usize {
        self.guilds
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
