//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{GatewayError, MessageHandle, Notice};
use std::time::Duration;

/// Chat platform gateway. Send/delete messages and expose the bot identity.
#[async_trait::async_trait]
pub trait ChannelGateway: Send + Sync {
    /// Send a plain-text message to a channel.
    ///
    /// - `auto_delete_after`: if set, the platform copy is removed after this delay.
    async fn send_message(
        &self,
        channel_id: u64,
        text: &str,
        auto_delete_after: Option<Duration>,
    ) -> Result<MessageHandle, GatewayError>;

    /// Send a rich notice (embed) to a channel.
    async fn send_notice(
        &self,
        channel_id: u64,
        notice: &Notice,
    ) -> Result<MessageHandle, GatewayError>;

    /// Delete a message. `Forbidden` when the bot lacks permission.
    async fn delete_message(&self, handle: MessageHandle) -> Result<(), GatewayError>;

    /// Human-readable channel name, if the platform can resolve it.
    async fn resolve_channel_name(&self, channel_id: u64) -> Option<String>;

    /// The bot's own user id. `None` until the gateway has connected.
    fn bot_user_id(&self) -> Option<u64>;

    /// Number of servers the bot is connected to.
    fn guild_count(&self) -> usize;
}
