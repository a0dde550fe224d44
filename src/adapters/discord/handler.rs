//! Discord event handler for serenity.
//!
//! Implements the EventHandler trait: records identity on ready, tracks guild
//! membership, and forwards every message to the inbound port.

use crate::adapters::discord::{SerenityGateway, mapper};
use crate::ports::MessageEventPort;
use serenity::all::{
    Context, EventHandler, GatewayIntents, Guild, Message, Ready, UnavailableGuild,
};
use serenity::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

/// Handler for Discord gateway events.
pub struct DiscordHandler {
    gateway: Arc<SerenityGateway>,
    events: Arc<dyn MessageEventPort>,
}

impl DiscordHandler {
    pub fn new(gateway: Arc<SerenityGateway>, events: Arc<dyn MessageEventPort>) -> Self {
        Self { gateway, events }
    }

    /// Required gateway intents for the bot.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS | GatewayIntents::GUILD_MESSAGES | GatewayIntents::MESSAGE_CONTENT
    }
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.gateway.set_identity(
            ready.user.id.get(),
            ready.guilds.iter().map(|g| g.id.get()),
        );
        info!(
            bot_name = %ready.user.name,
            bot_id = ready.user.id.get(),
            guilds = ready.guilds.len(),
            "discord bot ready"
        );
        for guild in &ready.guilds {
            debug!(guild_id = guild.id.get(), "connected guild");
        }
    }

    async fn guild_create(&self, _ctx: Context, guild: Guild, _is_new: Option<bool>) {
        self.gateway.guild_joined(guild.id.get());
        debug!(guild_id = guild.id.get(), guild_name = %guild.name, "guild available");
    }

    async fn guild_delete(
        &self,
        _ctx: Context,
        incomplete: UnavailableGuild,
        _full: Option<Guild>,
    ) {
        // `unavailable` means an outage; the bot is still a member.
        if incomplete.unavailable {
            debug!(guild_id = incomplete.id.get(), "guild unavailable");
            return;
        }
        self.gateway.guild_left(incomplete.id.get());
        info!(guild_id = incomplete.id.get(), "removed from guild");
    }

    async fn message(&self, _ctx: Context, msg: Message) {
        let message = mapper::message_to_domain(&msg);
        let outcome = self.events.on_message(message).await;
        debug!(msg_id = msg.id.get(), ?outcome, "message handled");
    }
}
