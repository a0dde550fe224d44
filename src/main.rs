//! Wiring & DI. Entry point: load config, build the policy table, inject the
//! gateway into services, run the Discord client. No business logic here.

use dotenv::dotenv;
use modgate::adapters::discord::{DiscordHandler, SerenityGateway};
use modgate::domain::ChannelMode;
use modgate::ports::{ChannelGateway, MessageEventPort};
use modgate::shared::AppConfig;
use modgate::usecases::{CommandService, ModerationService};
use serenity::all::Http;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    modgate::adapters::ui::init_ui();

    let cfg = AppConfig::load()?;
    let token = cfg.token()?;

    // --- Policy table: validated once, read-only afterwards ---
    let policy = Arc::new(cfg.policy_table()?);
    for mode in ChannelMode::ALL {
        info!(
            mode = %mode,
            channels = policy.channels_for(mode).len(),
            "moderated channels"
        );
    }
    if policy.is_empty() {
        warn!("no moderated channels configured; every message will be allowed");
    }

    // --- Gateway (HTTP client shared by warnings, deletes and command replies) ---
    let gateway = Arc::new(SerenityGateway::new(Arc::new(Http::new(&token))));
    let channel_gateway = Arc::clone(&gateway) as Arc<dyn ChannelGateway>;

    // --- Services ---
    let commands = Arc::new(CommandService::new(
        Arc::clone(&channel_gateway),
        Arc::clone(&policy),
        cfg.command_prefix_or_default(),
    ));
    let warning_ttl = cfg.warning_ttl();
    info!(
        warning_ttl_secs = warning_ttl.as_secs(),
        "warnings auto-delete after {} s",
        warning_ttl.as_secs()
    );
    let moderation: Arc<dyn MessageEventPort> = Arc::new(ModerationService::new(
        channel_gateway,
        policy,
        commands,
        warning_ttl,
    ));

    // --- Run (blocks until the gateway connection ends) ---
    let handler = DiscordHandler::new(gateway, moderation);
    let mut client = serenity::Client::builder(&token, DiscordHandler::intents())
        .event_handler(handler)
        .await?;
    client.start().await?;

    Ok(())
}
