//! Discord adapter (serenity). Gateway, event handler, type mapping.

pub mod gateway;
pub mod handler;
pub mod mapper;

pub use gateway::SerenityGateway;
pub use handler::DiscordHandler;
