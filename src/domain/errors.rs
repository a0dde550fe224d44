//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::ChannelMode;
use thiserror::Error;

/// Failure kinds reported by the channel gateway for send/delete.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The platform refused the action (missing permission).
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Network, rate-limit or any other platform failure.
    #[error("Transport error: {0}")]
    Transport(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Startup validation: one channel id configured under two modes.
    #[error("Channel {channel_id} is configured as both {first} and {second}")]
    OverlappingChannel {
        channel_id: u64,
        first: ChannelMode,
        second: ChannelMode,
    },

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}
