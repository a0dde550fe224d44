//! Port traits. API boundaries for the hexagon.
//!
//! - Inbound: Called by the gateway adapter into the application
//! - Outbound: Called by application into infrastructure

pub mod inbound;
pub mod outbound;

pub use inbound::MessageEventPort;
pub use outbound::ChannelGateway;
