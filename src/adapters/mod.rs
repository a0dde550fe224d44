//! Infrastructure adapters. Implement ports.
//!
//! Discord gateway and startup UI. Map errors to GatewayError.

pub mod discord;
#[cfg(test)]
pub mod mock;
pub mod ui;
