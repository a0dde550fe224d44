//! Inbound port. Gateway adapter calls into the application.

use crate::domain::{IncomingMessage, Outcome};

/// Input port: the gateway delivers each received message here.
///
/// Must never fail: every error on the enforcement path is absorbed and logged
/// so the event loop keeps running.
#[async_trait::async_trait]
pub trait MessageEventPort: Send + Sync {
    async fn on_message(&self, message: IncomingMessage) -> Outcome;
}
