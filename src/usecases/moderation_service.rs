//! Enforcement coordinator: policy lookup -> content match -> warn/delete/log.
//!
//! - Self-authored messages are skipped
//! - Unmoderated channels pass straight through
//! - On rejection the warning and the delete are each attempted once; failures
//!   are logged and never propagated
//! - Command processing runs afterwards whatever the outcome

use crate::domain::matcher::{self, Content};
use crate::domain::{ChannelMode, GatewayError, IncomingMessage, Outcome, PolicyTable};
use crate::ports::{ChannelGateway, MessageEventPort};
use crate::usecases::command_service::CommandService;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Default lifetime of the warning posted to the channel.
pub const DEFAULT_WARNING_TTL: Duration = Duration::from_secs(5);

pub struct ModerationService {
    gateway: Arc<dyn ChannelGateway>,
    policy: Arc<PolicyTable>,
    commands: Arc<CommandService>,
    warning_ttl: Duration,
}

impl ModerationService {
    pub fn new(
        gateway: Arc<dyn ChannelGateway>,
        policy: Arc<PolicyTable>,
        commands: Arc<CommandService>,
        warning_ttl: Duration,
    ) -> Self {
        Self {
            gateway,
            policy,
            commands,
            warning_ttl,
        }
    }

    /// Policy decision for the message content alone. No side effects; the
    /// author is not considered here.
    pub fn evaluate(&self, message: &IncomingMessage) -> Outcome {
        match self.policy.lookup_mode(message.channel_id) {
            None => Outcome::Allowed,
            Some(mode) if matcher::matches(Some(mode), &Content::of(message)) => Outcome::Allowed,
            Some(mode) => Outcome::Rejected(mode),
        }
    }

    /// Warn the author, delete the message, log the result.
    async fn reject(&self, message: &IncomingMessage, mode: ChannelMode) {
        let warning = warning_text(message.author_id, mode);
        if let Err(e) = self
            .gateway
            .send_message(message.channel_id, &warning, Some(self.warning_ttl))
            .await
        {
            warn!(
                channel_id = message.channel_id,
                author_id = message.author_id,
                error = %e,
                "failed to send moderation warning"
            );
        }

        match self.gateway.delete_message(message.handle()).await {
            Ok(()) => info!(
                author_id = message.author_id,
                channel_id = message.channel_id,
                mode = %mode,
                "message removed"
            ),
            Err(GatewayError::Forbidden(detail)) => warn!(
                author_id = message.author_id,
                channel_id = message.channel_id,
                mode = %mode,
                detail = %detail,
                "insufficient permissions to delete message"
            ),
            Err(GatewayError::Transport(detail)) => error!(
                author_id = message.author_id,
                channel_id = message.channel_id,
                mode = %mode,
                error = %detail,
                "failed to delete message"
            ),
        }
    }
}

#[async_trait]
impl MessageEventPort for ModerationService {
    async fn on_message(&self, message: IncomingMessage) -> Outcome {
        if self.gateway.bot_user_id() == Some(message.author_id) {
            return Outcome::Allowed;
        }

        let outcome = self.evaluate(&message);
        if let Outcome::Rejected(mode) = outcome {
            self.reject(&message, mode).await;
        } else {
            debug!(channel_id = message.channel_id, msg_id = message.id, "message allowed");
        }

        // TODO: confirm with moderators whether commands in a removed message should still run.
        self.commands.dispatch(&message).await;
        outcome
    }
}

/// Warning shown to the author of a rejected message.
pub fn warning_text(author_id: u64, mode: ChannelMode) -> String {
    format!(
        "⚠️ <@{}>, this channel only accepts {}.",
        author_id,
        mode.accepted_content()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::RecordingGateway;
    use crate::domain::{Attachment, MessageHandle};

    const BOT: u64 = 1;
    const VIDEO: u64 = 100;
    const PHOTO: u64 = 200;
    const FEED: u64 = 300;
    const OPEN: u64 = 400;

    fn service(gw: Arc<RecordingGateway>) -> ModerationService {
        let policy = Arc::new(
            PolicyTable::new([
                (ChannelMode::Video, vec![VIDEO]),
                (ChannelMode::Photo, vec![PHOTO]),
                (ChannelMode::Feed, vec![FEED]),
            ])
            .unwrap(),
        );
        let commands = Arc::new(CommandService::new(gw.clone(), policy.clone(), "!"));
        ModerationService::new(gw, policy, commands, DEFAULT_WARNING_TTL)
    }

    fn message(author_id: u64, channel_id: u64, text: &str, files: &[&str]) -> IncomingMessage {
        IncomingMessage {
            id: 55,
            author_id,
            channel_id,
            text: text.into(),
            attachments: files.iter().map(|f| Attachment::new(*f)).collect(),
        }
    }

    #[tokio::test]
    async fn test_photo_channel_rejects_text() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        let outcome = svc.on_message(message(42, PHOTO, "check this out", &[])).await;

        assert_eq!(outcome, Outcome::Rejected(ChannelMode::Photo));
        let sent = gw.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].channel_id, PHOTO);
        assert!(sent[0].text.contains("images"));
        assert!(sent[0].text.contains("<@42>"));
        assert_eq!(sent[0].auto_delete_after, Some(Duration::from_secs(5)));
        assert_eq!(
            gw.delete_attempts(),
            vec![MessageHandle {
                channel_id: PHOTO,
                message_id: 55
            }]
        );
    }

    #[tokio::test]
    async fn test_forbidden_delete_does_not_stop_processing() {
        let gw = Arc::new(
            RecordingGateway::new(BOT)
                .failing_deletes(GatewayError::Forbidden("Missing Permissions".into())),
        );
        let svc = service(gw.clone());

        let first = svc.on_message(message(42, PHOTO, "check this out", &[])).await;
        let second = svc.on_message(message(43, PHOTO, "", &["ok.png"])).await;

        assert_eq!(first, Outcome::Rejected(ChannelMode::Photo));
        assert_eq!(second, Outcome::Allowed);
        assert_eq!(gw.sent().len(), 1);
        assert_eq!(gw.delete_attempts().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_still_attempted_when_warning_fails() {
        let gw = Arc::new(
            RecordingGateway::new(BOT)
                .failing_sends(GatewayError::Transport("timeout".into()))
                .failing_deletes(GatewayError::Transport("timeout".into())),
        );
        let svc = service(gw.clone());

        let outcome = svc.on_message(message(42, VIDEO, "no link", &[])).await;

        assert_eq!(outcome, Outcome::Rejected(ChannelMode::Video));
        assert_eq!(gw.delete_attempts().len(), 1);
    }

    #[tokio::test]
    async fn test_self_messages_are_never_rejected() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        for channel in [VIDEO, PHOTO, FEED] {
            let outcome = svc.on_message(message(BOT, channel, "", &[])).await;
            assert_eq!(outcome, Outcome::Allowed);
        }
        assert!(gw.sent().is_empty());
        assert!(gw.delete_attempts().is_empty());
    }

    #[tokio::test]
    async fn test_self_filter_happens_before_evaluation() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());
        let own = message(BOT, PHOTO, "check this out", &[]);

        assert_eq!(svc.evaluate(&own), Outcome::Rejected(ChannelMode::Photo));
        assert_eq!(svc.on_message(own).await, Outcome::Allowed);
        assert!(gw.delete_attempts().is_empty());
    }

    #[tokio::test]
    async fn test_unmoderated_channel_allows_anything() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        assert_eq!(svc.on_message(message(42, OPEN, "", &[])).await, Outcome::Allowed);
        assert_eq!(svc.on_message(message(42, OPEN, "", &["a.mp4"])).await, Outcome::Allowed);
        assert!(gw.delete_attempts().is_empty());
    }

    #[tokio::test]
    async fn test_conforming_messages_pass() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        assert_eq!(
            svc.on_message(message(42, VIDEO, "https://x.co/a", &[])).await,
            Outcome::Allowed
        );
        assert_eq!(svc.on_message(message(42, FEED, "hi", &["a.mp4"])).await, Outcome::Allowed);
        assert_eq!(
            svc.on_message(message(42, FEED, "", &["a.mp4"])).await,
            Outcome::Rejected(ChannelMode::Feed)
        );
    }

    #[tokio::test]
    async fn test_commands_run_after_rejection() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        let outcome = svc.on_message(message(42, PHOTO, "!status", &[])).await;

        assert_eq!(outcome, Outcome::Rejected(ChannelMode::Photo));
        assert_eq!(gw.delete_attempts().len(), 1);
        assert_eq!(gw.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_self_commands_are_ignored() {
        let gw = Arc::new(RecordingGateway::new(BOT));
        let svc = service(gw.clone());

        svc.on_message(message(BOT, OPEN, "!status", &[])).await;
        assert!(gw.notices().is_empty());
    }

    #[test]
    fn test_warning_text_names_mode() {
        assert!(warning_text(9, ChannelMode::Video).contains("videos"));
        assert!(warning_text(9, ChannelMode::Feed).contains("GIFs"));
    }
}
