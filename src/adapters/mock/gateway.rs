//! Recording gateway for tests. No network; every call is captured.

use crate::domain::{GatewayError, MessageHandle, Notice};
use crate::ports::ChannelGateway;
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub channel_id: u64,
    pub text: String,
    pub auto_delete_after: Option<Duration>,
}

/// In-memory `ChannelGateway`. Send and delete can be scripted to fail.
#[derive(Default)]
pub struct RecordingGateway {
    bot_user_id: Option<u64>,
    guild_count: usize,
    channel_names: HashMap<u64, String>,
    send_failure: Option<GatewayError>,
    delete_failure: Option<GatewayError>,
    next_id: AtomicU64,
    pub sent: Mutex<Vec<SentMessage>>,
    pub notices: Mutex<Vec<(u64, Notice)>>,
    pub delete_attempts: Mutex<Vec<MessageHandle>>,
}

impl RecordingGateway {
    pub fn new(bot_user_id: u64) -> Self {
        Self {
            bot_user_id: Some(bot_user_id),
            next_id: AtomicU64::new(1_000),
            ..Default::default()
        }
    }

    pub fn with_guilds(mut self, count: usize) -> Self {
        self.guild_count = count;
        self
    }

    pub fn with_channel_name(mut self, channel_id: u64, name: &str) -> Self {
        self.channel_names.insert(channel_id, name.to_string());
        self
    }

    pub fn failing_sends(mut self, err: GatewayError) -> Self {
        self.send_failure = Some(err);
        self
    }

    pub fn failing_deletes(mut self, err: GatewayError) -> Self {
        self.delete_failure = Some(err);
        self
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<(u64, Notice)> {
        self.notices.lock().unwrap().clone()
    }

    pub fn delete_attempts(&self) -> Vec<MessageHandle> {
        self.delete_attempts.lock().unwrap().clone()
    }

    fn next_handle(&self, channel_id: u64) -> MessageHandle {
        MessageHandle {
            channel_id,
            message_id: self.next_id.fetch_add(1, Ordering::Relaxed),
        }
    }
}

#[async_trait::async_trait]
impl ChannelGateway for RecordingGateway {
    async fn send_message(
        &self,
        channel_id: u64,
        text: &str,
        auto_delete_after: Option<Duration>,
    ) -> Result<MessageHandle, GatewayError> {
        if let Some(err) = &self.send_failure {
            return Err(err.clone());
        }
        self.sent.lock().unwrap().push(SentMessage {
            channel_id,
            text: text.to_string(),
            auto_delete_after,
        });
        Ok(self.next_handle(channel_id))
    }

    async fn send_notice(
        &self,
        channel_id: u64,
        notice: &Notice,
    ) -> Result<MessageHandle, GatewayError> {
        if let Some(err) = &self.send_failure {
            return Err(err.clone());
        }
        self.notices
            .lock()
            .unwrap()
            .push((channel_id, notice.clone()));
        Ok(self.next_handle(channel_id))
    }

    async fn delete_message(&self, handle: MessageHandle) -> Result<(), GatewayError> {
        self.delete_attempts.lock().unwrap().push(handle);
        match &self.delete_failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    async fn resolve_channel_name(&self, channel_id: u64) -> Option<String> {
        self.channel_names.get(&channel_id).cloned()
    }

    fn bot_user_id(&self) -> Option<u64> {
        self.bot_user_id
    }

    fn guild_count(&self) -> usize {
        self.guild_count
    }
}
