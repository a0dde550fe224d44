//! Domain entities. Pure data structures for the core business.
//!
//! No Discord/IO types here — these are mapped from adapters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Content policy declared for a moderated channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelMode {
    /// Video attachments or links only.
    Video,
    /// Image attachments only.
    Photo,
    /// Text, GIFs and audio; pure video dumps are rejected.
    Feed,
}

impl ChannelMode {
    /// Fixed iteration order used by the policy table and the status command.
    pub const ALL: [ChannelMode; 3] = [ChannelMode::Video, ChannelMode::Photo, ChannelMode::Feed];

    pub fn as_str(self) -> &'static str {
        match self {
            ChannelMode::Video => "video",
            ChannelMode::Photo => "photo",
            ChannelMode::Feed => "feed",
        }
    }

    /// What the channel accepts, as shown to users in warnings.
    pub fn accepted_content(self) -> &'static str {
        match self {
            ChannelMode::Video => "🎥 videos",
            ChannelMode::Photo => "📸 images",
            ChannelMode::Feed => "📝 text, GIFs and audio",
        }
    }

    /// Heading used when listing the mode's channels.
    pub fn heading(self) -> &'static str {
        match self {
            ChannelMode::Video => "🎥 Video channels",
            ChannelMode::Photo => "📸 Photo channels",
            ChannelMode::Feed => "📝 Feed channels",
        }
    }
}

impl fmt::Display for ChannelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse media classification of an attachment, derived from its filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Photo,
    Audio,
    Other,
}

/// A file attached to a message. Only the filename matters for moderation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub filename: String,
}

impl Attachment {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
        }
    }
}

/// A message as delivered by the gateway. Lives for one enforcement decision.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IncomingMessage {
    pub id: u64,
    pub author_id: u64,
    pub channel_id: u64,
    pub text: String,
    pub attachments: Vec<Attachment>,
}

impl IncomingMessage {
    pub fn handle(&self) -> MessageHandle {
        MessageHandle {
            channel_id: self.channel_id,
            message_id: self.id,
        }
    }

    /// Filenames of all attachments, in delivery order.
    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.attachments.iter().map(|a| a.filename.as_str())
    }
}

/// Opaque reference to a message the gateway can delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageHandle {
    pub channel_id: u64,
    pub message_id: u64,
}

/// Result of one enforcement decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Allowed,
    Rejected(ChannelMode),
}

/// Rich informational reply (rendered as an embed by the Discord adapter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub colour: u32,
    pub description: Option<String>,
    pub fields: Vec<NoticeField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

impl Notice {
    pub fn new(title: impl Into<String>, colour: u32) -> Self {
        Self {
            title: title.into(),
            colour,
            description: None,
            fields: Vec::new(),
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(NoticeField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }
}
