//! Map serenity types to domain entities and serenity errors to GatewayError.

use crate::domain::{Attachment, GatewayError, IncomingMessage};
use serenity::all::Message;
use serenity::model::ModelError;

/// Map a serenity Message to the domain message the coordinator inspects.
pub fn message_to_domain(msg: &Message) -> IncomingMessage {
    IncomingMessage {
        id: msg.id.get(),
        author_id: msg.author.id.get(),
        channel_id: msg.channel_id.get(),
        text: msg.content.clone(),
        attachments: msg
            .attachments
            .iter()
            .map(|a| Attachment::new(a.filename.clone()))
            .collect(),
    }
}

/// Classify a serenity error.
///
/// * HTTP 403 or a cached permission check → `Forbidden`.
/// * Anything else → `Transport`, keeping the raw detail.
pub fn gateway_error(err: serenity::Error) -> GatewayError {
    let forbidden = match &err {
        serenity::Error::Http(http) => http.status_code().is_some_and(|s| s.as_u16() == 403),
        serenity::Error::Model(ModelError::InvalidPermissions { .. }) => true,
        _ => false,
    };
    if forbidden {
        GatewayError::Forbidden(err.to_string())
    } else {
        GatewayError::Transport(err.to_string())
    }
}
