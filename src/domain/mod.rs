//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod classifier;
pub mod entities;
pub mod errors;
pub mod matcher;
pub mod policy;

pub use entities::{
    Attachment, ChannelMode, IncomingMessage, MediaKind, MessageHandle, Notice, NoticeField,
    Outcome,
};
pub use errors::{DomainError, GatewayError};
pub use policy::PolicyTable;
