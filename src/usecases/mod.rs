//! Application use cases. Orchestrate domain logic via ports.

pub mod command_service;
pub mod moderation_service;

pub use command_service::{Command, CommandService};
pub use moderation_service::ModerationService;
