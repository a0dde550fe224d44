//! Test doubles for outbound ports.

pub mod gateway;

pub use gateway::{RecordingGateway, SentMessage};
