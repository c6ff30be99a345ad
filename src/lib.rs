//! monero-sns-notify - publish node alerts to an Amazon SNS topic
//!
//! This library holds the pieces behind the `send-sns` binary: argument
//! parsing, layered configuration, topic and region resolution, and the
//! SNS publisher.

pub mod app;
pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod logging;
pub mod notification;

// Re-export core types for convenience
pub use crate::core::*;
