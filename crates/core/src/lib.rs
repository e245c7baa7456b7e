//! `botdesk-core` — shared foundation building blocks.
//!
//! This crate contains **pure** primitives (no infrastructure concerns).

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{BotId, DataSourceId, FileId, UserId};
