//! Typed Telegram Bot API chat permissions.
//!
//! [`ChatPermissions`] mirrors the Bot API's JSON object field by field.
//! Other objects follow the same [`TelegramObject`] conventions.

pub mod config;
pub mod env;
pub mod error;
pub mod interop;
pub mod types;

pub use types::{ChatPermissions, ChatPermissionsBuilder, TelegramObject, User};
