//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It translates key and mouse events into
//! [`crate::types::GameAction`]s. There is no key-repeat handling, queueing or
//! debouncing: every event maps to at most one action, applied immediately.

pub mod map;

pub use blockfall_types as types;

pub use map::{should_quit, translate_event, translate_key};
