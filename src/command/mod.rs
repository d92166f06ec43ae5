//! Command pipeline
//!
//! Converts free text from the device into a reply plus device actions:
//! raw text -> normalize -> KeywordSet match -> Intent -> IntentResolution

pub mod action;
pub mod intent;
pub mod resolver;

pub use action::{Action, ActionError, DelayMs, LedState};
pub use intent::{classify, Intent, KeywordSet, MatchPolicy};
pub use resolver::{IntentResolution, IntentResolver};
