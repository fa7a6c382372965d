//! Bookmarker presentation layer.
//!
//! - `table`: rows, plain-text rendering and user-facing messages
//! - `confirm`: yes/no prompts gating add and delete
//! - `flow`: confirm-then-mutate operations over the bookmark manager
//! - `console`: interactive terminal front end (feature `console`)

pub mod confirm;
pub mod flow;
pub mod table;

#[cfg(feature = "console")]
pub mod console;
