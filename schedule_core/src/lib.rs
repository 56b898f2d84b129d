#![forbid(unsafe_code)]

//! Core pipeline for generating a course schedule page.
//!
//! This crate provides:
//! - Term configuration (built-in term, TOML overrides)
//! - Comment stripping and session splitting of learning objectives
//! - Calendar walk assigning dates and session numbers
//! - HTML rendering of sessions, topics and the full page

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod comments;
pub mod splitter;
pub mod calendar;
pub mod render;
pub mod topics;
pub mod pretty;
pub mod document;
pub mod files;
pub mod maker;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::TermConfig;
pub use comments::strip_comments;
pub use splitter::split_into_sessions;
pub use calendar::{assign_dates, meeting_dates};
pub use document::ScheduleDocument;
pub use maker::ScheduleMaker;
