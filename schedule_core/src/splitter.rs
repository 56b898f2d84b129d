//! Splitting cleaned learning objectives into per-session chunks.

use crate::{Error, RegularSession, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// A line containing `Session`, an optional number, and a colon.
/// Everything up to the colon is the marker; the rest of the line is the title.
static SESSION_INDICATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^.*Session *[0-9]*:").expect("session marker regex"));

/// Split comment-free text into undated sessions, one per `Session N:` marker.
///
/// Text before the first marker is ignored. The number of chunks must equal
/// `expected`, otherwise the whole run is aborted.
pub fn split_into_sessions(cleaned: &str, expected: usize) -> Result<Vec<RegularSession>> {
    let chunks: Vec<&str> = SESSION_INDICATOR.split(cleaned).skip(1).collect();

    if chunks.len() != expected {
        return Err(Error::SessionCountMismatch {
            expected,
            found: chunks.len(),
        });
    }

    let sessions: Vec<RegularSession> = chunks
        .into_iter()
        .map(|chunk| {
            let (title, topics) = chunk.split_once('\n').unwrap_or((chunk, ""));
            RegularSession::new(title.trim(), topics)
        })
        .collect();

    tracing::info!("Split learning objectives into {} sessions", sessions.len());
    Ok(sessions)
}
