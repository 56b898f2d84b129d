//! Removal of author comments from the learning objectives text.
//!
//! Two comment forms are recognized:
//! - any line containing `!!!`
//! - blocks from a line starting with `!!! BEGIN COMMENT` through the next
//!   line starting with `!!! END COMMENT`

pub const COMMENT_INDICATOR: &str = "!!!";
pub const COMMENT_BEGIN_INDICATOR: &str = "!!! BEGIN COMMENT";
pub const COMMENT_END_INDICATOR: &str = "!!! END COMMENT";

/// Strip comment lines and comment blocks, keeping all other lines in order.
///
/// A block with no end marker swallows the rest of the document.
pub fn strip_comments(raw: &str) -> String {
    let mut inside_comment = false;
    let mut kept = Vec::new();
    let mut dropped = 0usize;

    for line in raw.split('\n') {
        if inside_comment {
            if line.starts_with(COMMENT_END_INDICATOR) {
                inside_comment = false;
            }
            dropped += 1;
        } else if line.starts_with(COMMENT_BEGIN_INDICATOR) {
            inside_comment = true;
            dropped += 1;
        } else if line.contains(COMMENT_INDICATOR) {
            dropped += 1;
        } else {
            kept.push(line);
        }
    }

    if inside_comment {
        tracing::warn!("Comment block never closed; the rest of the document was dropped");
    }
    tracing::debug!("Stripped {} comment line(s)", dropped);

    kept.join("\n")
}
