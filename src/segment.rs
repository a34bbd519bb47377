//! # Stave Segmentation
//!
//! This module classifies raw text lines and accumulates them into string
//! groups (one group = one tablature stave).
//!
//! ## Classification
//! Real-world tab text copy-pasted from web pages is inconsistently
//! delimited, so a line is judged by shape alone, with no music-specific
//! validation: it must start with a conventional string-label character,
//! contain at least one `|` or `-`, be at least [`MIN_TAB_LINE_LEN`]
//! characters long, and contain fewer than [`MAX_TAB_LINE_LETTERS`] ASCII
//! letters (which rejects prose that happens to start with a matching
//! letter, and incidentally filters most HTML tag fragments).
//!
//! ## Group Accumulation
//! - Consecutive tab lines accumulate into a pending group.
//! - A blank line flushes any non-empty pending group.
//! - Reaching [`COMPLETE_GROUP_LINES`] lines flushes immediately, so
//!   staves stacked without blank-line separation still segment correctly.
//! - A non-tab line flushes a pending group of at least
//!   [`MIN_GROUP_LINES`] lines and discards a smaller one.
//!
//! Lines are trimmed before classification and stored trimmed; column
//! positions downstream are relative to the trimmed line.

use log::debug;

/// Minimum length for a plausible tab line
pub const MIN_TAB_LINE_LEN: usize = 10;

/// A line with this many ASCII letters or more is treated as prose
pub const MAX_TAB_LINE_LETTERS: usize = 5;

/// Groups smaller than this never form a stave
pub const MIN_GROUP_LINES: usize = 3;

/// A pending group of this many lines closes immediately (a standard
/// six-string guitar stave); smaller and larger staves close at blank
/// lines, non-tab lines, or end of input
pub const COMPLETE_GROUP_LINES: usize = 6;

/// Conventional string-name label characters for the first column
const STRING_LABELS: &[char] = &['e', 'B', 'G', 'D', 'A', 'E', 'b', 'g', 'd', 'a'];

/// One tablature stave: trimmed lines, top-to-bottom (thinnest string first)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringGroup {
    pub lines: Vec<String>,
}

impl StringGroup {
    /// Number of instrument strings this stave represents
    pub fn string_count(&self) -> usize {
        self.lines.len()
    }
}

/// Tab-line predicate over a trimmed line.
///
/// True iff the line starts with a string-label character, contains `|` or
/// `-`, is at least [`MIN_TAB_LINE_LEN`] characters long, and has fewer
/// than [`MAX_TAB_LINE_LETTERS`] ASCII letters in total.
pub fn is_tab_line(line: &str) -> bool {
    line.starts_with(STRING_LABELS)
        && (line.contains('|') || line.contains('-'))
        && line.chars().count() >= MIN_TAB_LINE_LEN
        && line.chars().filter(|c| c.is_ascii_alphabetic()).count() < MAX_TAB_LINE_LETTERS
}

/// Segment normalized tab text into string groups, top to bottom.
///
/// Groups flushed by a blank line may be shorter than [`MIN_GROUP_LINES`];
/// note extraction skips those, so they never contribute output.
pub fn segment(text: &str) -> Vec<StringGroup> {
    let mut groups = Vec::new();
    let mut pending: Vec<String> = Vec::new();

    for raw_line in text.split('\n') {
        let line = raw_line.trim();

        if line.is_empty() {
            if !pending.is_empty() {
                groups.push(StringGroup {
                    lines: std::mem::take(&mut pending),
                });
            }
            continue;
        }

        if is_tab_line(line) {
            pending.push(line.to_string());
            if pending.len() == COMPLETE_GROUP_LINES {
                groups.push(StringGroup {
                    lines: std::mem::take(&mut pending),
                });
            }
        } else if !pending.is_empty() && pending.len() < MIN_GROUP_LINES {
            // too short to be a real stave
            pending.clear();
        } else if pending.len() >= MIN_GROUP_LINES {
            groups.push(StringGroup {
                lines: std::mem::take(&mut pending),
            });
        }
    }

    if pending.len() >= MIN_GROUP_LINES {
        groups.push(StringGroup { lines: pending });
    }

    debug!("segmented {} string group(s)", groups.len());
    groups
}
