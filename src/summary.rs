//! # Summary Assembly
//!
//! This module contains the high-level entry point that assembles a full
//! renderable result from raw tab text: parsed notes when the parser finds
//! any, the difficulty-keyed fallback sequence when it does not, plus the
//! measure count, difficulty, and a provenance marker so the consumer can
//! tell real notes from substitutes.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::{count_measures, estimate_difficulty, Difficulty};
use crate::fallback::fallback_notes;
use crate::note::Note;
use crate::parser::parse;

/// Default tuning label attached to summaries
pub const STANDARD_TUNING: &str = "Standard";

/// Provenance of a summary's note sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteSource {
    Parsed,
    Fallback,
}

impl NoteSource {
    pub fn description(&self) -> &'static str {
        match self {
            NoteSource::Parsed => "Parsed from pasted tab text",
            NoteSource::Fallback => "Fallback rendering based on tab difficulty",
        }
    }
}

/// A renderable digest of one piece of raw tab text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSummary {
    pub tuning: String,
    pub notes: Vec<Note>,
    pub measures: usize,
    pub difficulty: Difficulty,
    pub source: NoteSource,
}

/// Build a [`TabSummary`] from raw tab text.
///
/// Never fails: when parsing yields nothing, the notes are the fallback
/// sequence for the text's estimated difficulty.
///
/// # Example
/// ```rust
/// use tabnote::{summarize, NoteSource};
///
/// let summary = summarize("not tablature at all");
/// assert_eq!(summary.source, NoteSource::Fallback);
/// assert!(!summary.notes.is_empty());
/// ```
pub fn summarize(tab_text: &str) -> TabSummary {
    let notes = parse(tab_text);
    let difficulty = estimate_difficulty(tab_text);
    let measures = count_measures(tab_text);

    let (notes, source) = if notes.is_empty() {
        info!("tab parsing yielded no notes, substituting {} fallback", difficulty);
        (fallback_notes(difficulty), NoteSource::Fallback)
    } else {
        debug!("parsed {} note(s) from tab", notes.len());
        (notes, NoteSource::Parsed)
    };

    TabSummary {
        tuning: STANDARD_TUNING.to_string(),
        notes,
        measures,
        difficulty,
        source,
    }
}
