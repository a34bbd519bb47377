//! # tabnote
//!
//! A parser that turns pasted ASCII guitar tablature into structured notes
//! for rendering.
//!
//! Raw tab text (six-or-so-line string/fret diagrams copied from web
//! pages, often interleaved with prose and markup residue) is segmented
//! into staves, scanned column by column for fret numbers and technique
//! annotations, then deduplicated and capped into a renderable sequence.
//! Two auxiliary analyses run over the same raw text: difficulty
//! estimation and measure counting. When a parse yields nothing,
//! [`summarize`] substitutes a difficulty-keyed fallback sequence so the
//! renderer always has something to draw.
//!
//! ```rust
//! use tabnote::{parse, estimate_difficulty, count_measures};
//!
//! let tab = "\
//! e|--5h7-----|
//! B|----------|
//! G|----------|
//! D|----------|
//! A|----------|
//! E|-3--------|";
//!
//! let notes = parse(tab);
//! assert_eq!(notes.len(), 3);
//! let difficulty = estimate_difficulty(tab);
//! let measures = count_measures(tab);
//! # let _ = (difficulty, measures);
//! ```

pub mod analysis;
pub mod error;
pub mod export;
pub mod fallback;
pub mod note;
pub mod parser;
pub mod segment;
pub mod summary;

pub use analysis::{count_measures, estimate_difficulty, Difficulty};
pub use error::*;
pub use export::{notes_to_json, to_json, to_yaml};
pub use fallback::fallback_notes;
pub use note::*;
pub use parser::{parse, MAX_RENDERED_NOTES};
pub use segment::{is_tab_line, segment, StringGroup};
pub use summary::{summarize, NoteSource, TabSummary, STANDARD_TUNING};
