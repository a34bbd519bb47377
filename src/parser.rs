//! # Tab Notation Parser
//!
//! Converts raw ASCII tablature text into an ordered, deduplicated,
//! capped sequence of [`Note`]s.
//!
//! ## Pipeline
//! 1. Normalize line endings and trim the whole text
//! 2. Segment into string groups (see `segment`)
//! 3. Per group, scan columns left to right extracting fret numbers with
//!    optional technique suffixes; positions sharing a column combine into
//!    one simultaneous note
//! 4. Consolidate: drop notes whose `(string, fret)` multiset was already
//!    seen, keeping first occurrences, and cap at [`MAX_RENDERED_NOTES`]
//!
//! ## Contract
//! `parse` is a pure function and never fails: malformed or empty input
//! degrades to fewer notes or an empty vector, never an error. Substituting
//! placeholder notes for an empty result is the caller's concern (see
//! `summary`).
//!
//! ## Known Limitations
//! Simultaneity is detected by exact character-column alignment across a
//! stave's lines, so hand-formatted text with inconsistent spacing can
//! split a chord into separate notes. True intent for misaligned input is
//! ambiguous, so no realignment is attempted. Duration is a fixed
//! quarter-note placeholder; rhythm is never inferred from spacing.

use std::collections::HashSet;

use log::{debug, warn};

use crate::note::{Note, NotePosition, Technique};
use crate::segment::{segment, StringGroup, MIN_GROUP_LINES};

/// Upper bound on the notes handed to the renderer. A rendering-load
/// guard, not a musical constraint; truncation drops trailing notes.
pub const MAX_RENDERED_NOTES: usize = 32;

/// Parse raw tab notation text into structured notes.
///
/// This is the main entry point for the library.
///
/// # Example
/// ```rust
/// use tabnote::parse;
///
/// let tab = "\
/// e|-3--------|
/// B|----------|
/// G|----------|
/// D|----------|
/// A|----------|
/// E|----------|";
/// let notes = parse(tab);
/// assert_eq!(notes.len(), 1);
/// assert_eq!(notes[0].positions[0].string, 6);
/// assert_eq!(notes[0].positions[0].fret, 3);
/// ```
pub fn parse(tab_text: &str) -> Vec<Note> {
    if tab_text.is_empty() {
        return Vec::new();
    }

    let cleaned = normalize(tab_text);
    let groups = segment(&cleaned);

    if groups.is_empty() {
        warn!("no valid tab string groups found");
        return Vec::new();
    }

    let mut all_notes = Vec::new();
    for group in &groups {
        all_notes.extend(extract_notes(group));
    }
    debug!("extracted {} note(s) before consolidation", all_notes.len());

    consolidate(all_notes)
}

/// Collapse line-ending variants to `\n` and trim the whole text. No other
/// character transformation is applied.
fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}

/// Extract notes from one stave, in ascending column order.
///
/// First pass is implicit: a column starts a fret number iff it holds a
/// digit not preceded by a digit on the same line. The scan then consumes
/// the full digit run, checks the next character for a technique symbol,
/// and maps line index `i` to `string = string_count - i` (top line of the
/// stave is the highest string number).
fn extract_notes(group: &StringGroup) -> Vec<Note> {
    let string_count = group.string_count();
    if string_count < MIN_GROUP_LINES {
        return Vec::new();
    }

    let lines: Vec<Vec<char>> = group.lines.iter().map(|l| l.chars().collect()).collect();
    let width = lines.iter().map(|l| l.len()).max().unwrap_or(0);

    let mut notes = Vec::new();
    for col in 0..width {
        let mut positions = Vec::new();

        for (line_idx, line) in lines.iter().enumerate() {
            if col >= line.len() || !line[col].is_ascii_digit() {
                continue;
            }
            // continuation digits of a multi-digit fret were already consumed
            if col > 0 && line[col - 1].is_ascii_digit() {
                continue;
            }

            let mut fret: u32 = 0;
            let mut end = col;
            while let Some(digit) = line.get(end).and_then(|c| c.to_digit(10)) {
                fret = fret.saturating_mul(10).saturating_add(digit);
                end += 1;
            }

            let technique = line.get(end).copied().and_then(Technique::from_char);
            let string = (string_count - line_idx) as u8;
            positions.push(NotePosition {
                string,
                fret,
                technique,
            });
        }

        if !positions.is_empty() {
            notes.push(Note::new(positions));
        }
    }

    notes
}

/// Drop notes whose canonical key was already seen (first occurrence wins,
/// preserving temporal order) and truncate to [`MAX_RENDERED_NOTES`].
fn consolidate(notes: Vec<Note>) -> Vec<Note> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for note in notes {
        if seen.insert(note.canonical_key()) {
            unique.push(note);
        }
    }

    unique.truncate(MAX_RENDERED_NOTES);
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::Duration;

    const SINGLE_NOTE_STAVE: &str = "\
e|-3--------|
B|----------|
G|----------|
D|----------|
A|----------|
E|----------|";

    #[test]
    fn test_empty_input_yields_no_notes() {
        assert!(parse("").is_empty());
        assert!(parse("   \n  \n ").is_empty());
    }

    #[test]
    fn test_prose_only_input_yields_no_notes() {
        assert!(parse("Nothing here looks like guitar tablature at all.").is_empty());
    }

    #[test]
    fn test_top_line_of_six_maps_to_string_six() {
        let notes = parse(SINGLE_NOTE_STAVE);
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].positions,
            vec![NotePosition::new(6, 3)]
        );
        assert_eq!(notes[0].duration, Duration::Quarter);
    }

    #[test]
    fn test_bottom_line_of_six_maps_to_string_one() {
        let tab = "\
e|----------|
B|----------|
G|----------|
D|----------|
A|----------|
E|-5--------|";
        let notes = parse(tab);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].positions, vec![NotePosition::new(1, 5)]);
    }

    #[test]
    fn test_multi_digit_fret_is_one_position() {
        let tab = "\
e|-12-------|
B|----------|
G|----------|
D|----------|
A|----------|
E|----------|";
        let notes = parse(tab);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].positions, vec![NotePosition::new(6, 12)]);
    }

    #[test]
    fn test_technique_suffix_is_attached() {
        let tab = "\
e|-5h7------|
B|----------|
G|----------|
D|----------|
A|----------|
E|----------|";
        let notes = parse(tab);
        assert_eq!(notes.len(), 2);
        assert_eq!(notes[0].positions[0].fret, 5);
        assert_eq!(notes[0].positions[0].technique, Some(Technique::HammerOn));
        assert_eq!(notes[1].positions[0].fret, 7);
        assert_eq!(notes[1].positions[0].technique, None);
    }

    #[test]
    fn test_technique_without_digit_is_ignored() {
        let tab = "\
e|--h-------|
B|----------|
G|----------|
D|----------|
A|----------|
E|----------|";
        assert!(parse(tab).is_empty());
    }

    #[test]
    fn test_same_column_positions_combine_into_one_note() {
        let tab = "\
e|-0--------|
B|-1--------|
G|-0--------|
D|----------|
A|----------|
E|----------|";
        let notes = parse(tab);
        assert_eq!(notes.len(), 1);
        assert_eq!(
            notes[0].positions,
            vec![
                NotePosition::new(6, 0),
                NotePosition::new(5, 1),
                NotePosition::new(4, 0),
            ]
        );
    }

    #[test]
    fn test_repeated_stave_dedupes() {
        let repeated = format!("{}\n{}\n{}", SINGLE_NOTE_STAVE, SINGLE_NOTE_STAVE, SINGLE_NOTE_STAVE);
        assert_eq!(parse(&repeated), parse(SINGLE_NOTE_STAVE));
    }

    #[test]
    fn test_output_capped_at_max_rendered_notes() {
        // one top line with 40 distinct frets, padded with two filler lines
        let mut top = String::from("e|");
        for fret in 0..40 {
            top.push('-');
            top.push_str(&fret.to_string());
        }
        top.push_str("-|");
        let filler = "-".repeat(top.chars().count() - 1);
        let tab = format!("{}\nB|{}\nG|{}", top, filler, filler);

        let notes = parse(&tab);
        assert_eq!(notes.len(), MAX_RENDERED_NOTES);
        assert_eq!(notes[0].positions[0].fret, 0);
        assert_eq!(notes[MAX_RENDERED_NOTES - 1].positions[0].fret, 31);
    }

    #[test]
    fn test_groups_shorter_than_three_lines_contribute_nothing() {
        let tab = "e|-3--------|\nB|-3--------|\n\nsome text";
        assert!(parse(tab).is_empty());
    }

    #[test]
    fn test_windows_line_endings_are_normalized() {
        let tab = SINGLE_NOTE_STAVE.replace('\n', "\r\n");
        assert_eq!(parse(&tab), parse(SINGLE_NOTE_STAVE));
    }

    #[test]
    fn test_parse_is_idempotent_across_calls() {
        assert_eq!(parse(SINGLE_NOTE_STAVE), parse(SINGLE_NOTE_STAVE));
    }
}
