//! # Raw-Text Analyses
//!
//! Two coarse heuristics over the raw (unsegmented) tab text: difficulty
//! estimation and measure counting. Both are presence checks on the text
//! itself, deliberately reproduced with the same crude matching as the
//! application they came from: a technique symbol counts even when it is
//! not attached to an actual played note, and the measure count inspects a
//! single representative line. They are not music-theoretic models and must
//! stay bug-compatible for rendering consistency.
//!
//! ## Entry Points
//! - [`estimate_difficulty`] - easy/medium/hard from three pattern checks
//! - [`count_measures`] - bar count of the first labeled line

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Technique symbols anywhere in the text (case-insensitive)
static COMPLEX_TECHNIQUES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)[bp^h/\\~]").unwrap());

/// `digit(s)/digit(s)` chord shorthand anywhere in the text
static POWER_CHORDS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{1,2}/[0-9]{1,2}").unwrap());

/// Any two-digit fret from 10 to 24
static HIGH_FRETS: Lazy<Regex> = Lazy::new(|| Regex::new(r"1[0-9]|2[0-4]").unwrap());

/// A string-label character immediately followed by `|` or `:`
static MEASURE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[eEBGADa][|:]").unwrap());

/// Estimated playing difficulty of a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Estimate the difficulty of a tab from its raw text.
///
/// Policy: `Hard` iff the text has complex-technique symbols AND high
/// frets; else `Medium` iff it has power-chord shorthand OR high frets;
/// else `Easy`. Empty input is `Easy`.
///
/// # Example
/// ```rust
/// use tabnote::{estimate_difficulty, Difficulty};
///
/// assert_eq!(estimate_difficulty("e|-14h16-|"), Difficulty::Hard);
/// assert_eq!(estimate_difficulty(""), Difficulty::Easy);
/// ```
pub fn estimate_difficulty(tab_text: &str) -> Difficulty {
    if tab_text.is_empty() {
        return Difficulty::Easy;
    }

    let has_complex_techniques = COMPLEX_TECHNIQUES.is_match(tab_text);
    let has_power_chords = POWER_CHORDS.is_match(tab_text);
    let has_high_frets = HIGH_FRETS.is_match(tab_text);

    if has_complex_techniques && has_high_frets {
        Difficulty::Hard
    } else if has_power_chords || has_high_frets {
        Difficulty::Medium
    } else {
        Difficulty::Easy
    }
}

/// Count the measures in a tab.
///
/// Finds the first line whose trimmed form starts with a string label
/// followed by `|` or `:`, counts that line's `|` characters and returns
/// `max(1, bars - 1)`. Returns `1` when no line matches. This assumes
/// uniform bar placement across a stave's lines, so one representative
/// line is enough.
pub fn count_measures(tab_text: &str) -> usize {
    match tab_text.lines().find(|l| MEASURE_LINE.is_match(l.trim())) {
        Some(line) => {
            let bars = line.matches('|').count();
            bars.saturating_sub(1).max(1)
        }
        None => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_easy() {
        assert_eq!(estimate_difficulty(""), Difficulty::Easy);
    }

    #[test]
    fn test_plain_low_frets_are_easy() {
        assert_eq!(estimate_difficulty("3-5-7"), Difficulty::Easy);
    }

    #[test]
    fn test_high_frets_alone_are_medium() {
        assert_eq!(estimate_difficulty("12-14-12"), Difficulty::Medium);
    }

    #[test]
    fn test_power_chord_shorthand_is_medium() {
        // '/' also counts as a technique symbol, but without high frets the
        // power-chord branch decides
        assert_eq!(estimate_difficulty("5/7"), Difficulty::Medium);
    }

    #[test]
    fn test_technique_plus_high_fret_is_hard() {
        assert_eq!(estimate_difficulty("14h16"), Difficulty::Hard);
    }

    #[test]
    fn test_technique_without_high_fret_is_not_hard() {
        assert_eq!(estimate_difficulty("5h7"), Difficulty::Easy);
    }

    #[test]
    fn test_fret_25_is_not_high() {
        assert_eq!(estimate_difficulty("25"), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Hard.to_string(), "hard");
        assert_eq!(Difficulty::default(), Difficulty::Easy);
    }

    #[test]
    fn test_three_bars_count_two_measures() {
        assert_eq!(count_measures("e|----|----|"), 2);
    }

    #[test]
    fn test_four_bars_count_three_measures() {
        assert_eq!(count_measures("e|---|---|---|"), 3);
    }

    #[test]
    fn test_single_bar_clamps_to_one() {
        assert_eq!(count_measures("e|--------"), 1);
    }

    #[test]
    fn test_no_labeled_line_counts_one() {
        assert_eq!(count_measures(""), 1);
        assert_eq!(count_measures("just some text\nwith no tab"), 1);
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Intro riff\ne|--|--|--|--|\nB|--|--|\n";
        assert_eq!(count_measures(text), 4);
    }

    #[test]
    fn test_lowercase_b_label_is_not_a_measure_line() {
        // the label class is [eEBGADa]: lowercase b, g, d never match
        assert_eq!(count_measures("b|---|---|---|"), 1);
    }

    #[test]
    fn test_colon_after_label_matches() {
        assert_eq!(count_measures("E:--|--|--|"), 2);
    }
}
