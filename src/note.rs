//! # Note Model Types
//!
//! This module defines the structured note events produced by the tab parser.
//!
//! ## Type Hierarchy
//! ```text
//! Note
//!   ├── positions: Vec<NotePosition> (struck simultaneously)
//!   │     ├── string: u8 (1-indexed, 1 = thinnest string)
//!   │     ├── fret: u32
//!   │     └── technique: Option<Technique>
//!   └── duration: Duration (fixed Quarter for parsed notes)
//! ```
//!
//! ## Serialized Shape
//! The rendering collaborator consumes these types as JSON/YAML. The wire
//! shape matches what the notation renderer expects: `string` serializes as
//! `str`, durations as renderer codes (`q`, `8`, ...), techniques as their
//! tab symbol (`h`, `p`, `b`, `/`, `\`, `~`, `^`).
//!
//! ## Related Modules
//! - `parser` - Creates these types from raw tab text
//! - `fallback` - Builds the difficulty-keyed substitute sequences
//! - `export` - Serializes them for the renderer

use serde::{Deserialize, Serialize};

/// Note duration, serialized as the renderer's duration code.
///
/// Parsed notes always carry the `Quarter` default: rhythm is not inferred
/// from inter-column spacing. The other variants exist for the fallback
/// sequences (the hard riff is written in eighth notes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Duration {
    #[serde(rename = "w")]
    Whole,
    #[serde(rename = "h")]
    Half,
    #[default]
    #[serde(rename = "q")]
    Quarter,
    #[serde(rename = "8")]
    Eighth,
    #[serde(rename = "16")]
    Sixteenth,
}

impl Duration {
    /// Renderer duration code
    pub fn code(&self) -> &'static str {
        match self {
            Duration::Whole => "w",
            Duration::Half => "h",
            Duration::Quarter => "q",
            Duration::Eighth => "8",
            Duration::Sixteenth => "16",
        }
    }
}

/// Technique annotation attached to a fret number, serialized as its symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Technique {
    #[serde(rename = "h")]
    HammerOn, // h
    #[serde(rename = "p")]
    PullOff, // p
    #[serde(rename = "b")]
    Bend, // b
    #[serde(rename = "/")]
    SlideUp, // /
    #[serde(rename = "\\")]
    SlideDown, // \
    #[serde(rename = "~")]
    Vibrato, // ~
    #[serde(rename = "^")]
    BendUp, // ^
}

impl Technique {
    /// Parse a technique symbol (case-insensitive). Returns `None` for any
    /// character that is not a technique annotation.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'h' => Some(Technique::HammerOn),
            'p' => Some(Technique::PullOff),
            'b' => Some(Technique::Bend),
            '/' => Some(Technique::SlideUp),
            '\\' => Some(Technique::SlideDown),
            '~' => Some(Technique::Vibrato),
            '^' => Some(Technique::BendUp),
            _ => None,
        }
    }

    /// The tab symbol for this technique
    pub fn symbol(&self) -> char {
        match self {
            Technique::HammerOn => 'h',
            Technique::PullOff => 'p',
            Technique::Bend => 'b',
            Technique::SlideUp => '/',
            Technique::SlideDown => '\\',
            Technique::Vibrato => '~',
            Technique::BendUp => '^',
        }
    }
}

/// A single fretted (or open) position on one string.
///
/// `string` is 1-indexed in the renderer's numbering: a position on line
/// index `i` (0 = top line) of an `S`-line stave gets `string = S - i`,
/// so the top line of a standard six-line stave maps to string 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotePosition {
    #[serde(rename = "str")]
    pub string: u8,
    pub fret: u32,
    pub technique: Option<Technique>,
}

impl NotePosition {
    /// A position with no technique annotation
    pub fn new(string: u8, fret: u32) -> Self {
        Self {
            string,
            fret,
            technique: None,
        }
    }
}

/// All positions struck at one text column, plus a nominal duration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub positions: Vec<NotePosition>,
    pub duration: Duration,
}

impl Note {
    /// A note with the fixed quarter-note default duration
    pub fn new(positions: Vec<NotePosition>) -> Self {
        Self {
            positions,
            duration: Duration::default(),
        }
    }

    /// A note with an explicit duration (used by the fallback sequences)
    pub fn with_duration(positions: Vec<NotePosition>, duration: Duration) -> Self {
        Self {
            positions,
            duration,
        }
    }

    /// Order-independent identity over the `(string, fret)` pairs.
    ///
    /// Two notes with the same multiset of positions get the same key even
    /// if the positions were recorded in a different line order. Technique
    /// and duration are deliberately excluded.
    pub fn canonical_key(&self) -> String {
        let mut parts: Vec<String> = self
            .positions
            .iter()
            .map(|p| format!("{},{}", p.string, p.fret))
            .collect();
        parts.sort();
        parts.join("|")
    }
}
