//! Renderer-facing serialization of parse results.
//!
//! The notation renderer consumes JSON note objects; YAML output exists for
//! the CLI and for fixtures. Both are plain serde encodings of the model
//! types, whose field names and codes already match the renderer's wire
//! shape (see `note`).

use crate::error::TabError;
use crate::note::Note;
use crate::summary::TabSummary;

/// Encode a summary as pretty-printed JSON
pub fn to_json(summary: &TabSummary) -> Result<String, TabError> {
    Ok(serde_json::to_string_pretty(summary)?)
}

/// Encode a summary as YAML
pub fn to_yaml(summary: &TabSummary) -> Result<String, TabError> {
    Ok(serde_yaml::to_string(summary)?)
}

/// Encode a bare note list as pretty-printed JSON
pub fn notes_to_json(notes: &[Note]) -> Result<String, TabError> {
    Ok(serde_json::to_string_pretty(notes)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::summary::summarize;

    const STAVE: &str = "\
e|-3--------|
B|----------|
G|----------|
D|----------|
A|----------|
E|----------|";

    #[test]
    fn test_json_summary_uses_renderer_shape() {
        let json = to_json(&summarize(STAVE)).unwrap();
        assert!(json.contains("\"str\": 6"));
        assert!(json.contains("\"fret\": 3"));
        assert!(json.contains("\"duration\": \"q\""));
        assert!(json.contains("\"source\": \"parsed\""));
    }

    #[test]
    fn test_yaml_summary_includes_difficulty() {
        let yaml = to_yaml(&summarize(STAVE)).unwrap();
        assert!(yaml.contains("difficulty: easy"));
        assert!(yaml.contains("tuning: Standard"));
    }

    #[test]
    fn test_bare_notes_encode_as_json_array() {
        let json = notes_to_json(&parse(STAVE)).unwrap();
        assert!(json.trim_start().starts_with('['));
        assert!(json.contains("\"technique\": null"));
    }

    #[test]
    fn test_json_round_trips() {
        let summary = summarize(STAVE);
        let json = to_json(&summary).unwrap();
        let back: TabSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }
}
