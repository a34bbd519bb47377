//! Difficulty-keyed substitute note sequences.
//!
//! When a parse yields nothing the renderer still needs something to draw;
//! these are the fixed patterns the application substitutes, keyed by the
//! estimated difficulty of the raw text.

use crate::analysis::Difficulty;
use crate::note::{Duration, Note, NotePosition};

/// The substitute sequence for a difficulty level.
///
/// Easy is a four-step open-position E pattern, medium a four-chord open
/// progression, hard an eight-step double-stop riff in eighth notes.
pub fn fallback_notes(difficulty: Difficulty) -> Vec<Note> {
    match difficulty {
        Difficulty::Easy => vec![
            Note::new(vec![NotePosition::new(6, 0)]),
            Note::new(vec![NotePosition::new(5, 2)]),
            Note::new(vec![NotePosition::new(4, 2)]),
            Note::new(vec![
                NotePosition::new(6, 0),
                NotePosition::new(5, 2),
                NotePosition::new(4, 2),
            ]),
        ],
        Difficulty::Medium => vec![
            Note::new(vec![
                NotePosition::new(1, 0),
                NotePosition::new(2, 1),
                NotePosition::new(3, 0),
                NotePosition::new(4, 2),
                NotePosition::new(5, 3),
                NotePosition::new(6, 0),
            ]),
            Note::new(vec![
                NotePosition::new(1, 3),
                NotePosition::new(2, 0),
                NotePosition::new(3, 0),
                NotePosition::new(4, 0),
                NotePosition::new(5, 2),
                NotePosition::new(6, 3),
            ]),
            Note::new(vec![
                NotePosition::new(1, 2),
                NotePosition::new(2, 0),
                NotePosition::new(3, 0),
                NotePosition::new(4, 0),
                NotePosition::new(5, 2),
                NotePosition::new(6, 2),
            ]),
            Note::new(vec![
                NotePosition::new(1, 0),
                NotePosition::new(2, 1),
                NotePosition::new(3, 2),
                NotePosition::new(4, 2),
                NotePosition::new(5, 0),
                NotePosition::new(6, 0),
            ]),
        ],
        Difficulty::Hard => {
            let riff = [
                vec![NotePosition::new(1, 7), NotePosition::new(2, 8)],
                vec![NotePosition::new(1, 5), NotePosition::new(2, 5)],
                vec![NotePosition::new(1, 5), NotePosition::new(2, 7)],
                vec![
                    NotePosition::new(1, 5),
                    NotePosition::new(2, 8),
                    NotePosition::new(3, 7),
                ],
            ];
            riff.iter()
                .cycle()
                .take(riff.len() * 2)
                .map(|positions| Note::with_duration(positions.clone(), Duration::Eighth))
                .collect()
        }
    }
}
