// Shared music-theory types for PlayRecorder.
//
// Provides the notated-pitch vocabulary that the fingering engine
// (`play_recorder_fingering`) consumes: spelled notes with octaves and
// accidentals, and key-signature-aware scales that turn those spellings
// into absolute pitch values. No instrument knowledge lives here.
//
// Architecture:
// - `note.rs`: `NoteName`, `Accidental`, `Note` — spelling, transposition,
//   parsing and display
// - `scale.rs`: `Scale` — key signature, absolute pitch values, chromatic
//   distance between two notes
// - `error.rs`: `NoteParseError` for textual note input
//
// Pitch values are MIDI-style integers (C4 = 60) but are never clamped to
// 0..=127; the fingering engine relies on plain signed arithmetic.

pub mod error;
pub mod note;
pub mod scale;

pub use error::NoteParseError;
pub use note::{Accidental, Note, NoteName};
pub use scale::Scale;
