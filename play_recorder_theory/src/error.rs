// Error types for textual note input.

use thiserror::Error;

/// Errors produced when parsing a note such as `"F#5"` or `"Bb3"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    #[error("empty note string")]
    Empty,
    #[error("unknown note letter '{0}'")]
    UnknownLetter(char),
    #[error("missing octave in '{0}'")]
    MissingOctave(String),
    #[error("invalid octave '{octave}' in '{input}'")]
    InvalidOctave { input: String, octave: String },
}
