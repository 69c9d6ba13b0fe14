// Spelled notes: letter name, octave and accidental.
//
// A `Note` is what a score shows, not a frequency. The same sounding pitch
// can be spelled several ways (F#5, Gb5, or plain F5 under a G major key
// signature), and a note with `Accidental::None` only has a definite pitch
// once a `Scale` supplies the key signature — see `scale.rs`.
//
// Octaves use scientific numbering: C4 is middle C (MIDI 60), and each
// octave starts at C. Transposition by whole octaves keeps the spelling;
// any other shift respells the result with explicit sharps and naturals so
// the transposed note no longer depends on a key signature.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NoteParseError;

/// The seven diatonic letter names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum NoteName {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 7] = [
        NoteName::C,
        NoteName::D,
        NoteName::E,
        NoteName::F,
        NoteName::G,
        NoteName::A,
        NoteName::B,
    ];

    /// Semitones above C for the natural form of this letter.
    pub fn semitone(self) -> i32 {
        match self {
            NoteName::C => 0,
            NoteName::D => 2,
            NoteName::E => 4,
            NoteName::F => 5,
            NoteName::G => 7,
            NoteName::A => 9,
            NoteName::B => 11,
        }
    }

    pub fn letter(self) -> char {
        match self {
            NoteName::C => 'C',
            NoteName::D => 'D',
            NoteName::E => 'E',
            NoteName::F => 'F',
            NoteName::G => 'G',
            NoteName::A => 'A',
            NoteName::B => 'B',
        }
    }

    /// Case-insensitive letter lookup.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(NoteName::C),
            'D' => Some(NoteName::D),
            'E' => Some(NoteName::E),
            'F' => Some(NoteName::F),
            'G' => Some(NoteName::G),
            'A' => Some(NoteName::A),
            'B' => Some(NoteName::B),
            _ => None,
        }
    }
}

/// Accidental written in front of a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accidental {
    /// No sign: the key signature decides.
    #[default]
    None,
    Sharp,
    Flat,
    /// Explicit natural sign, cancelling the key signature.
    Release,
}

impl Accidental {
    /// Semitone adjustment, or `None` when the key signature must decide.
    pub fn explicit_offset(self) -> Option<i32> {
        match self {
            Accidental::None => None,
            Accidental::Sharp => Some(1),
            Accidental::Flat => Some(-1),
            Accidental::Release => Some(0),
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Accidental::None => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
            Accidental::Release => "n",
        }
    }
}

/// A notated pitch: letter, octave and accidental.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Note {
    pub name: NoteName,
    /// Scientific octave number (C4 = middle C).
    pub octave: i8,
    pub accidental: Accidental,
}

impl Note {
    pub fn new(name: NoteName, octave: i8, accidental: Accidental) -> Self {
        Note {
            name,
            octave,
            accidental,
        }
    }

    /// A note with an explicit natural sign, independent of any key.
    pub fn natural(name: NoteName, octave: i8) -> Self {
        Note::new(name, octave, Accidental::Release)
    }

    /// Spell an absolute pitch value using sharps for the black keys and
    /// explicit naturals for the white keys.
    pub fn from_value_sharp(value: i32) -> Self {
        const SPELLING: [(NoteName, Accidental); 12] = [
            (NoteName::C, Accidental::Release),
            (NoteName::C, Accidental::Sharp),
            (NoteName::D, Accidental::Release),
            (NoteName::D, Accidental::Sharp),
            (NoteName::E, Accidental::Release),
            (NoteName::F, Accidental::Release),
            (NoteName::F, Accidental::Sharp),
            (NoteName::G, Accidental::Release),
            (NoteName::G, Accidental::Sharp),
            (NoteName::A, Accidental::Release),
            (NoteName::A, Accidental::Sharp),
            (NoteName::B, Accidental::Release),
        ];
        let (name, accidental) = SPELLING[value.rem_euclid(12) as usize];
        Note::new(name, clamp_octave(value.div_euclid(12) - 1), accidental)
    }

    /// Absolute pitch value read without a key signature: a note with no
    /// accidental counts as natural. C4 = 60.
    pub fn value_in_c(&self) -> i32 {
        (self.octave as i32 + 1) * 12
            + self.name.semitone()
            + self.accidental.explicit_offset().unwrap_or(0)
    }

    /// Shift by a signed number of semitones.
    ///
    /// Without a key, a non-octave shift reads `Accidental::None` as
    /// natural: bare F up one semitone is F#, even under a key signature
    /// that already sharpens F. Use `Scale::transpose` when the key matters.
    pub fn transpose(&self, semitones: i32) -> Note {
        if semitones % 12 == 0 {
            return Note {
                octave: clamp_octave(self.octave as i32 + semitones / 12),
                ..*self
            };
        }
        Note::from_value_sharp(self.value_in_c() + semitones)
    }
}

fn clamp_octave(octave: i32) -> i8 {
    octave.clamp(i8::MIN as i32, i8::MAX as i32) as i8
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.name.letter(),
            self.accidental.suffix(),
            self.octave
        )
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Parses `C5`, `F#4`, `Fs4`, `Bb3`, `Fn5` (explicit natural), `C-1`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut chars = input.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;
        let name = NoteName::from_letter(letter).ok_or(NoteParseError::UnknownLetter(letter))?;

        let rest = chars.as_str();
        let (accidental, octave_str) = match rest.chars().next() {
            Some('#') | Some('s') => (Accidental::Sharp, &rest[1..]),
            Some('b') => (Accidental::Flat, &rest[1..]),
            Some('n') => (Accidental::Release, &rest[1..]),
            _ => (Accidental::None, rest),
        };

        if octave_str.is_empty() {
            return Err(NoteParseError::MissingOctave(input.to_string()));
        }
        let octave = octave_str
            .parse::<i8>()
            .map_err(|_| NoteParseError::InvalidOctave {
                input: input.to_string(),
                octave: octave_str.to_string(),
            })?;

        Ok(Note::new(name, octave, accidental))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_in_c() {
        assert_eq!(Note::natural(NoteName::C, 4).value_in_c(), 60);
        assert_eq!(Note::natural(NoteName::A, 4).value_in_c(), 69);
        assert_eq!(Note::new(NoteName::F, 5, Accidental::Sharp).value_in_c(), 78);
        assert_eq!(Note::new(NoteName::B, 3, Accidental::Flat).value_in_c(), 58);
        // No accidental reads as natural without a key.
        assert_eq!(Note::new(NoteName::G, 3, Accidental::None).value_in_c(), 55);
        assert_eq!(Note::natural(NoteName::C, -1).value_in_c(), 0);
    }

    #[test]
    fn test_parse_notes() {
        assert_eq!(
            "C5".parse::<Note>(),
            Ok(Note::new(NoteName::C, 5, Accidental::None))
        );
        assert_eq!(
            "F#4".parse::<Note>(),
            Ok(Note::new(NoteName::F, 4, Accidental::Sharp))
        );
        assert_eq!(
            "fs4".parse::<Note>(),
            Ok(Note::new(NoteName::F, 4, Accidental::Sharp))
        );
        assert_eq!(
            "Bb3".parse::<Note>(),
            Ok(Note::new(NoteName::B, 3, Accidental::Flat))
        );
        assert_eq!(
            "Fn5".parse::<Note>(),
            Ok(Note::new(NoteName::F, 5, Accidental::Release))
        );
        assert_eq!(
            "C-1".parse::<Note>(),
            Ok(Note::new(NoteName::C, -1, Accidental::None))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Note>(), Err(NoteParseError::Empty));
        assert_eq!("H4".parse::<Note>(), Err(NoteParseError::UnknownLetter('H')));
        assert_eq!(
            "C#".parse::<Note>(),
            Err(NoteParseError::MissingOctave("C#".to_string()))
        );
        assert!(matches!(
            "Cx4".parse::<Note>(),
            Err(NoteParseError::InvalidOctave { .. })
        ));
    }

    #[test]
    fn test_display_parse_agree() {
        for text in ["C5", "F#4", "Bb3", "En6", "G-1"] {
            let note: Note = text.parse().unwrap();
            assert_eq!(note.to_string(), text);
        }
    }

    #[test]
    fn test_octave_transpose_keeps_spelling() {
        let gb = Note::new(NoteName::G, 4, Accidental::Flat);
        let up = gb.transpose(12);
        assert_eq!(up, Note::new(NoteName::G, 5, Accidental::Flat));
        assert_eq!(gb.transpose(-24).octave, 2);

        // A note without accidental stays key-dependent under octave shifts.
        let f = Note::new(NoteName::F, 5, Accidental::None);
        assert_eq!(f.transpose(-12).accidental, Accidental::None);
    }

    #[test]
    fn test_semitone_transpose_respells() {
        let c = Note::natural(NoteName::C, 4);
        assert_eq!(c.transpose(1), Note::new(NoteName::C, 4, Accidental::Sharp));
        assert_eq!(c.transpose(-1), Note::natural(NoteName::B, 3));
        assert_eq!(c.transpose(7), Note::natural(NoteName::G, 4));
        assert_eq!(c.transpose(-2).value_in_c(), 58);
    }

    #[test]
    fn test_from_value_sharp() {
        assert_eq!(Note::from_value_sharp(60), Note::natural(NoteName::C, 4));
        assert_eq!(
            Note::from_value_sharp(73),
            Note::new(NoteName::C, 5, Accidental::Sharp)
        );
        assert_eq!(Note::from_value_sharp(-1), Note::natural(NoteName::B, -2));
    }
}
