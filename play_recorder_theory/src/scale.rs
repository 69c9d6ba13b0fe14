// Key signatures and absolute pitch values.
//
// A `Scale` is the tonal context a note is read in. Only the key signature
// matters for pitch arithmetic: a note written without an accidental takes
// the sharp or flat the signature assigns to its letter, while explicit
// sharps, flats and naturals (`Accidental::Release`) override it.
//
// The signature is stored as a position on the circle of fifths: positive
// values count sharps (F C G D A E B), negative values count flats
// (B E A D G C F). The fingering engine only ever asks for the distance in
// semitones between two notes, so enharmonic spellings that sound the same
// always produce the same distance.

use serde::{Deserialize, Serialize};

use crate::note::{Accidental, Note, NoteName};

/// Order in which sharps enter a key signature.
const SHARP_ORDER: [NoteName; 7] = [
    NoteName::F,
    NoteName::C,
    NoteName::G,
    NoteName::D,
    NoteName::A,
    NoteName::E,
    NoteName::B,
];

/// Order in which flats enter a key signature.
const FLAT_ORDER: [NoteName; 7] = [
    NoteName::B,
    NoteName::E,
    NoteName::A,
    NoteName::D,
    NoteName::G,
    NoteName::C,
    NoteName::F,
];

/// Tonal context: a key signature between seven flats and seven sharps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "RawScale")]
pub struct Scale {
    /// Sharps (positive) or flats (negative) in the signature.
    fifths: i8,
}

/// Serialized form of `Scale`, clamped on the way in.
#[derive(Deserialize)]
struct RawScale {
    #[serde(default)]
    fifths: i8,
}

impl From<RawScale> for Scale {
    fn from(raw: RawScale) -> Self {
        Scale::new(raw.fifths)
    }
}

impl Scale {
    /// Build from a circle-of-fifths position, clamped to -7..=7.
    pub fn new(fifths: i8) -> Self {
        Scale {
            fifths: fifths.clamp(-7, 7),
        }
    }

    /// C major / A minor: no sharps or flats.
    pub fn c_major() -> Self {
        Scale::new(0)
    }

    pub fn with_sharps(count: u8) -> Self {
        Scale::new(count.min(7) as i8)
    }

    pub fn with_flats(count: u8) -> Self {
        Scale::new(-(count.min(7) as i8))
    }

    /// The major key on the given tonic, if it is one of the fifteen keys
    /// that can be written with a conventional signature.
    pub fn major(tonic: NoteName, accidental: Accidental) -> Option<Self> {
        let fifths = match (tonic, accidental.explicit_offset().unwrap_or(0)) {
            (NoteName::C, 0) => 0,
            (NoteName::G, 0) => 1,
            (NoteName::D, 0) => 2,
            (NoteName::A, 0) => 3,
            (NoteName::E, 0) => 4,
            (NoteName::B, 0) => 5,
            (NoteName::F, 1) => 6,
            (NoteName::C, 1) => 7,
            (NoteName::F, 0) => -1,
            (NoteName::B, -1) => -2,
            (NoteName::E, -1) => -3,
            (NoteName::A, -1) => -4,
            (NoteName::D, -1) => -5,
            (NoteName::G, -1) => -6,
            (NoteName::C, -1) => -7,
            _ => return None,
        };
        Some(Scale::new(fifths))
    }

    /// Signed circle-of-fifths position.
    pub fn fifths(&self) -> i8 {
        self.fifths
    }

    /// Accidental the key signature places on a letter.
    pub fn signature_accidental(&self, name: NoteName) -> Accidental {
        let count = self.fifths.unsigned_abs() as usize;
        if self.fifths > 0 && SHARP_ORDER.iter().take(count).any(|&n| n == name) {
            Accidental::Sharp
        } else if self.fifths < 0 && FLAT_ORDER.iter().take(count).any(|&n| n == name) {
            Accidental::Flat
        } else {
            Accidental::Release
        }
    }

    /// The accidental that actually applies to a note in this key.
    pub fn effective_accidental(&self, note: &Note) -> Accidental {
        match note.accidental {
            Accidental::None => self.signature_accidental(note.name),
            explicit => explicit,
        }
    }

    /// Absolute pitch value of a note read in this key (C4 = 60).
    pub fn note_absolute_value(&self, note: &Note) -> i32 {
        let resolved = Note {
            accidental: self.effective_accidental(note),
            ..*note
        };
        resolved.value_in_c()
    }

    /// Shift a note by semitones, reading it in this key first.
    ///
    /// Unlike `Note::transpose`, a bare note takes the key signature's
    /// accidental before a non-octave shift: F in G major up one semitone
    /// is G, not F#.
    pub fn transpose(&self, note: &Note, semitones: i32) -> Note {
        if semitones % 12 == 0 {
            return note.transpose(semitones);
        }
        Note::from_value_sharp(self.note_absolute_value(note) + semitones)
    }

    /// Semitones from `reference` up to `note` (negative when `note` is
    /// lower).
    pub fn chromatic_distance(&self, note: &Note, reference: &Note) -> i32 {
        self.note_absolute_value(note) - self.note_absolute_value(reference)
    }
}
