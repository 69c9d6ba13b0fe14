// Playable range and score transposition for each recorder size.
//
// Recorders are notated away from their sounding pitch: the soprano and
// sopranino are written an octave below what they sound, and the bass an
// octave above. The score offset is `written - real` in semitones, so
//
//   real = apparent - score_offset
//
// The lowest and highest notes are concert pitches with explicit naturals,
// so they read the same in every key.

use serde::{Deserialize, Serialize};

use play_recorder_theory::{Note, NoteName, Scale};

use crate::category::InstrumentSize;

/// Concert range and notation offset of one recorder size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeProfile {
    pub lowest_real: Note,
    pub highest_real: Note,
    /// Written minus sounding pitch, in semitones.
    pub score_offset: i32,
}

impl RangeProfile {
    pub fn for_size(size: InstrumentSize) -> Self {
        let (lowest, highest, score_offset) = match size {
            InstrumentSize::Sopranino => ((NoteName::F, 5), (NoteName::C, 7), -12),
            InstrumentSize::Soprano => ((NoteName::C, 5), (NoteName::G, 7), -12),
            InstrumentSize::Alto => ((NoteName::F, 4), (NoteName::C, 6), 0),
            InstrumentSize::Tenor => ((NoteName::C, 4), (NoteName::G, 6), 0),
            InstrumentSize::Bass => ((NoteName::F, 3), (NoteName::C, 5), 12),
        };
        RangeProfile {
            lowest_real: Note::natural(lowest.0, lowest.1),
            highest_real: Note::natural(highest.0, highest.1),
            score_offset,
        }
    }

    /// Sounding pitch of a written note.
    pub fn apparent_to_real(&self, apparent: &Note) -> Note {
        apparent.transpose(-self.score_offset)
    }

    /// Written pitch of a sounding note.
    pub fn real_to_apparent(&self, real: &Note) -> Note {
        real.transpose(self.score_offset)
    }

    pub fn lowest_apparent(&self) -> Note {
        self.real_to_apparent(&self.lowest_real)
    }

    pub fn highest_apparent(&self) -> Note {
        self.real_to_apparent(&self.highest_real)
    }

    /// Number of semitones from the lowest to the highest note.
    pub fn span(&self) -> i32 {
        Scale::c_major().chromatic_distance(&self.highest_real, &self.lowest_real)
    }

    /// Whether a sounding note lies inside the range, read in `scale`.
    pub fn contains_real(&self, scale: &Scale, real: &Note) -> bool {
        let offset = scale.chromatic_distance(real, &self.lowest_real);
        (0..=self.span()).contains(&offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use play_recorder_theory::Accidental;

    #[test]
    fn test_score_offsets() {
        let offset = |size| RangeProfile::for_size(size).score_offset;
        assert_eq!(offset(InstrumentSize::Sopranino), -12);
        assert_eq!(offset(InstrumentSize::Soprano), -12);
        assert_eq!(offset(InstrumentSize::Alto), 0);
        assert_eq!(offset(InstrumentSize::Tenor), 0);
        assert_eq!(offset(InstrumentSize::Bass), 12);
    }

    #[test]
    fn test_spans() {
        assert_eq!(RangeProfile::for_size(InstrumentSize::Soprano).span(), 31);
        assert_eq!(RangeProfile::for_size(InstrumentSize::Tenor).span(), 31);
        assert_eq!(RangeProfile::for_size(InstrumentSize::Alto).span(), 19);
        assert_eq!(RangeProfile::for_size(InstrumentSize::Sopranino).span(), 19);
        assert_eq!(RangeProfile::for_size(InstrumentSize::Bass).span(), 19);
    }

    #[test]
    fn test_soprano_written_an_octave_low() {
        let soprano = RangeProfile::for_size(InstrumentSize::Soprano);
        let written_c4 = Note::new(NoteName::C, 4, Accidental::None);
        let real = soprano.apparent_to_real(&written_c4);
        assert_eq!(real, Note::new(NoteName::C, 5, Accidental::None));
        assert_eq!(soprano.real_to_apparent(&real), written_c4);
        assert_eq!(soprano.lowest_apparent(), Note::natural(NoteName::C, 4));
        assert_eq!(soprano.highest_apparent(), Note::natural(NoteName::G, 6));
    }

    #[test]
    fn test_bass_written_an_octave_high() {
        let bass = RangeProfile::for_size(InstrumentSize::Bass);
        assert_eq!(bass.lowest_apparent(), Note::natural(NoteName::F, 4));
        let real = bass.apparent_to_real(&Note::natural(NoteName::A, 4));
        assert_eq!(real, Note::natural(NoteName::A, 3));
    }

    #[test]
    fn test_contains_real() {
        let alto = RangeProfile::for_size(InstrumentSize::Alto);
        let scale = Scale::c_major();
        assert!(alto.contains_real(&scale, &Note::natural(NoteName::F, 4)));
        assert!(alto.contains_real(&scale, &Note::natural(NoteName::C, 6)));
        assert!(!alto.contains_real(&scale, &Note::natural(NoteName::E, 4)));
        let c_sharp6 = Note::new(NoteName::C, 6, Accidental::Sharp);
        assert!(!alto.contains_real(&scale, &c_sharp6));
        // Bare E4 is Eb in B-flat major, still below the alto's F4.
        let bare_e4 = Note::new(NoteName::E, 4, Accidental::None);
        assert!(!alto.contains_real(&Scale::with_flats(2), &bare_e4));
    }
}
