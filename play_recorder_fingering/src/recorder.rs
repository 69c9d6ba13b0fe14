// The recorder instrument and its grip resolver.
//
// A `Recorder` is built once for a category and is read-only afterwards. At
// construction it picks the range profile for its size (`range.rs`), the
// diagram geometry (`hole.rs`) and the fingering table for its convention
// (`fingering.rs`). Every query after that is a pure function of those
// three and the caller's arguments, so a `Recorder` can be shared freely
// between threads once built.
//
// Resolution of a written note:
//   1. shift it to sounding pitch with the score offset;
//   2. measure its distance in semitones from the lowest real note, reading
//      both notes in the caller's key so that key-signature spellings count;
//   3. that distance is the step index into the fingering table.
// A note outside the table yields `None`. This is the normal answer for
// notes the instrument cannot play, not an error.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use play_recorder_theory::{Note, Scale};

use crate::category::InstrumentCategory;
use crate::fingering::{FingeringConvention, FingeringTable};
use crate::grip::Grip;
use crate::hole::{HOLE_COUNT, Hole, Orientation, build_holes};
use crate::range::RangeProfile;

/// One playable step of an instrument, ready for a fingering chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    /// Index into the fingering table.
    pub step: usize,
    /// Sounding pitch, spelled with sharps.
    pub real: Note,
    /// Written pitch.
    pub apparent: Note,
    /// Standard fingering first, then alternates.
    pub grips: Vec<Grip>,
}

/// A recorder of fixed size and fingering convention.
#[derive(Debug, Clone)]
pub struct Recorder {
    category: InstrumentCategory,
    range: RangeProfile,
    holes: [Hole; HOLE_COUNT],
    table: FingeringTable,
}

impl Recorder {
    pub fn new(category: InstrumentCategory) -> Self {
        let range = RangeProfile::for_size(category.size);
        let table = FingeringTable::for_convention(category.convention);
        debug!(
            ?category,
            lowest = %range.lowest_real,
            highest = %range.highest_real,
            score_offset = range.score_offset,
            steps = table.len(),
            "built recorder"
        );
        Recorder {
            category,
            range,
            holes: build_holes(Orientation::Up),
            table,
        }
    }

    /// Build from an integer category code; unknown codes give the
    /// soprano with Baroque fingering.
    pub fn from_code(code: i32) -> Self {
        Recorder::new(InstrumentCategory::from_code(code))
    }

    /// All grips for a written note, standard fingering first, or `None`
    /// when the note is outside the fingering table.
    pub fn grips(&self, scale: &Scale, apparent: &Note) -> Option<&[Grip]> {
        let index = self.step_offset(scale, apparent);
        match self.table.step(index) {
            Some(step) => Some(step.grips()),
            None => {
                trace!(%apparent, index, category = ?self.category, "no grip for note");
                None
            }
        }
    }

    /// The standard fingering for a written note.
    pub fn primary_grip(&self, scale: &Scale, apparent: &Note) -> Option<&Grip> {
        self.grips(scale, apparent).and_then(|grips| grips.first())
    }

    /// Fingering-table index of a written note, if it has one.
    pub fn step_index(&self, scale: &Scale, apparent: &Note) -> Option<usize> {
        let index = self.step_offset(scale, apparent);
        usize::try_from(index)
            .ok()
            .filter(|&i| i < self.table.len())
    }

    /// Signed semitone distance from the lowest real note.
    fn step_offset(&self, scale: &Scale, apparent: &Note) -> i32 {
        let real = self.range.apparent_to_real(apparent);
        scale.chromatic_distance(&real, &self.range.lowest_real)
    }

    /// Whether a written note sounds inside the instrument's documented
    /// range. Stricter than `grips`, whose table may reach higher.
    pub fn is_in_range(&self, scale: &Scale, apparent: &Note) -> bool {
        let real = self.range.apparent_to_real(apparent);
        self.range.contains_real(scale, &real)
    }

    pub fn apparent_to_real(&self, apparent: &Note) -> Note {
        self.range.apparent_to_real(apparent)
    }

    pub fn real_to_apparent(&self, real: &Note) -> Note {
        self.range.real_to_apparent(real)
    }

    /// Every step inside the documented range, lowest first.
    pub fn chart(&self) -> Vec<ChartEntry> {
        let lowest = self.range.lowest_real.value_in_c();
        let last = usize::try_from(self.range.span()).unwrap_or(0);
        self.table
            .steps()
            .iter()
            .enumerate()
            .take(last + 1)
            .map(|(step, fingering)| {
                let real = Note::from_value_sharp(lowest + step as i32);
                ChartEntry {
                    step,
                    real,
                    apparent: self.range.real_to_apparent(&real),
                    grips: fingering.grips().to_vec(),
                }
            })
            .collect()
    }

    pub fn category(&self) -> InstrumentCategory {
        self.category
    }

    pub fn convention(&self) -> FingeringConvention {
        self.category.convention
    }

    pub fn range(&self) -> &RangeProfile {
        &self.range
    }

    pub fn lowest_real_note(&self) -> Note {
        self.range.lowest_real
    }

    pub fn highest_real_note(&self) -> Note {
        self.range.highest_real
    }

    pub fn lowest_apparent_note(&self) -> Note {
        self.range.lowest_apparent()
    }

    pub fn highest_apparent_note(&self) -> Note {
        self.range.highest_apparent()
    }

    /// Written minus sounding pitch, in semitones.
    pub fn score_offset(&self) -> i32 {
        self.range.score_offset
    }

    pub fn hole_count(&self) -> usize {
        HOLE_COUNT
    }

    /// Diagram geometry with the mouthpiece at the top.
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }

    /// Diagram geometry for either drawing direction.
    pub fn holes_oriented(orientation: Orientation) -> [Hole; HOLE_COUNT] {
        build_holes(orientation)
    }

    pub fn fingering_table(&self) -> &FingeringTable {
        &self.table
    }
}

impl Default for Recorder {
    fn default() -> Self {
        Recorder::new(InstrumentCategory::default())
    }
}
