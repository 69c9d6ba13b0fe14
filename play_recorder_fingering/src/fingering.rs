// Fingering tables for the two recorder conventions.
//
// A table is a chromatic ladder: step 0 is the instrument's lowest real note
// and each following step is one semitone higher. Every step holds one or
// more grips that sound that pitch; the first is the standard fingering and
// the rest are alternates for trills, tuning, or smoother connections.
//
// Baroque and German fingering differ in how the lower hand produces F
// (C on the C instruments) and the chromatic notes around it: German
// fingering opens hole 5 for the plain F and so needs cross-fingerings for
// F#, while Baroque fingering forks hole 5 against the closed holes below.
// The tables are authored data, not derived from each other, and must be
// kept exactly as written.
//
// Step names are given relative to a C instrument (soprano, tenor). On the
// F instruments (sopranino, alto, bass) step 0 sounds F and every name
// shifts by a fourth.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grip::Grip;
use crate::hole::HoleState::{
    BellClose as BC, BellOpen as BO, Closed as X, HalfOpen as H, Open as O,
};

/// Chromatic steps in each fingering table.
pub const STEP_COUNT: usize = 32;

/// Step names relative to a C instrument, lowest first.
pub const STEP_NAMES: [&str; STEP_COUNT] = [
    "C/F", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", //
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B", //
    "C", "C#", "D", "D#", "E", "F", "F#", "G",
];

/// Which hand-position system a recorder is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingeringConvention {
    #[default]
    Baroque,
    German,
}

/// A fingering step read from data had no grips.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("fingering step has no grips")]
pub struct EmptyStepError;

/// All grips that sound one chromatic step. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFingeringStep")]
pub struct FingeringStep {
    grips: Vec<Grip>,
}

/// Serialized form of `FingeringStep`, checked on the way in.
#[derive(Deserialize)]
struct RawFingeringStep {
    grips: Vec<Grip>,
}

impl TryFrom<RawFingeringStep> for FingeringStep {
    type Error = EmptyStepError;

    fn try_from(raw: RawFingeringStep) -> Result<Self, Self::Error> {
        FingeringStep::new(raw.grips)
    }
}

impl FingeringStep {
    /// Build a step from its grips, standard fingering first.
    pub fn new(grips: Vec<Grip>) -> Result<Self, EmptyStepError> {
        if grips.is_empty() {
            return Err(EmptyStepError);
        }
        Ok(FingeringStep { grips })
    }

    /// All grips, standard fingering first.
    pub fn grips(&self) -> &[Grip] {
        &self.grips
    }

    /// The standard fingering.
    pub fn primary(&self) -> &Grip {
        &self.grips[0]
    }

    /// Everything after the standard fingering.
    pub fn alternates(&self) -> &[Grip] {
        &self.grips[1..]
    }

    pub fn len(&self) -> usize {
        self.grips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grips.is_empty()
    }
}

/// The chromatic ladder of grips for one convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingeringTable {
    convention: FingeringConvention,
    steps: Vec<FingeringStep>,
}

impl FingeringTable {
    /// Build a fresh table for a convention. Each step owns its own grips.
    pub fn for_convention(convention: FingeringConvention) -> Self {
        let source = match convention {
            FingeringConvention::Baroque => &BAROQUE_STEPS,
            FingeringConvention::German => &GERMAN_STEPS,
        };
        let steps = source
            .iter()
            .map(|grips| FingeringStep {
                grips: grips.to_vec(),
            })
            .collect();
        FingeringTable { convention, steps }
    }

    pub fn convention(&self) -> FingeringConvention {
        self.convention
    }

    pub fn steps(&self) -> &[FingeringStep] {
        &self.steps
    }

    /// The step at a signed semitone index, or `None` outside the table.
    pub fn step(&self, index: i32) -> Option<&FingeringStep> {
        usize::try_from(index).ok().and_then(|i| self.steps.get(i))
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Baroque (English) fingering, lowest note first.
static BAROQUE_STEPS: [&[Grip]; STEP_COUNT] = [
    // 0: C/F
    &[Grip::new([X, X, X, X, X, X, X, X, X, X, BO])],
    // 1: C#
    &[Grip::new([X, X, X, X, X, X, X, X, X, O, BO])],
    // 2: D
    &[Grip::new([X, X, X, X, X, X, X, X, O, O, BO])],
    // 3: D#
    &[Grip::new([X, X, X, X, X, X, X, O, O, O, BO])],
    // 4: E
    &[Grip::new([X, X, X, X, X, X, O, O, O, O, BO])],
    // 5: F
    &[Grip::new([X, X, X, X, X, O, X, X, X, X, BO])],
    // 6: F#
    &[Grip::new([X, X, X, X, O, X, X, X, O, O, BO])],
    // 7: G
    &[Grip::new([X, X, X, X, O, O, O, O, O, O, BO])],
    // 8: G#
    &[Grip::new([X, X, X, O, X, X, O, O, O, O, BO])],
    // 9: A
    &[Grip::new([X, X, X, O, O, O, O, O, O, O, BO])],
    // 10: A#
    &[
        Grip::new([X, X, O, X, O, X, X, X, O, O, BO]),
        Grip::new([X, X, O, X, X, O, O, O, O, O, BO]),
    ],
    // 11: B
    &[
        Grip::new([X, X, O, O, O, O, O, O, O, O, BO]),
        Grip::new([X, O, X, X, O, O, O, O, O, O, BO]),
    ],
    // 12: C
    &[
        Grip::new([X, O, X, O, O, O, O, O, O, O, BO]),
        Grip::new([O, X, X, X, O, O, O, O, O, O, BO]),
    ],
    // 13: C#
    &[
        Grip::new([O, X, X, O, O, O, O, O, O, O, BO]),
        Grip::new([O, O, X, X, O, X, X, X, O, O, BO]),
        Grip::new([O, X, O, X, X, O, O, O, O, O, BO]),
    ],
    // 14: D
    &[Grip::new([O, O, X, O, O, O, O, O, O, O, BO])],
    // 15: D#
    &[Grip::new([O, O, X, X, X, X, X, X, O, O, BO])],
    // 16: E
    &[Grip::new([H, X, X, X, X, X, O, O, O, O, BO])],
    // 17: F
    &[Grip::new([H, X, X, X, X, O, X, X, O, O, BO])],
    // 18: F#
    &[
        Grip::new([H, X, X, X, O, X, O, O, O, O, BO]),
        Grip::new([H, X, X, X, H, O, O, O, O, O, BO]),
        Grip::new([H, X, X, X, H, X, O, O, O, O, BO]),
        Grip::new([H, X, X, X, O, X, X, O, O, O, BO]),
    ],
    // 19: G
    &[Grip::new([H, X, X, X, O, O, O, O, O, O, BO])],
    // 20: G#
    &[Grip::new([H, X, X, O, X, O, O, O, O, O, BO])],
    // 21: A
    &[Grip::new([H, X, X, O, O, O, O, O, O, O, BO])],
    // 22: A#
    &[
        Grip::new([H, X, X, O, X, X, X, X, O, O, BO]),
        Grip::new([H, X, X, O, X, X, X, O, O, O, BO]),
        Grip::new([H, X, X, O, O, X, X, X, O, O, BO]),
        Grip::new([H, X, X, O, O, X, O, O, X, X, BO]),
    ],
    // 23: B
    &[Grip::new([H, X, X, O, X, X, O, O, O, O, BO])],
    // 24: C
    &[Grip::new([H, X, O, O, X, X, O, O, O, O, BO])],
    // 25: C#
    &[
        Grip::new([H, X, O, X, X, O, X, X, O, O, BC]),
        Grip::new([X, X, O, X, X, X, O, O, X, X, BO]),
        Grip::new([H, X, O, X, X, X, O, O, X, X, BC]),
    ],
    // 26: D
    &[
        Grip::new([H, X, O, X, X, O, X, X, O, O, BO]),
        Grip::new([H, X, O, X, X, O, X, X, X, O, BO]),
    ],
    // 27: D#
    &[Grip::new([H, O, X, X, O, X, X, X, O, O, BO])],
    // 28: E
    &[Grip::new([H, O, X, X, O, X, X, X, O, O, BC])],
    // 29: F
    &[Grip::new([H, X, O, X, X, X, O, O, O, O, BC])],
    // 30: F#
    &[Grip::new([H, X, O, X, X, X, O, O, O, O, BO])],
    // 31: G
    &[Grip::new([H, X, O, O, X, O, O, O, O, O, BO])],
];

/// German fingering, lowest note first.
static GERMAN_STEPS: [&[Grip]; STEP_COUNT] = [
    // 0: C/F
    &[Grip::new([X, X, X, X, X, X, X, X, X, X, BO])],
    // 1: C#
    &[Grip::new([X, X, X, X, X, X, X, X, X, O, BO])],
    // 2: D
    &[Grip::new([X, X, X, X, X, X, X, X, O, O, BO])],
    // 3: D#
    &[Grip::new([X, X, X, X, X, X, X, O, O, O, BO])],
    // 4: E
    &[Grip::new([X, X, X, X, X, X, O, O, O, O, BO])],
    // 5: F
    &[Grip::new([X, X, X, X, X, O, O, O, O, O, BO])],
    // 6: F#
    &[Grip::new([X, X, X, X, O, X, X, X, X, X, BO])],
    // 7: G
    &[Grip::new([X, X, X, X, O, O, O, O, O, O, BO])],
    // 8: G#
    &[
        Grip::new([X, X, X, O, X, X, O, O, O, O, BO]),
        Grip::new([X, X, X, O, X, X, X, O, O, O, BO]),
    ],
    // 9: A
    &[Grip::new([X, X, X, O, O, O, O, O, O, O, BO])],
    // 10: A#
    &[
        Grip::new([X, X, O, X, O, X, X, X, O, O, BO]),
        Grip::new([X, X, O, X, X, O, O, O, O, O, BO]),
    ],
    // 11: B
    &[
        Grip::new([X, X, O, O, O, O, O, O, O, O, BO]),
        Grip::new([X, O, X, X, O, O, O, O, O, O, BO]),
    ],
    // 12: C
    &[
        Grip::new([X, O, X, O, O, O, O, O, O, O, BO]),
        Grip::new([O, X, X, X, O, O, O, O, O, O, BO]),
    ],
    // 13: C#
    &[
        Grip::new([O, X, X, O, O, O, O, O, O, O, BO]),
        Grip::new([O, O, X, X, O, X, X, X, O, O, BO]),
        Grip::new([O, X, O, X, X, O, O, O, O, O, BO]),
    ],
    // 14: D
    &[Grip::new([O, O, X, O, O, O, O, O, O, O, BO])],
    // 15: D#
    &[Grip::new([O, O, X, X, X, X, X, X, O, O, BO])],
    // 16: E
    &[Grip::new([H, X, X, X, X, X, O, O, O, O, BO])],
    // 17: F
    &[Grip::new([H, X, X, X, X, X, O, O, O, O, BO])],
    // 18: F#
    &[
        Grip::new([H, X, X, X, O, X, X, O, O, O, BO]),
        Grip::new([H, X, X, X, O, X, O, O, X, X, BO]),
    ],
    // 19: G
    &[Grip::new([H, X, X, X, O, O, O, O, O, O, BO])],
    // 20: G#
    &[
        Grip::new([H, X, X, X, O, X, X, X, X, X, BO]),
        Grip::new([H, X, X, H, O, O, O, O, O, O, BO]),
    ],
    // 21: A
    &[Grip::new([H, X, X, O, O, O, O, O, O, O, BO])],
    // 22: A#
    &[
        Grip::new([H, X, X, O, X, X, X, X, O, O, BO]),
        Grip::new([H, X, X, O, X, X, X, O, O, O, BO]),
        Grip::new([H, X, X, O, O, X, X, X, O, O, BO]),
        Grip::new([H, X, X, O, O, X, O, O, X, X, BO]),
    ],
    // 23: B
    &[Grip::new([H, X, X, O, X, X, O, O, O, O, BO])],
    // 24: C
    &[Grip::new([H, X, O, O, X, X, O, O, O, O, BO])],
    // 25: C#
    &[
        Grip::new([H, X, O, X, X, O, X, X, O, O, BC]),
        Grip::new([X, X, O, X, X, X, O, O, X, X, BO]),
        Grip::new([H, X, O, X, X, X, O, O, X, X, BC]),
        Grip::new([X, X, O, X, X, X, X, X, X, X, BC]),
    ],
    // 26: D
    &[
        Grip::new([H, X, O, X, X, O, X, X, X, O, BO]),
        Grip::new([H, X, O, X, X, O, X, X, O, O, BO]),
    ],
    // 27: D#
    &[Grip::new([H, O, X, X, O, X, X, X, O, O, BO])],
    // 28: E
    &[Grip::new([H, O, X, X, O, X, X, X, O, O, BC])],
    // 29: F
    &[Grip::new([H, X, X, O, X, X, O, O, O, O, BC])],
    // 30: F#
    &[Grip::new([H, X, X, O, X, X, O, O, O, O, BO])],
    // 31: G
    &[Grip::new([H, X, O, O, X, O, O, O, O, O, BO])],
];
#[cfg(test)]
mod tests {
    use super::*;
    use crate::hole::{HOLE_COUNT, HoleState};

    fn both() -> [FingeringTable; 2] {
        [
            FingeringTable::for_convention(FingeringConvention::Baroque),
            FingeringTable::for_convention(FingeringConvention::German),
        ]
    }

    #[test]
    fn test_tables_share_shape() {
        for table in both() {
            assert_eq!(table.len(), STEP_COUNT);
            assert!(table.steps().iter().all(|step| !step.is_empty()));
        }
    }

    #[test]
    fn test_every_grip_is_well_formed() {
        for table in both() {
            for step in table.steps() {
                for grip in step.grips() {
                    assert_eq!(grip.states().len(), HOLE_COUNT);
                    assert!(grip.is_well_formed(), "malformed grip {grip}");
                    assert!(matches!(
                        grip.bell(),
                        HoleState::BellOpen | HoleState::BellClose
                    ));
                }
            }
        }
    }

    #[test]
    fn test_lowest_step_is_all_closed() {
        for table in both() {
            let step = table.step(0).unwrap();
            assert_eq!(step.len(), 1);
            assert_eq!(step.primary().to_string(), "xxxxxxxxxxO");
        }
    }

    #[test]
    fn test_conventions_diverge_on_lower_hand() {
        let [baroque, german] = both();
        // F: Baroque forks hole 5, German opens everything below it.
        assert_eq!(baroque.step(5).unwrap().primary().to_string(), "xxxxxoxxxxO");
        assert_eq!(german.step(5).unwrap().primary().to_string(), "xxxxxoooooO");
        // F#: the cross-fingerings differ in the double holes.
        let b = baroque.step(6).unwrap().primary();
        let g = german.step(6).unwrap().primary();
        assert_ne!(b, g);
        assert_eq!(b.differing_holes(g), vec![8, 9]);
    }

    #[test]
    fn test_alternate_counts() {
        let [baroque, german] = both();
        let counts = |t: &FingeringTable| {
            t.steps()
                .iter()
                .map(FingeringStep::len)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            counts(&baroque),
            vec![
                1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 3, 1, 1, 1, 1, 4, 1, 1, 1, 4, 1, 1, 3, 2,
                1, 1, 1, 1, 1
            ]
        );
        assert_eq!(
            counts(&german),
            vec![
                1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 2, 2, 2, 3, 1, 1, 1, 1, 2, 1, 2, 1, 4, 1, 1, 4, 2,
                1, 1, 1, 1, 1
            ]
        );
    }

    #[test]
    fn test_german_high_c_sharp_keeps_extra_alternate() {
        let [baroque, german] = both();
        let extra = german.step(25).unwrap().grips()[3];
        assert_eq!(extra.to_string(), "xxoxxxxxxxX");
        assert_eq!(baroque.step(25).unwrap().alternates().len(), 2);
        assert_eq!(german.step(25).unwrap().alternates().len(), 3);
    }

    #[test]
    fn test_bell_closes_only_in_high_register() {
        for table in both() {
            for (i, step) in table.steps().iter().enumerate() {
                if step.grips().iter().any(|g| g.bell() == HoleState::BellClose) {
                    assert!(i >= 24, "bell stopped at step {i} ({})", STEP_NAMES[i]);
                }
            }
        }
    }

    #[test]
    fn test_step_json_rejects_empty() {
        assert!(serde_json::from_str::<FingeringStep>(r#"{"grips":[]}"#).is_err());
        assert_eq!(FingeringStep::new(Vec::new()), Err(EmptyStepError));

        let [baroque, _] = both();
        let step = baroque.step(13).unwrap();
        let json = serde_json::to_string(step).unwrap();
        let back: FingeringStep = serde_json::from_str(&json).unwrap();
        assert_eq!(&back, step);
        assert_eq!(back.primary(), step.primary());
        assert_eq!(back.alternates().len(), 2);
    }

    #[test]
    fn test_table_json_rejects_empty_step() {
        let json = r#"{"convention":"baroque","steps":[{"grips":[]}]}"#;
        assert!(serde_json::from_str::<FingeringTable>(json).is_err());
    }

    #[test]
    fn test_step_out_of_table() {
        let [baroque, _] = both();
        assert!(baroque.step(-1).is_none());
        assert!(baroque.step(STEP_COUNT as i32).is_none());
        assert!(baroque.step(STEP_COUNT as i32 - 1).is_some());
    }
}
