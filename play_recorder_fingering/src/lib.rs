// Recorder fingering engine for PlayRecorder.
//
// Answers one question: which hole coverings sound a given written note on
// a given recorder? Covers five sizes (sopranino to bass) in both Baroque
// and German fingering, including alternate grips and half-holed thumb and
// finger positions. Diagram drawing, note input and UI state live in the
// app; this crate is pure in-memory data plus one lookup.
//
// Architecture:
// - `hole.rs`: `HoleState`, `Orientation`, `Hole` and the diagram layouts
// - `grip.rs`: `Grip` — one covering of all 11 openings, compact notation
// - `fingering.rs`: `FingeringConvention`, `FingeringStep`, `FingeringTable`
//   and the two authored chromatic tables
// - `category.rs`: `InstrumentSize`, `InstrumentCategory` and integer codes
// - `range.rs`: `RangeProfile` — concert range and score transposition
// - `recorder.rs`: `Recorder` — construction and the grip resolver
// - `config.rs`: `RecorderConfig` — JSON instrument selection
//
// Notes and key signatures come from `play_recorder_theory`.

pub mod category;
pub mod config;
pub mod fingering;
pub mod grip;
pub mod hole;
pub mod range;
pub mod recorder;

pub use category::{InstrumentCategory, InstrumentSize};
pub use config::RecorderConfig;
pub use fingering::{
    EmptyStepError, FingeringConvention, FingeringStep, FingeringTable, STEP_COUNT, STEP_NAMES,
};
pub use grip::{Grip, GripParseError};
pub use hole::{HOLE_COUNT, Hole, HoleState, Orientation};
pub use range::RangeProfile;
pub use recorder::{ChartEntry, Recorder};
