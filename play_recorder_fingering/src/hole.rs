// Tone holes: covering states and diagram geometry.
//
// A recorder in this model has 11 tracked openings, always in the same
// order:
//
//   0      thumb hole (back of the body)
//   1..=5  single finger holes, top to bottom
//   6, 7   left and right halves of double hole 6
//   8, 9   left and right halves of double hole 7
//   10     the bell
//
// Grips (`grip.rs`) index into this order. The geometry below is only read
// by diagram renderers; grip resolution never looks at positions. One
// layout serves every instrument size: fingering order, not hole spacing,
// is what the resolver depends on.

use serde::{Deserialize, Serialize};

/// Number of tracked openings on every recorder.
pub const HOLE_COUNT: usize = 11;

/// Index of the thumb hole.
pub const THUMB: usize = 0;

/// Index of the bell opening.
pub const BELL: usize = HOLE_COUNT - 1;

/// How a single opening is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HoleState {
    /// Fully covered.
    Closed,
    /// Fully uncovered.
    Open,
    /// Partially covered (pinched thumb, or a shaded finger hole).
    HalfOpen,
    /// Bell left free. Only valid at `BELL`.
    BellOpen,
    /// Bell stopped against the knee. Only valid at `BELL`.
    BellClose,
}

impl HoleState {
    pub fn is_bell_state(self) -> bool {
        matches!(self, HoleState::BellOpen | HoleState::BellClose)
    }

    /// Single-character symbol used by the compact grip notation.
    pub fn symbol(self) -> char {
        match self {
            HoleState::Closed => 'x',
            HoleState::Open => 'o',
            HoleState::HalfOpen => 'h',
            HoleState::BellOpen => 'O',
            HoleState::BellClose => 'X',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'x' => Some(HoleState::Closed),
            'o' => Some(HoleState::Open),
            'h' => Some(HoleState::HalfOpen),
            'O' => Some(HoleState::BellOpen),
            'X' => Some(HoleState::BellClose),
            _ => None,
        }
    }
}

/// Which way the instrument is drawn in a fingering diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Mouthpiece at the top.
    #[default]
    Up,
    /// Mouthpiece at the bottom.
    Down,
}

/// One opening as placed on a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    pub orientation: Orientation,
    /// Lateral offset from the body's centerline (negative = left).
    pub x: f32,
    /// Position along the body, measured from the diagram's top edge.
    pub y: f32,
    pub diameter: f32,
}

impl Hole {
    const fn new(orientation: Orientation, x: f32, y: f32, diameter: f32) -> Self {
        Hole {
            orientation,
            x,
            y,
            diameter,
        }
    }

    /// Whether this is one half of a double hole.
    pub fn is_split(&self) -> bool {
        self.x != 0.0
    }
}

const UP_LAYOUT: [Hole; HOLE_COUNT] = [
    Hole::new(Orientation::Up, 0.0, 150.0, 1.5),
    Hole::new(Orientation::Up, 0.0, 220.0, 1.5),
    Hole::new(Orientation::Up, 0.0, 270.0, 1.5),
    Hole::new(Orientation::Up, 0.0, 320.0, 1.5),
    Hole::new(Orientation::Up, 0.0, 390.0, 1.5),
    Hole::new(Orientation::Up, 0.0, 440.0, 1.5),
    Hole::new(Orientation::Up, -15.0, 490.0, 1.0),
    Hole::new(Orientation::Up, 15.0, 490.0, 1.0),
    Hole::new(Orientation::Up, -15.0, 530.0, 1.0),
    Hole::new(Orientation::Up, 15.0, 530.0, 1.0),
    Hole::new(Orientation::Up, 0.0, 580.0, 2.0),
];

const DOWN_LAYOUT: [Hole; HOLE_COUNT] = [
    Hole::new(Orientation::Down, 0.0, 530.0, 1.5),
    Hole::new(Orientation::Down, 0.0, 460.0, 1.5),
    Hole::new(Orientation::Down, 0.0, 410.0, 1.5),
    Hole::new(Orientation::Down, 0.0, 360.0, 1.5),
    Hole::new(Orientation::Down, 0.0, 290.0, 1.5),
    Hole::new(Orientation::Down, 0.0, 240.0, 1.5),
    Hole::new(Orientation::Down, 15.0, 190.0, 1.0),
    Hole::new(Orientation::Down, -15.0, 190.0, 1.0),
    Hole::new(Orientation::Down, 15.0, 150.0, 1.0),
    Hole::new(Orientation::Down, -15.0, 150.0, 1.0),
    Hole::new(Orientation::Down, 0.0, 100.0, 2.0),
];

/// Diagram geometry for all 11 openings, in grip order.
pub fn build_holes(orientation: Orientation) -> [Hole; HOLE_COUNT] {
    match orientation {
        Orientation::Up => UP_LAYOUT,
        Orientation::Down => DOWN_LAYOUT,
    }
}
