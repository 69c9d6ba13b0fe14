// A grip: one complete covering of all 11 openings.
//
// Grips are plain values. Two grips that sound the same pitch are still
// distinct grips; that is what alternate fingerings are.
//
// The compact text form writes one symbol per opening in hole order (see
// `hole.rs`): `x` closed, `o` open, `h` half-open for holes 0-9, and `O`
// or `X` for the bell left open or stopped. The all-closed low note reads
// `xxxxxxxxxxO`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::hole::{BELL, HOLE_COUNT, HoleState};

/// Errors from parsing the compact grip notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GripParseError {
    #[error("expected {expected} hole symbols, found {found}")]
    WrongLength { expected: usize, found: usize },
    #[error("unknown hole symbol '{symbol}' at position {position}")]
    UnknownSymbol { symbol: char, position: usize },
    #[error("symbol '{symbol}' is not valid at position {position}")]
    MisplacedState { symbol: char, position: usize },
}

/// One physical fingering, indexed by hole (thumb = 0, bell = 10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[HoleState; HOLE_COUNT]")]
pub struct Grip([HoleState; HOLE_COUNT]);

impl TryFrom<[HoleState; HOLE_COUNT]> for Grip {
    type Error = GripParseError;

    /// Accepts only states where bell states sit at the bell.
    fn try_from(states: [HoleState; HOLE_COUNT]) -> Result<Self, Self::Error> {
        match states
            .iter()
            .enumerate()
            .find(|(position, state)| state.is_bell_state() != (*position == BELL))
        {
            Some((position, state)) => Err(GripParseError::MisplacedState {
                symbol: state.symbol(),
                position,
            }),
            None => Ok(Grip(states)),
        }
    }
}

impl Grip {
    pub const fn new(states: [HoleState; HOLE_COUNT]) -> Self {
        Grip(states)
    }

    pub fn states(&self) -> &[HoleState; HOLE_COUNT] {
        &self.0
    }

    /// State of one opening, or `None` past the bell.
    pub fn state(&self, hole: usize) -> Option<HoleState> {
        self.0.get(hole).copied()
    }

    pub fn bell(&self) -> HoleState {
        self.0[BELL]
    }

    /// Bell states appear at the bell and nowhere else.
    pub fn is_well_formed(&self) -> bool {
        self.0
            .iter()
            .enumerate()
            .all(|(i, state)| state.is_bell_state() == (i == BELL))
    }

    /// Indices of the holes that are only partly covered.
    pub fn half_open_holes(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, state)| **state == HoleState::HalfOpen)
            .map(|(i, _)| i)
    }

    /// Holes (bell excluded) that differ between two grips.
    pub fn differing_holes(&self, other: &Grip) -> Vec<usize> {
        (0..BELL).filter(|&i| self.0[i] != other.0[i]).collect()
    }
}

impl fmt::Display for Grip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for state in &self.0 {
            write!(f, "{}", state.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Grip {
    type Err = GripParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.trim().chars().collect();
        if symbols.len() != HOLE_COUNT {
            return Err(GripParseError::WrongLength {
                expected: HOLE_COUNT,
                found: symbols.len(),
            });
        }

        let mut states = [HoleState::Closed; HOLE_COUNT];
        for (position, &symbol) in symbols.iter().enumerate() {
            states[position] = HoleState::from_symbol(symbol)
                .ok_or(GripParseError::UnknownSymbol { symbol, position })?;
        }
        Grip::try_from(states)
    }
}
