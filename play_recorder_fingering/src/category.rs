// Instrument categories: recorder size crossed with fingering convention.
//
// Categories travel across the app boundary as small integer codes, the
// five Baroque sizes first and then the same five sizes in German
// fingering:
//
//   0 sopranino  1 soprano  2 alto  3 tenor  4 bass      (Baroque)
//   5 sopranino  6 soprano  7 alto  8 tenor  9 bass      (German)
//
// Unknown codes are not an error. They fall back to the soprano with
// Baroque fingering, the most common classroom instrument, and the
// fallback is logged.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::fingering::FingeringConvention;

/// Physical recorder size, smallest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentSize {
    Sopranino,
    #[default]
    Soprano,
    Alto,
    Tenor,
    Bass,
}

impl InstrumentSize {
    pub const ALL: [InstrumentSize; 5] = [
        InstrumentSize::Sopranino,
        InstrumentSize::Soprano,
        InstrumentSize::Alto,
        InstrumentSize::Tenor,
        InstrumentSize::Bass,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// A concrete recorder type: size plus fingering convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstrumentCategory {
    pub size: InstrumentSize,
    pub convention: FingeringConvention,
}

impl InstrumentCategory {
    /// Number of distinct category codes.
    pub const COUNT: usize = 10;

    pub fn new(size: InstrumentSize, convention: FingeringConvention) -> Self {
        InstrumentCategory { size, convention }
    }

    /// Every category in code order.
    pub fn all() -> impl Iterator<Item = InstrumentCategory> {
        (0..Self::COUNT as i32).filter_map(Self::try_from_code)
    }

    /// Decode an integer code, or `None` if it names no category.
    pub fn try_from_code(code: i32) -> Option<Self> {
        let code = usize::try_from(code).ok()?;
        let sizes = InstrumentSize::ALL.len();
        let convention = match code / sizes {
            0 => FingeringConvention::Baroque,
            1 => FingeringConvention::German,
            _ => return None,
        };
        Some(InstrumentCategory::new(
            InstrumentSize::ALL[code % sizes],
            convention,
        ))
    }

    /// Decode an integer code, falling back to soprano/Baroque.
    pub fn from_code(code: i32) -> Self {
        Self::try_from_code(code).unwrap_or_else(|| {
            let fallback = InstrumentCategory::default();
            warn!(code, ?fallback, "unknown recorder category code, using fallback");
            fallback
        })
    }

    pub fn code(self) -> i32 {
        let base = match self.convention {
            FingeringConvention::Baroque => 0,
            FingeringConvention::German => InstrumentSize::ALL.len(),
        };
        (base + self.size.index()) as i32
    }
}
