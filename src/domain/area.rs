use std::fmt;
use std::ops::Range;

use crate::error::LifeError;

/// Share of each grid dimension covered by a randomize, in percent.
///
/// Always within `1..=100`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct AreaPercent(u8);

impl AreaPercent {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 100;

    /// The whole grid
    pub const FULL: AreaPercent = AreaPercent(100);

    pub fn new(percent: u32) -> Result<Self, LifeError> {
        if (Self::MIN..=Self::MAX).contains(&percent) {
            Ok(Self(percent as u8))
        } else {
            Err(LifeError::InvalidAreaSize(percent))
        }
    }

    pub const fn get(self) -> u32 {
        self.0 as u32
    }

    /// Centered span of a dimension of length `dim`.
    ///
    /// `start = floor((dim - dim * p) / 2)` and the span is `floor(dim * p)` long,
    /// where `p` is the percentage as a fraction. Worked in integers so there is
    /// no float rounding.
    pub fn span(self, dim: usize) -> Range<usize> {
        let pct = self.0 as usize;
        let extent = dim * pct / 100;
        let start = dim * (100 - pct) / 200;

        start..start + extent
    }
}

impl Default for AreaPercent {
    fn default() -> Self {
        Self::FULL
    }
}

impl TryFrom<u32> for AreaPercent {
    type Error = LifeError;

    fn try_from(percent: u32) -> Result<Self, Self::Error> {
        Self::new(percent)
    }
}

impl fmt::Display for AreaPercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
