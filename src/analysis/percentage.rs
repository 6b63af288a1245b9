use std::fmt;

/// A ratio times 100, held as an integer count of hundredths so that equal
/// inputs always give identical values and identical formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Percentage {
    hundredths: u64,
}

impl Percentage {
    pub const ZERO: Percentage = Percentage { hundredths: 0 };

    /// `part / whole * 100`, rounded half-up to two decimals. A zero `whole`
    /// gives zero.
    pub fn of(part: usize, whole: usize) -> Self {
        if whole == 0 {
            return Self::ZERO;
        }
        let part = part as u64;
        let whole = whole as u64;
        Self {
            hundredths: (part * 10_000 + whole / 2) / whole,
        }
    }

    pub fn hundredths(self) -> u64 {
        self.hundredths
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.hundredths / 100, self.hundredths % 100)
    }
}
