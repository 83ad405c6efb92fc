use crate::error::Warning;
use crate::parser::{Radix, parse};
use num_traits::ToPrimitive;

/// An inclusive range of bit indices counted from the least significant bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    pub low: usize,
    pub high: usize,
}

impl BitRange {
    /// Builds a range from two indices given in either order.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            low: a.min(b),
            high: a.max(b),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.low <= index && index <= self.high
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeOutcome {
    pub range: Option<BitRange>,
    pub warnings: Vec<Warning>,
}

impl RangeOutcome {
    pub fn is_valid(&self) -> bool {
        self.range.is_some()
    }
}

fn parse_index(text: &str) -> Option<usize> {
    let value = parse(text, Radix::Dec).ok()?.to_biguint()?;
    // Anything past usize is outside every grid anyway.
    Some(value.to_usize().unwrap_or(usize::MAX))
}

/// Validates and orders the two mark index fields.
///
/// Both empty means no highlight and no warning. Otherwise each field is
/// checked on its own and contributes its own warning; the range is only
/// produced when both parse.
pub fn normalize(start_text: &str, end_text: &str) -> RangeOutcome {
    if start_text.trim().is_empty() && end_text.trim().is_empty() {
        return RangeOutcome::default();
    }

    let start = parse_index(start_text);
    let end = parse_index(end_text);

    let mut warnings = Vec::new();
    if start.is_none() {
        warnings.push(Warning::InvalidStartIndex);
    }
    if end.is_none() {
        warnings.push(Warning::InvalidEndIndex);
    }

    let range = match (start, end) {
        (Some(start), Some(end)) => Some(BitRange::new(start, end)),
        _ => None,
    };

    RangeOutcome { range, warnings }
}
