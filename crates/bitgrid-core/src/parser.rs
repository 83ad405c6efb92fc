use num_bigint::BigInt;
use num_traits::Num;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    Hex,
    Dec,
    Bin,
}

impl Radix {
    pub fn base(self) -> u32 {
        match self {
            Radix::Hex => 16,
            Radix::Dec => 10,
            Radix::Bin => 2,
        }
    }

    pub fn all() -> [Radix; 3] {
        [Radix::Hex, Radix::Dec, Radix::Bin]
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Hex => write!(f, "HEX"),
            Radix::Dec => write!(f, "DEC"),
            Radix::Bin => write!(f, "BIN"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("sign not allowed")]
    Sign,
    #[error("invalid {radix} digit '{ch}' at position {position}")]
    InvalidDigit {
        radix: Radix,
        ch: char,
        position: usize,
    },
}

/// Parses `text` as a non-negative integer in `radix`.
///
/// Surrounding whitespace is ignored. A `0x`/`0X` prefix is accepted for
/// [`Radix::Hex`] only. Signs are rejected outright, so the result is never
/// negative; callers still check the sign of what they get back.
pub fn parse(text: &str, radix: Radix) -> Result<BigInt, ParseError> {
    let mut digits = text.trim();
    if radix == Radix::Hex
        && let Some(rest) = digits.strip_prefix("0x").or(digits.strip_prefix("0X"))
    {
        digits = rest;
    }

    if digits.is_empty() {
        return Err(ParseError::Empty);
    }

    for (position, ch) in digits.chars().enumerate() {
        if ch == '-' || ch == '+' {
            return Err(ParseError::Sign);
        }
        if !ch.is_digit(radix.base()) {
            return Err(ParseError::InvalidDigit {
                radix,
                ch,
                position,
            });
        }
    }

    // Every character is a digit of the radix at this point.
    BigInt::from_str_radix(digits, radix.base()).map_err(|_| ParseError::Empty)
}
