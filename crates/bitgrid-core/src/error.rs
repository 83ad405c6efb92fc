use crate::parser::Radix;
use std::fmt;

/// Why the authoritative field could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionFailure {
    /// The authoritative field is empty. Not an error, nothing is drawn.
    MissingInput,
    InvalidNumber(Radix),
    NegativeNumber(Radix),
}

/// One problem found during a recompute cycle.
///
/// Every check of a cycle runs, so a single cycle may report several of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    Conversion(ConversionFailure),
    InvalidStartIndex,
    InvalidEndIndex,
}

impl Warning {
    /// Silent warnings affect rendering but carry no text for the user.
    pub fn is_silent(&self) -> bool {
        matches!(self, Warning::Conversion(ConversionFailure::MissingInput))
    }

    pub fn is_conversion_failure(&self) -> bool {
        matches!(self, Warning::Conversion(_))
    }
}

impl From<ConversionFailure> for Warning {
    fn from(failure: ConversionFailure) -> Self {
        Warning::Conversion(failure)
    }
}

impl fmt::Display for ConversionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionFailure::MissingInput => write!(f, "Missing input"),
            ConversionFailure::InvalidNumber(radix) => write!(f, "Invalid {} number", radix),
            ConversionFailure::NegativeNumber(radix) => {
                write!(f, "{} number must be positive", radix)
            }
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::Conversion(failure) => write!(f, "{}", failure),
            Warning::InvalidStartIndex => write!(f, "Invalid start index"),
            Warning::InvalidEndIndex => write!(f, "Invalid end index"),
        }
    }
}
