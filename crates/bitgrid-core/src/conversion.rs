use crate::error::ConversionFailure;
use crate::parser::{Radix, parse};
use num_bigint::BigUint;
use std::fmt;

/// Which of the three number fields is authoritative for a cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Hex,
    Dec,
    Bin,
}

impl Mode {
    pub fn radix(self) -> Radix {
        match self {
            Mode::Hex => Radix::Hex,
            Mode::Dec => Radix::Dec,
            Mode::Bin => Radix::Bin,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.radix())
    }
}

/// Binary digits left padded to four bits per hex digit of the value.
///
/// The width never depends on the field the value was typed into: `5`
/// entered as decimal or as `101` pads to `0101`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaddedBinary(String);

impl PaddedBinary {
    fn new(value: &BigUint, hex_digits: usize) -> Self {
        let minimal = value.to_str_radix(2);
        let width = hex_digits * 4;
        Self(format!("{:0>width$}", minimal))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn bits(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// One uppercase hex digit per group of four bits, most significant first.
    pub fn nibbles(&self) -> impl Iterator<Item = char> + '_ {
        self.0.as_bytes().chunks(4).map(|chunk| {
            let nibble = chunk
                .iter()
                .fold(0u32, |acc, bit| (acc << 1) | u32::from(*bit == b'1'));
            char::from_digit(nibble, 16)
                .unwrap_or('?')
                .to_ascii_uppercase()
        })
    }
}

impl fmt::Display for PaddedBinary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The three representations of one value plus its padded binary form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub mode: Mode,
    pub value: BigUint,
    /// Minimal uppercase hex digits, no prefix.
    pub hex: String,
    pub dec: String,
    /// Minimal binary digits, no leading zeros.
    pub bin: String,
    pub padded: PaddedBinary,
}

impl Conversion {
    pub fn from_value(mode: Mode, value: BigUint) -> Self {
        let hex = value.to_str_radix(16).to_ascii_uppercase();
        let dec = value.to_str_radix(10);
        let bin = value.to_str_radix(2);
        let padded = PaddedBinary::new(&value, hex.len());
        Self {
            mode,
            value,
            hex,
            dec,
            bin,
            padded,
        }
    }

    /// Hex digits as written back into the hex field.
    pub fn hex_display(&self) -> String {
        format!("0x{}", self.hex)
    }

    pub fn text(&self, radix: Radix) -> String {
        match radix {
            Radix::Hex => self.hex_display(),
            Radix::Dec => self.dec.clone(),
            Radix::Bin => self.bin.clone(),
        }
    }
}

/// Converts the field selected by `mode`; the other two fields are ignored.
pub fn convert(
    mode: Mode,
    hex_text: &str,
    dec_text: &str,
    bin_text: &str,
) -> Result<Conversion, ConversionFailure> {
    let radix = mode.radix();
    let text = match mode {
        Mode::Hex => hex_text,
        Mode::Dec => dec_text,
        Mode::Bin => bin_text,
    };

    if text.trim().is_empty() {
        return Err(ConversionFailure::MissingInput);
    }

    let parsed = parse(text, radix).map_err(|e| {
        log::debug!("{} field rejected: {}", radix, e);
        ConversionFailure::InvalidNumber(radix)
    })?;

    let value = parsed
        .to_biguint()
        .ok_or(ConversionFailure::NegativeNumber(radix))?;

    let conversion = Conversion::from_value(mode, value);
    log::debug!(
        "{} -> hex {} dec {} bin {} padded {}",
        mode,
        conversion.hex,
        conversion.dec,
        conversion.bin,
        conversion.padded
    );
    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_hex_a3() {
        let c = convert(Mode::Hex, "A3", "", "").unwrap();
        assert_eq!(c.hex, "A3");
        assert_eq!(c.dec, "163");
        assert_eq!(c.bin, "10100011");
        assert_eq!(c.padded.as_str(), "10100011");
        assert_eq!(c.hex_display(), "0xA3");
    }

    #[test]
    fn test_convert_dec_pads_to_hex_width() {
        let c = convert(Mode::Dec, "", "5", "").unwrap();
        assert_eq!(c.hex, "5");
        assert_eq!(c.bin, "101");
        assert_eq!(c.padded.as_str(), "0101");
    }

    #[test]
    fn test_convert_bin_pads_to_hex_width() {
        let c = convert(Mode::Bin, "", "", "000101").unwrap();
        assert_eq!(c.dec, "5");
        assert_eq!(c.bin, "101");
        assert_eq!(c.padded.as_str(), "0101");

        let c = convert(Mode::Bin, "", "", "10000").unwrap();
        assert_eq!(c.hex, "10");
        assert_eq!(c.padded.as_str(), "00010000");
    }

    #[test]
    fn test_convert_ignores_non_authoritative_fields() {
        let c = convert(Mode::Dec, "not hex", "10", "222").unwrap();
        assert_eq!(c.hex, "A");
    }

    #[test]
    fn test_convert_hex_leading_zeros_are_not_kept() {
        let c = convert(Mode::Hex, "0x00A3", "", "").unwrap();
        assert_eq!(c.hex, "A3");
        assert_eq!(c.padded.len(), 8);
    }

    #[test]
    fn test_convert_zero() {
        let c = convert(Mode::Dec, "", "0", "").unwrap();
        assert_eq!(c.hex, "0");
        assert_eq!(c.bin, "0");
        assert_eq!(c.padded.as_str(), "0000");
    }

    #[test]
    fn test_convert_failures() {
        assert_eq!(
            convert(Mode::Hex, "", "12", ""),
            Err(ConversionFailure::MissingInput)
        );
        assert_eq!(
            convert(Mode::Hex, "xyz", "", ""),
            Err(ConversionFailure::InvalidNumber(Radix::Hex))
        );
        assert_eq!(
            convert(Mode::Dec, "", "-5", ""),
            Err(ConversionFailure::InvalidNumber(Radix::Dec))
        );
        assert_eq!(
            convert(Mode::Bin, "", "", "12"),
            Err(ConversionFailure::InvalidNumber(Radix::Bin))
        );
    }

    #[test]
    fn test_nibbles_follow_padded_bits() {
        let c = convert(Mode::Hex, "1F0c", "", "").unwrap();
        assert_eq!(c.padded.nibbles().collect::<String>(), "1F0C");
    }
}
