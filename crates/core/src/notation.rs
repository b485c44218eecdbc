//! Textual notations for writing a 32-bit value.
//!
//! A [`Notation`] is a radix convention: binary, octal, decimal or
//! hexadecimal. The value never changes with the notation, only the text
//! used to write it down.
//!
//! # Literal Forms
//!
//! ```text
//! Binary       0b00000000000000000000000000101010   (0b + 32 digits)
//! Octal        000000000052                          (0 + 11 digits)
//! Decimal      42                                    (no padding)
//! Hexadecimal  0x0000002A                            (0x + 8 digits)
//! ```
//!
//! Octal is always padded to the full 11 digits a `u32` can need, so every
//! rendered octal literal is 12 characters long. Hand-written C octal
//! literals are often shorter (`00000000052`); they parse to the same value.
//!
//! [`Notation::parse`] also accepts `0o` for octal, upper-case prefixes and
//! `_` digit separators.
//!
//! # Example
//! ```
//! use bitview_core::notation::Notation;
//!
//! let text = Notation::Octal.render(42);
//! assert_eq!(text, "000000000052");
//! assert_eq!(Notation::Octal.parse(&text).unwrap(), 42);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, LiteralError, Result};

/// The radix convention selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Notation {
    #[default]
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Notation {
    /// All notations in the order they are listed in the usage text.
    pub const ALL: [Notation; 4] = [
        Notation::Binary,
        Notation::Octal,
        Notation::Decimal,
        Notation::Hexadecimal,
    ];

    /// Command-line token selecting this notation.
    pub fn token(self) -> &'static str {
        match self {
            Notation::Binary => "bin",
            Notation::Octal => "oct",
            Notation::Decimal => "dec",
            Notation::Hexadecimal => "hex",
        }
    }

    /// Upper-case label used in the demonstration banner.
    pub fn label(self) -> &'static str {
        match self {
            Notation::Binary => "BINARY",
            Notation::Octal => "OCTAL",
            Notation::Decimal => "DECIMAL",
            Notation::Hexadecimal => "HEXADECIMAL",
        }
    }

    /// Numeric base of the notation.
    pub fn radix(self) -> u32 {
        match self {
            Notation::Binary => 2,
            Notation::Octal => 8,
            Notation::Decimal => 10,
            Notation::Hexadecimal => 16,
        }
    }

    /// One-line description for the usage text.
    pub fn description(self) -> &'static str {
        match self {
            Notation::Binary => "Binary notation",
            Notation::Octal => "Octal notation",
            Notation::Decimal => "Decimal notation",
            Notation::Hexadecimal => "Hexadecimal notation",
        }
    }

    /// Prefix written in front of rendered literals.
    pub fn prefix(self) -> &'static str {
        match self {
            Notation::Binary => "0b",
            Notation::Octal => "0",
            Notation::Decimal => "",
            Notation::Hexadecimal => "0x",
        }
    }

    /// Render `value` as a fixed-width literal in this notation.
    pub fn render(self, value: u32) -> String {
        match self {
            Notation::Binary => format!("0b{value:032b}"),
            Notation::Octal => format!("0{value:011o}"),
            Notation::Decimal => value.to_string(),
            Notation::Hexadecimal => format!("0x{value:08X}"),
        }
    }

    /// Decode a literal written in this notation.
    ///
    /// # Errors
    /// Returns `Error::MalformedLiteral` when the prefix is wrong, there are
    /// no digits, a digit is outside the radix, or the value needs more than
    /// 32 bits.
    pub fn parse(self, literal: &str) -> Result<u32> {
        self.parse_digits(literal).map_err(|reason| Error::MalformedLiteral {
            notation: self,
            literal: literal.to_string(),
            reason,
        })
    }

    fn parse_digits(self, literal: &str) -> std::result::Result<u32, LiteralError> {
        let digits = self.strip_prefix(literal).ok_or(LiteralError::MissingPrefix {
            expected: self.prefix(),
        })?;

        let radix = self.radix();
        let mut value: u32 = 0;
        let mut seen_digit = false;

        for c in digits.chars().filter(|&c| c != '_') {
            let digit = c
                .to_digit(radix)
                .ok_or(LiteralError::InvalidDigit { digit: c, radix })?;
            value = value
                .checked_mul(radix)
                .and_then(|v| v.checked_add(digit))
                .ok_or(LiteralError::Overflow)?;
            seen_digit = true;
        }

        if !seen_digit {
            return Err(LiteralError::Empty);
        }
        Ok(value)
    }

    fn strip_prefix(self, literal: &str) -> Option<&str> {
        match self {
            Notation::Binary => literal
                .strip_prefix("0b")
                .or_else(|| literal.strip_prefix("0B")),
            Notation::Octal => literal
                .strip_prefix("0o")
                .or_else(|| literal.strip_prefix("0O"))
                // A lone "0" is the C octal literal for zero
                .or_else(|| {
                    literal
                        .strip_prefix('0')
                        .map(|rest| if rest.is_empty() { "0" } else { rest })
                }),
            Notation::Decimal => Some(literal),
            Notation::Hexadecimal => literal
                .strip_prefix("0x")
                .or_else(|| literal.strip_prefix("0X")),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Notation::Binary => "binary",
            Notation::Octal => "octal",
            Notation::Decimal => "decimal",
            Notation::Hexadecimal => "hexadecimal",
        };
        f.write_str(name)
    }
}

impl FromStr for Notation {
    type Err = Error;

    /// Match a command-line token exactly (case-sensitive).
    fn from_str(token: &str) -> Result<Self> {
        Notation::ALL
            .into_iter()
            .find(|n| n.token() == token)
            .ok_or_else(|| Error::InvalidNotation(token.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_is_binary() {
        assert_eq!(Notation::default(), Notation::Binary);
    }

    #[test]
    fn test_from_token() {
        assert_eq!("bin".parse::<Notation>().unwrap(), Notation::Binary);
        assert_eq!("oct".parse::<Notation>().unwrap(), Notation::Octal);
        assert_eq!("dec".parse::<Notation>().unwrap(), Notation::Decimal);
        assert_eq!("hex".parse::<Notation>().unwrap(), Notation::Hexadecimal);
    }

    #[test]
    fn test_from_token_is_case_sensitive() {
        let result = "HEX".parse::<Notation>();
        assert!(matches!(result, Err(Error::InvalidNotation(ref t)) if t == "HEX"));
    }

    #[test]
    fn test_render_fixed_width() {
        assert_eq!(Notation::Binary.render(42), "0b00000000000000000000000000101010");
        assert_eq!(Notation::Octal.render(42), "000000000052");
        assert_eq!(Notation::Decimal.render(42), "42");
        assert_eq!(Notation::Hexadecimal.render(42), "0x0000002A");

        assert_eq!(Notation::Octal.render(u32::MAX), "037777777777");
        assert_eq!(Notation::Hexadecimal.render(0x402C_CCCD), "0x402CCCCD");
    }

    #[test]
    fn test_parse_accepts_rust_and_c_forms() {
        assert_eq!(Notation::Octal.parse("0o52").unwrap(), 42);
        assert_eq!(Notation::Octal.parse("052").unwrap(), 42);
        assert_eq!(Notation::Octal.parse("0").unwrap(), 0);
        assert_eq!(Notation::Binary.parse("0B10_1010").unwrap(), 42);
        assert_eq!(Notation::Hexadecimal.parse("0x2a").unwrap(), 42);
    }

    #[test]
    fn test_parse_missing_prefix() {
        let result = Notation::Hexadecimal.parse("2A");
        assert!(matches!(
            result,
            Err(Error::MalformedLiteral {
                reason: LiteralError::MissingPrefix { expected: "0x" },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_invalid_digit() {
        let result = Notation::Octal.parse("0089");
        assert!(matches!(
            result,
            Err(Error::MalformedLiteral {
                reason: LiteralError::InvalidDigit { digit: '8', radix: 8 },
                ..
            })
        ));
    }

    #[test]
    fn test_parse_empty() {
        let result = Notation::Binary.parse("0b");
        assert!(matches!(
            result,
            Err(Error::MalformedLiteral { reason: LiteralError::Empty, .. })
        ));
    }

    #[test]
    fn test_parse_overflow() {
        let result = Notation::Hexadecimal.parse("0x100000000");
        assert!(matches!(
            result,
            Err(Error::MalformedLiteral { reason: LiteralError::Overflow, .. })
        ));
        assert_eq!(Notation::Decimal.parse("4294967295").unwrap(), u32::MAX);
    }

    proptest! {
        #[test]
        fn prop_parse_inverts_render(value in any::<u32>()) {
            for notation in Notation::ALL {
                let text = notation.render(value);
                prop_assert_eq!(notation.parse(&text).unwrap(), value);
            }
        }
    }
}
