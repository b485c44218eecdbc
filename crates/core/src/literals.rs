//! Per-notation literal tables.
//!
//! Each concept of the demonstration (and each shift or mask used to unpack
//! the string) is written four times: once per notation. The four literals
//! are independent constants; the notation chosen at start-up only decides
//! which of them gets assigned.
//!
//! # Invariant
//! For every [`LiteralSet`], `bin == oct == dec == hex`. The `const`
//! assertions at the bottom of this module reject any table that breaks it
//! at compile time.

use std::fmt;

use crate::notation::Notation;

/// The same value written as binary, octal, decimal and hex literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiteralSet {
    pub bin: u32,
    pub oct: u32,
    pub dec: u32,
    pub hex: u32,
}

impl LiteralSet {
    /// Pick the literal written in `notation`.
    pub const fn select(&self, notation: Notation) -> u32 {
        match notation {
            Notation::Binary => self.bin,
            Notation::Octal => self.oct,
            Notation::Decimal => self.dec,
            Notation::Hexadecimal => self.hex,
        }
    }

    /// True when all four literals carry the same value.
    pub const fn is_consistent(&self) -> bool {
        self.bin == self.oct && self.oct == self.dec && self.dec == self.hex
    }
}

/// The five things the generic container is asked to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    Integer,
    Float,
    Character,
    String,
    Boolean,
}

impl Concept {
    /// Concepts in the order the demonstration assigns them.
    pub const ALL: [Concept; 5] = [
        Concept::Integer,
        Concept::Float,
        Concept::Character,
        Concept::String,
        Concept::Boolean,
    ];

    /// Bit pattern for this concept, in all four notations.
    pub const fn literals(self) -> LiteralSet {
        match self {
            Concept::Integer => INTEGER_42,
            Concept::Float => FLOAT_2_7,
            Concept::Character => CHAR_A,
            Concept::String => STRING_ABC,
            Concept::Boolean => BOOL_TRUE,
        }
    }

    /// The same pattern as C-style literal text, indexed like
    /// [`Notation::ALL`].
    pub const fn literal_texts(self) -> [&'static str; 4] {
        match self {
            Concept::Integer => [
                "0b00000000000000000000000000101010",
                "00000000052",
                "42",
                "0x0000002A",
            ],
            Concept::Float => [
                "0b01000000001011001100110011001101",
                "010013146315",
                "1076677837",
                "0x402CCCCD",
            ],
            Concept::Character => [
                "0b00000000000000000000000001000001",
                "00000000101",
                "65",
                "0x00000041",
            ],
            Concept::String => [
                "0b00000000010000110100001001000001",
                "000020641101",
                "4407873",
                "0x00434241",
            ],
            Concept::Boolean => [
                "0b00000000000000000000000000000001",
                "00000000001",
                "1",
                "0x00000001",
            ],
        }
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Concept::Integer => "Integer",
            Concept::Float => "Float",
            Concept::Character => "Character",
            Concept::String => "String",
            Concept::Boolean => "Boolean",
        };
        f.write_str(name)
    }
}

/// "42" as a signed integer
pub const INTEGER_42: LiteralSet = LiteralSet {
    bin: 0b0000_0000_0000_0000_0000_0000_0010_1010,
    oct: 0o00000000052,
    dec: 42,
    hex: 0x0000_002A,
};

/// IEEE-754 single precision pattern for 2.7
pub const FLOAT_2_7: LiteralSet = LiteralSet {
    bin: 0b0100_0000_0010_1100_1100_1100_1100_1101,
    oct: 0o10013146315,
    dec: 1076677837,
    hex: 0x402C_CCCD,
};

/// ASCII 'A'
pub const CHAR_A: LiteralSet = LiteralSet {
    bin: 0b0000_0000_0000_0000_0000_0000_0100_0001,
    oct: 0o00000000101,
    dec: 65,
    hex: 0x0000_0041,
};

/// "ABC" packed little-endian: bits [0:8) = 'A', [8:16) = 'B', [16:24) = 'C'
pub const STRING_ABC: LiteralSet = LiteralSet {
    bin: 0b0000_0000_0100_0011_0100_0010_0100_0001,
    oct: 0o00020641101,
    dec: 4407873,
    hex: 0x0043_4241,
};

/// Boolean true
pub const BOOL_TRUE: LiteralSet = LiteralSet {
    bin: 0b0000_0000_0000_0000_0000_0000_0000_0001,
    oct: 0o00000000001,
    dec: 1,
    hex: 0x0000_0001,
};

/// Shift amounts and byte mask used to unpack [`STRING_ABC`].
pub mod unpack {
    use super::LiteralSet;

    pub const SHIFT_0: LiteralSet = LiteralSet {
        bin: 0b0000_0000_0000_0000_0000_0000_0000_0000,
        oct: 0o00000000000,
        dec: 0,
        hex: 0x0000_0000,
    };

    pub const SHIFT_8: LiteralSet = LiteralSet {
        bin: 0b0000_0000_0000_0000_0000_0000_0000_1000,
        oct: 0o00000000010,
        dec: 8,
        hex: 0x0000_0008,
    };

    pub const SHIFT_16: LiteralSet = LiteralSet {
        bin: 0b0000_0000_0000_0000_0000_0000_0001_0000,
        oct: 0o00000000020,
        dec: 16,
        hex: 0x0000_0010,
    };

    pub const MASK_255: LiteralSet = LiteralSet {
        bin: 0b0000_0000_0000_0000_0000_0000_1111_1111,
        oct: 0o00000000377,
        dec: 255,
        hex: 0x0000_00FF,
    };

    /// Shifts for the first, second and third byte, in order.
    pub const SHIFTS: [LiteralSet; 3] = [SHIFT_0, SHIFT_8, SHIFT_16];
}

const _: () = {
    assert!(INTEGER_42.is_consistent());
    assert!(FLOAT_2_7.is_consistent());
    assert!(CHAR_A.is_consistent());
    assert!(STRING_ABC.is_consistent());
    assert!(BOOL_TRUE.is_consistent());
    assert!(unpack::SHIFT_0.is_consistent());
    assert!(unpack::SHIFT_8.is_consistent());
    assert!(unpack::SHIFT_16.is_consistent());
    assert!(unpack::MASK_255.is_consistent());
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_sets_consistent() {
        for concept in Concept::ALL {
            assert!(concept.literals().is_consistent(), "{concept} literals disagree");
        }
        for set in unpack::SHIFTS.iter().chain([&unpack::MASK_255]) {
            assert!(set.is_consistent());
        }
    }

    #[test]
    fn test_select_is_mode_independent() {
        for concept in Concept::ALL {
            let set = concept.literals();
            let values: Vec<u32> = Notation::ALL.iter().map(|&n| set.select(n)).collect();
            assert!(values.windows(2).all(|w| w[0] == w[1]), "{concept}: {values:?}");
        }
    }

    #[test]
    fn test_literal_texts_decode_to_constants() {
        for concept in Concept::ALL {
            let set = concept.literals();
            for (notation, text) in Notation::ALL.into_iter().zip(concept.literal_texts()) {
                let decoded = notation.parse(text).unwrap();
                assert_eq!(decoded, set.select(notation), "{concept} as {notation}: {text}");
            }
        }
    }

    #[test]
    fn test_rendered_literals_match_texts() {
        for concept in Concept::ALL {
            let set = concept.literals();
            for (notation, text) in Notation::ALL.into_iter().zip(concept.literal_texts()) {
                let rendered = notation.render(set.select(notation));
                let expected = match notation {
                    // Rendered octal is always 12 characters; the C texts vary
                    Notation::Octal => format!("{text:0>12}"),
                    _ => text.to_string(),
                };
                assert_eq!(rendered, expected, "{concept} as {notation}");
            }
        }
    }

    #[test]
    fn test_short_octal_texts_are_padded() {
        let texts = Concept::Integer.literal_texts();
        assert_eq!(texts[1], "00000000052");
        assert_eq!(Notation::Octal.render(INTEGER_42.oct), "000000000052");
        assert_eq!(Notation::Octal.render(FLOAT_2_7.oct), Concept::Float.literal_texts()[1]);
    }

    #[test]
    fn test_expected_values() {
        assert_eq!(INTEGER_42.dec, 42);
        assert_eq!(FLOAT_2_7.hex, 2.7f32.to_bits());
        assert_eq!(CHAR_A.dec, u32::from(b'A'));
        assert_eq!(STRING_ABC.hex.to_le_bytes(), [b'A', b'B', b'C', 0]);
        assert_eq!(BOOL_TRUE.dec, u32::from(true));
    }

    #[test]
    fn test_unpack_constants() {
        let shifts: Vec<u32> = unpack::SHIFTS.iter().map(|s| s.dec).collect();
        assert_eq!(shifts, vec![0, 8, 16]);
        assert_eq!(unpack::MASK_255.hex, 0xFF);
    }
}
