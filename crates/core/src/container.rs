//! One 32-bit cell, read under many types.
//!
//! [`GenericContainer`] stores raw bits and nothing else. It has no idea
//! whether those bits are "an integer" or "a float"; each `as_*` method is an
//! explicit reinterpretation chosen by the caller. None of them convert a
//! value: they read the same stored bits through a different lens.
//!
//! # Byte Order
//! Byte views are little-endian: byte 0 is bits [0:8), byte 1 is bits
//! [8:16), and so on. This is fixed, independent of the host.
//!
//! # Example
//! ```
//! use bitview_core::container::GenericContainer;
//!
//! let mut cell = GenericContainer::new();
//! cell.assign(0x402C_CCCD);
//! assert_eq!(format!("{:.2}", cell.as_f32()), "2.70");
//!
//! cell.assign(0x0043_4241);
//! assert_eq!(cell.as_text(), "ABC");
//! ```

/// A single reusable 32-bit storage cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericContainer {
    bits: u32,
}

impl GenericContainer {
    /// Create a container holding all-zero bits.
    pub fn new() -> Self {
        Self { bits: 0 }
    }

    /// Overwrite the stored bits.
    pub fn assign(&mut self, bits: u32) {
        self.bits = bits;
    }

    /// The raw bits, unchanged.
    pub fn bits(&self) -> u32 {
        self.bits
    }

    /// Read the bits as a two's-complement signed integer.
    pub fn as_i32(&self) -> i32 {
        self.bits as i32
    }

    /// Read the bits as an IEEE-754 single-precision float.
    pub fn as_f32(&self) -> f32 {
        f32::from_bits(self.bits)
    }

    /// Read the low 8 bits as a character code.
    ///
    /// Codes 0-127 are ASCII; 128-255 map to the matching Latin-1 code point.
    pub fn as_char(&self) -> char {
        char::from(self.low_byte())
    }

    /// Read the bits as a truth value: zero is false, anything else true.
    pub fn as_bool(&self) -> bool {
        self.bits != 0
    }

    /// The backing bytes in little-endian order.
    pub fn as_bytes(&self) -> [u8; 4] {
        self.bits.to_le_bytes()
    }

    /// Read the backing bytes as a NUL-terminated text run.
    ///
    /// Stops at the first zero byte; if none is found all four bytes are
    /// used. Each byte becomes one character, as in [`Self::as_char`].
    pub fn as_text(&self) -> String {
        self.as_bytes()
            .iter()
            .take_while(|&&b| b != 0)
            .map(|&b| char::from(b))
            .collect()
    }

    /// Shift right by `shift` bits, then keep the bits selected by `mask`.
    ///
    /// Only the low 8 bits of the result are returned. A shift of 32 or more
    /// yields zero rather than overflowing.
    pub fn extract_byte(&self, shift: u32, mask: u32) -> u8 {
        let shifted = self.bits.checked_shr(shift).unwrap_or(0);
        (shifted & mask & 0xFF) as u8
    }

    fn low_byte(&self) -> u8 {
        (self.bits & 0xFF) as u8
    }
}
