//! Hexadecimal text, most significant digit first.

use alloc::{string::String, vec::Vec};

use crate::{BigNumber, Digit, Error, Result};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl<D: Digit> BigNumber<D> {
    /// Parses hex digits (either case, no `0x` prefix, leading zeros allowed).
    ///
    /// The text is consumed in chunks of `D::HEX_WIDTH` characters from the end,
    /// so the length need not be a multiple of the chunk size;
    /// the leftover chunk at the front becomes the leading digit.
    ///
    /// Fails with [`Error::InvalidFormat`] on empty input or any non-hex character.
    pub fn parse_hex(text: &str) -> Result<Self> {
        let text = text.as_bytes();
        if text.is_empty() {
            debug!("empty hex string");
            return Err(Error::InvalidFormat);
        }

        let mut digits = Vec::with_capacity((text.len() + D::HEX_WIDTH - 1) / D::HEX_WIDTH);
        for chunk in text.rchunks(D::HEX_WIDTH) {
            let mut digit = D::ZERO;
            for &c in chunk {
                let value = nibble(c).ok_or_else(|| {
                    debug!("non-hex character {:?} in hex string", c as char);
                    Error::InvalidFormat
                })?;
                digit = (digit << 4) | D::from_nibble(value);
            }
            digits.push(digit);
        }

        Ok(Self::from_le_digits(digits))
    }

    /// Lowercase hex, no prefix, no leading zeros ("0" for zero).
    pub fn to_hex(&self) -> String {
        const ALPHABET: &[u8; 16] = b"0123456789abcdef";
        let bytes = self.to_be_bytes();
        let mut hex = String::with_capacity(2 * bytes.len());
        for (i, &byte) in bytes.iter().enumerate() {
            // minimal bytes: only the first one can have a zero high nibble
            if i > 0 || byte >> 4 != 0 {
                hex.push(ALPHABET[(byte >> 4) as usize] as char);
            }
            hex.push(ALPHABET[(byte & 0xf) as usize] as char);
        }
        hex
    }
}
