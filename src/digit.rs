//! Digits, the fixed-width storage units of a [`BigNumber`][crate::BigNumber].

use core::{fmt, hash::Hash, mem, ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr}};

use rand_core::RngCore;
use zeroize::Zeroize;

/// The machine word. Default digit of [`BigNumber`][crate::BigNumber].
///
/// Feature `u32` forces the word to be 32-bit even on 64-bit architectures,
/// feature `u64` forces the word to be 64-bit even on 32-bit architectures.
pub type Word = word::Word;

#[cfg(not(any(feature = "u32", feature = "u64")))]
compile_error!("Either feature u32 or feature u64!");

#[cfg(all(feature = "u32", feature = "u64"))]
compile_error!("Either feature u32 or feature u64, not both!");

#[cfg(feature = "u32")]
mod word {
    pub type Word = u32;
}

#[cfg(feature = "u64")]
mod word {
    pub type Word = u64;
}

/// An unsigned fixed-width integer usable as digit.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. All operations of
/// [`BigNumber`][crate::BigNumber] have the same contract at every width,
/// only speed and the hex chunk size differ.
pub trait Digit:
    Copy + Default + Eq + Ord + Hash + Zeroize
    + fmt::Debug + fmt::LowerHex + fmt::UpperHex
    + Not<Output = Self>
    + BitAnd<Output = Self> + BitOr<Output = Self> + BitXor<Output = Self>
    + Shl<u32, Output = Self> + Shr<u32, Output = Self>
    + 'static
{
    /// Unsigned type with twice as many bits, accumulates carries.
    type DoubleDigit: Copy + Default + Eq;
    /// Signed type with twice as many bits, accumulates borrows.
    type SignedDoubleDigit: Copy + Default + Eq;

    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;

    /// Hex characters per digit.
    const HEX_WIDTH: usize = (Self::BITS / 4) as usize;
    /// Bytes per digit.
    const BYTES: usize = (Self::BITS / 8) as usize;

    /// Add with carry: returns the low digit of `a + b + acc`,
    /// leaving the carry in `acc`.
    fn adc(a: Self, b: Self, acc: &mut Self::DoubleDigit) -> Self;

    /// Subtract with borrow: returns the low digit of `acc + a - b`,
    /// leaving `0` or `-1` in `acc`.
    fn sbb(a: Self, b: Self, acc: &mut Self::SignedDoubleDigit) -> Self;

    /// The digit `0..=15`.
    fn from_nibble(nibble: u8) -> Self;

    /// Big-endian bytes, `bytes.len() <= Self::BYTES`, missing leading bytes are zero.
    fn from_be_slice(bytes: &[u8]) -> Self;

    /// Appends `Self::BYTES` big-endian bytes.
    fn extend_be_bytes(self, bytes: &mut alloc::vec::Vec<u8>);

    fn random<R: RngCore>(rng: &mut R) -> Self;
}

macro_rules! impl_digit {
    ($digit:ty, $double:ty, $signed_double:ty) => {
        impl Digit for $digit {
            type DoubleDigit = $double;
            type SignedDoubleDigit = $signed_double;

            const BITS: u32 = <$digit>::BITS;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MAX: Self = <$digit>::MAX;

            #[inline]
            fn adc(a: Self, b: Self, acc: &mut $double) -> Self {
                *acc += a as $double;
                *acc += b as $double;
                let lo = *acc as $digit;
                *acc >>= Self::BITS;
                lo
            }

            #[inline]
            fn sbb(a: Self, b: Self, acc: &mut $signed_double) -> Self {
                *acc += a as $signed_double;
                *acc -= b as $signed_double;
                let lo = *acc as $digit;
                *acc >>= Self::BITS;
                lo
            }

            #[inline]
            fn from_nibble(nibble: u8) -> Self {
                debug_assert!(nibble < 16);
                nibble as $digit
            }

            fn from_be_slice(bytes: &[u8]) -> Self {
                debug_assert!(bytes.len() <= Self::BYTES);
                let mut buf = [0u8; mem::size_of::<$digit>()];
                buf[Self::BYTES - bytes.len()..].copy_from_slice(bytes);
                <$digit>::from_be_bytes(buf)
            }

            fn extend_be_bytes(self, bytes: &mut alloc::vec::Vec<u8>) {
                bytes.extend_from_slice(&self.to_be_bytes());
            }

            fn random<R: RngCore>(rng: &mut R) -> Self {
                let mut buf = [0u8; mem::size_of::<$digit>()];
                rng.fill_bytes(&mut buf);
                <$digit>::from_le_bytes(buf)
            }
        }
    };
}

impl_digit!(u8, u16, i16);
impl_digit!(u16, u32, i32);
impl_digit!(u32, u64, i64);
impl_digit!(u64, u128, i128);
