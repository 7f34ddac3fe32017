use alloc::{vec, vec::Vec};
use core::ops::Deref;

use rand_core::RngCore;
use zeroize::Zeroize;

use crate::{Digit, Word};

mod hex;
mod trait_implementations;

pub(crate) use trait_implementations::cmp_digits;

/// Arbitrary-precision unsigned integer.
///
/// Internal representation as little-endian sequence of digits `D`.
///
/// The digits are always *canonical*: never empty, and the leading (most significant)
/// digit is non-zero unless the value is zero, which is the single digit `[0]`.
/// Every constructor and operation restores this before handing out a value,
/// which is what makes the derived equality and the length-first ordering correct.
///
/// Values are immutable: all operations take `&self` and return fresh values.
/// There is no `DerefMut`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct BigNumber<D: Digit = Word>(Vec<D>);

/// Drops leading zero digits, keeping at least one.
pub(crate) fn normalize<D: Digit>(digits: &mut Vec<D>) {
    while digits.len() > 1 && digits.last() == Some(&D::ZERO) {
        digits.pop();
    }
    if digits.is_empty() {
        digits.push(D::ZERO);
    }
}

/// Number of digits without leading zeros, 0 if all are zero.
pub(crate) fn significant_len<D: Digit>(digits: &[D]) -> usize {
    digits.iter()
        .rposition(|&d| d != D::ZERO)
        .map(|i| i + 1)
        .unwrap_or(0)
}

// c'tors and such
impl<D: Digit> BigNumber<D> {
    pub fn zero() -> Self {
        Self(vec![D::ZERO])
    }

    pub fn one() -> Self {
        Self(vec![D::ONE])
    }

    pub fn from_digit(digit: D) -> Self {
        Self(vec![digit])
    }

    /// Takes ownership of little-endian digits, normalizing them.
    ///
    /// An empty vector is zero.
    pub fn from_le_digits(mut digits: Vec<D>) -> Self {
        normalize(&mut digits);
        Self(digits)
    }

    pub fn from_le_slice(digits: &[D]) -> Self {
        Self::from_le_digits(digits.to_vec())
    }

    /// Uniformly random digits, normalized (so the result may have fewer digits).
    pub fn random<R: RngCore>(rng: &mut R, digits: usize) -> Self {
        Self::from_le_digits((0..digits).map(|_| D::random(rng)).collect())
    }

    /// Interprets bytes as big-endian number. Leading zero bytes are fine, as is the empty slice.
    pub fn from_be_bytes(bytes: &[u8]) -> Self {
        Self::from_le_digits(
            bytes.rchunks(D::BYTES)
                .map(D::from_be_slice)
                .collect()
        )
    }

    /// Minimal big-endian bytes, at least one.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.0.len() * D::BYTES);
        for &digit in self.0.iter().rev() {
            digit.extend_be_bytes(&mut bytes);
        }
        let leading_zeros = bytes.iter()
            .take_while(|&&b| b == 0)
            .count()
            .min(bytes.len() - 1);
        bytes.drain(..leading_zeros);
        bytes
    }
}

impl<D: Digit> BigNumber<D> {
    /// Little-endian digits, same as deref.
    pub fn digits(&self) -> &[D] {
        &self.0
    }

    /// Gives up the canonical little-endian digits.
    pub fn into_digits(self) -> Vec<D> {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [D::ZERO]
    }

    /// The most significant digit.
    pub fn leading_digit(&self) -> D {
        self.0[self.0.len() - 1]
    }

    /// Number of significant bits, 0 for zero.
    pub fn bits(&self) -> usize {
        let leading = self.leading_digit();
        let mut top = 0;
        while top < D::BITS && (leading >> top) != D::ZERO {
            top += 1;
        }
        (self.0.len() - 1) * D::BITS as usize + top as usize
    }

    /// Whether bit `i` (counting from least significant) is set.
    pub fn bit(&self, i: usize) -> bool {
        let bits = D::BITS as usize;
        match self.0.get(i / bits) {
            Some(&digit) => (digit >> (i % bits) as u32) & D::ONE != D::ZERO,
            None => false,
        }
    }
}

impl<D: Digit> Deref for BigNumber<D> {
    type Target = [D];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Leaves canonical zero behind, the digit vector itself is wiped, not dropped.
impl<D: Digit> Zeroize for BigNumber<D> {
    fn zeroize(&mut self) {
        for digit in self.0.iter_mut() {
            digit.zeroize();
        }
        self.0.truncate(1);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn canonical() {
        let x = BigNumber::<u8>::from_le_digits(vec![1, 0, 2, 0, 0]);
        assert_eq!(x.digits(), &[1, 0, 2]);
        assert_eq!(x.len(), 3);
        assert_eq!(x.into_digits(), vec![1, 0, 2]);

        let x = BigNumber::<u8>::from_le_digits(vec![0, 0, 0]);
        assert_eq!(x.digits(), &[0]);
        assert!(x.is_zero());

        let x = BigNumber::<u32>::from_le_digits(Vec::new());
        assert_eq!(x, BigNumber::zero());
    }

    #[test]
    fn bits() {
        assert_eq!(BigNumber::<u8>::zero().bits(), 0);
        assert_eq!(BigNumber::<u8>::one().bits(), 1);
        assert_eq!(BigNumber::<u8>::from_le_digits(vec![0, 0x80]).bits(), 16);
        assert_eq!(BigNumber::<u64>::from_digit(u64::MAX).bits(), 64);
        assert_eq!(BigNumber::<u32>::from_le_digits(vec![0, 0, 5]).bits(), 67);

        let x = BigNumber::<u8>::from_le_digits(vec![0b0000_0101, 0b10]);
        assert!(x.bit(0));
        assert!(!x.bit(1));
        assert!(x.bit(2));
        assert!(x.bit(9));
        assert!(!x.bit(100));
    }

    #[test]
    fn be_bytes() {
        let x = BigNumber::<u64>::from_be_bytes(&hex!("00 00 01 02 03 04 05 06 07 08 09"));
        assert_eq!(x.digits(), &[0x0203_0405_0607_0809, 0x01]);
        assert_eq!(x.to_be_bytes(), hex!("01 02 03 04 05 06 07 08 09"));

        let x = BigNumber::<u16>::from_be_bytes(&hex!("2a3b4c5d"));
        assert_eq!(x.digits(), &[0x4c5d, 0x2a3b]);
        assert_eq!(x.to_be_bytes(), hex!("2a3b4c5d"));

        let zero = BigNumber::<u32>::from_be_bytes(&[]);
        assert!(zero.is_zero());
        assert_eq!(zero.to_be_bytes(), [0]);
    }

    #[test]
    fn random() {
        use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..32 {
            let x = BigNumber::<u8>::random(&mut rng, 8);
            assert!(x.len() <= 8);
            assert!(x.len() == 1 || x.leading_digit() != 0);
        }
    }

    #[test]
    fn zeroize() {
        let mut x = BigNumber::<u16>::from_le_digits(vec![1, 2, 3]);
        x.zeroize();
        assert!(x.is_zero());
        assert_eq!(x.digits(), &[0]);
    }
}
