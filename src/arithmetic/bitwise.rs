use alloc::vec::Vec;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use crate::{BigNumber, Digit};

/// Digit-wise `op`, the shorter operand is zero-extended.
fn zip_digits<D: Digit>(a: &[D], b: &[D], op: impl Fn(D, D) -> D) -> BigNumber<D> {
    let len = a.len().max(b.len());
    let digits: Vec<D> = (0..len)
        .map(|i| {
            let a = a.get(i).copied().unwrap_or(D::ZERO);
            let b = b.get(i).copied().unwrap_or(D::ZERO);
            op(a, b)
        })
        .collect();
    BigNumber::from_le_digits(digits)
}

impl<D: Digit> BigNumber<D> {
    pub fn bit_and(&self, other: &Self) -> Self {
        zip_digits(self, other, |a, b| a & b)
    }

    pub fn bit_or(&self, other: &Self) -> Self {
        zip_digits(self, other, |a, b| a | b)
    }

    pub fn bit_xor(&self, other: &Self) -> Self {
        zip_digits(self, other, |a, b| a ^ b)
    }

    /// Complements each digit at its full width.
    ///
    /// The width is that of the (normalized) operand, so any digit
    /// that complements to zero at the top gets trimmed: for `u8` digits,
    /// `complement(ff00) = ff`. Complement is an involution only while
    /// the leading digit is not all ones.
    pub fn complement(&self) -> Self {
        BigNumber::from_le_digits(self.iter().map(|&d| !d).collect())
    }
}

impl<D: Digit> BitAnd for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn bitand(self, other: Self) -> Self::Output {
        self.bit_and(other)
    }
}

impl<D: Digit> BitOr for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn bitor(self, other: Self) -> Self::Output {
        self.bit_or(other)
    }
}

impl<D: Digit> BitXor for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn bitxor(self, other: Self) -> Self::Output {
        self.bit_xor(other)
    }
}

impl<D: Digit> Not for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn not(self) -> Self::Output {
        self.complement()
    }
}

#[cfg(test)]
mod test {
    use crate::BigNumber;

    const A: &str = "7d7deab2affa38154326e96d350deee1";
    const B: &str = "97f92a75b3faf8939e8e98b96476fd22";

    fn hex<D: crate::Digit>(s: &str) -> BigNumber<D> {
        BigNumber::parse_hex(s).unwrap()
    }

    #[test]
    fn xor() {
        // python: hex(a ^ b)
        let expected = "ea84c0c71c00c086dda871d4517b13c3";
        assert_eq!((&hex::<u64>(A) ^ &hex(B)).to_hex(), expected);
        assert_eq!((&hex::<u32>(A) ^ &hex(B)).to_hex(), expected);
        assert_eq!((&hex::<u8>(A) ^ &hex(B)).to_hex(), expected);
    }

    #[test]
    fn or_and() {
        let a = hex::<u64>(A);
        let b = hex::<u64>(B);
        assert_eq!(a.bit_or(&b).to_hex(), "fffdeaf7bffaf897dfaef9fd757fffe3");
        assert_eq!(a.bit_and(&b).to_hex(), "15792a30a3fa3811020688292404ec20");
    }

    #[test]
    fn zero_extension() {
        let long = hex::<u8>("abcdef");
        let short = hex::<u8>("0f");
        assert_eq!((&long & &short).to_hex(), "f");
        assert_eq!((&short & &long).to_hex(), "f");
        assert_eq!((&long | &short).to_hex(), "abcdef");
        assert_eq!((&long ^ &short).to_hex(), "abcde0");
    }

    #[test]
    fn results_are_trimmed() {
        let a = hex::<u8>("ff00ff");
        let b = hex::<u8>("ff0000");
        assert_eq!((&a ^ &b).digits(), &[0xff]);
        assert_eq!((&a & &hex("ff")).digits(), &[0xff]);
        assert!((&a ^ &a).is_zero());
        assert_eq!((&a ^ &a).digits(), &[0]);
    }

    #[test]
    fn complement() {
        // python: hex(a ^ (2**128 - 1))
        assert_eq!(hex::<u64>(A).complement().to_hex(), "8282154d5005c7eabcd91692caf2111e");
        assert_eq!((!&hex::<u8>(A)).to_hex(), "8282154d5005c7eabcd91692caf2111e");

        // leading digit all ones complements to zero and is trimmed
        assert_eq!(hex::<u8>("ff00").complement().digits(), &[0xff]);
        assert_eq!(hex::<u16>("ffff1234").complement().to_hex(), "edcb");

        // zero complements to the all-ones digit
        assert_eq!(BigNumber::<u8>::zero().complement().to_hex(), "ff");
        assert_eq!(BigNumber::<u64>::zero().complement().to_hex(), "ffffffffffffffff");
    }

    #[test]
    fn complement_involution() {
        let a = hex::<u64>(A);
        assert_eq!(a.complement().complement(), a);

        // not an involution once the width shrinks
        let b = hex::<u8>("ff00");
        assert_eq!(b.complement().complement().to_hex(), "0");
    }
}
