use alloc::{vec, vec::Vec};
use core::ops::{Shl, Shr};

use crate::{BigNumber, Digit, Error, Result, Wrapping};

/// In-place left shift by `0 < n_bits < D::BITS`, returning the bits shifted out at the top.
///
/// Note that "left" means "higher number".
pub(crate) fn shl_assign_bits<D: Digit>(digits: &mut [D], n_bits: u32) -> D {
    debug_assert!(n_bits > 0 && n_bits < D::BITS);
    let mut carry = D::ZERO;
    for elem in digits.iter_mut() {
        let new_carry = *elem >> (D::BITS - n_bits);
        *elem = (*elem << n_bits) | carry;
        carry = new_carry;
    }
    carry
}

/// In-place right shift by `0 < n_bits < D::BITS`, bits shifted out at the bottom are lost.
///
/// Note that "right" means "lower number".
pub(crate) fn shr_assign_bits<D: Digit>(digits: &mut [D], n_bits: u32) {
    debug_assert!(n_bits > 0 && n_bits < D::BITS);
    let mut borrow = D::ZERO;
    for elem in digits.iter_mut().rev() {
        let new_borrow = *elem << (D::BITS - n_bits);
        *elem = (*elem >> n_bits) | borrow;
        borrow = new_borrow;
    }
}

fn split_shift<D: Digit>(bits: usize) -> (usize, u32) {
    let width = D::BITS as usize;
    (bits / width, (bits % width) as u32)
}

impl<D: Digit> BigNumber<D> {
    /// Multiplies by $2^{\text{bits}}$, the result grows as needed.
    ///
    /// Fails with [`Error::UnsupportedShiftAmount`] if the result's digits cannot be allocated.
    /// Zero shifts to zero for any amount.
    pub fn shift_left(&self, bits: usize) -> Result<Self> {
        if self.is_zero() {
            return Ok(Self::zero());
        }
        let (n_digits, n_bits) = split_shift::<D>(bits);

        let mut digits = Vec::new();
        n_digits.checked_add(self.len() + 1)
            .and_then(|total| digits.try_reserve_exact(total).ok())
            .ok_or_else(|| {
                debug!("cannot shift {} digits left by {} bits", self.len(), bits);
                Error::UnsupportedShiftAmount
            })?;
        digits.resize(n_digits, D::ZERO);
        digits.extend_from_slice(self);

        if n_bits > 0 {
            let carry = shl_assign_bits(&mut digits[n_digits..], n_bits);
            digits.push(carry);
        }
        Ok(Self::from_le_digits(digits))
    }

    /// Divides by $2^{\text{bits}}$, rounding down. Shifting out all digits gives zero.
    pub fn shift_right(&self, bits: usize) -> Self {
        let (n_digits, n_bits) = split_shift::<D>(bits);
        if n_digits >= self.len() {
            return Self::zero();
        }

        let mut digits = self[n_digits..].to_vec();
        if n_bits > 0 {
            shr_assign_bits(&mut digits, n_bits);
        }
        Self::from_le_digits(digits)
    }
}

impl<D: Digit> Shl<usize> for &BigNumber<D> {
    type Output = Result<BigNumber<D>>;

    #[inline]
    fn shl(self, bits: usize) -> Self::Output {
        self.shift_left(bits)
    }
}

impl<D: Digit> Shr<usize> for &BigNumber<D> {
    type Output = BigNumber<D>;

    #[inline]
    fn shr(self, bits: usize) -> Self::Output {
        self.shift_right(bits)
    }
}

impl<D: Digit> Shl<usize> for &Wrapping<BigNumber<D>> {
    type Output = Wrapping<BigNumber<D>>;

    /// Compared to [`BigNumber::shift_left`], this is a truncating shift:
    /// the result keeps the operand's number of digits.
    fn shl(self, bits: usize) -> Self::Output {
        let width = self.0.len();
        let (n_digits, n_bits) = split_shift::<D>(bits);
        if n_digits >= width {
            return Wrapping(BigNumber::zero());
        }

        let mut digits = vec![D::ZERO; n_digits];
        digits.extend_from_slice(&self.0[..width - n_digits]);
        if n_bits > 0 {
            // bits shifted out at the top are dropped
            shl_assign_bits(&mut digits[n_digits..], n_bits);
        }
        Wrapping(BigNumber::from_le_digits(digits))
    }
}

#[cfg(test)]
mod test {
    use crate::{BigNumber, Error, Wrapping};

    const A: &str = "7d7deab2affa38154326e96d350deee1";

    fn hex<D: crate::Digit>(s: &str) -> BigNumber<D> {
        BigNumber::parse_hex(s).unwrap()
    }

    #[test]
    fn small_shifts() {
        // python: hex(a >> 2), hex(a << 2)
        assert_eq!((&hex::<u64>(A) >> 2).to_hex(), "1f5f7aacabfe8e0550c9ba5b4d437bb8");
        assert_eq!((&hex::<u64>(A) << 2).unwrap().to_hex(), "1f5f7aacabfe8e0550c9ba5b4d437bb84");
        assert_eq!((&hex::<u8>(A) >> 2).to_hex(), "1f5f7aacabfe8e0550c9ba5b4d437bb8");
        assert_eq!((&hex::<u8>(A) << 2).unwrap().to_hex(), "1f5f7aacabfe8e0550c9ba5b4d437bb84");
    }

    #[test]
    fn bits_cross_digits() {
        let x = hex::<u8>("0180");
        assert_eq!(x.shift_left(1).unwrap().digits(), &[0x00, 0x03]);
        assert_eq!(x.shift_right(1).digits(), &[0xc0]);
        assert_eq!(hex::<u8>("80").shift_left(1).unwrap().digits(), &[0x00, 0x01]);
    }

    #[test]
    fn multi_digit_shifts() {
        let x = hex::<u8>("abc");
        assert_eq!(x.shift_left(8).unwrap().to_hex(), "abc00");
        assert_eq!(x.shift_left(12).unwrap().to_hex(), "abc000");
        assert_eq!(x.shift_left(0).unwrap(), x);
        assert_eq!(x.shift_right(0), x);
        assert_eq!(x.shift_right(4).to_hex(), "ab");
        assert_eq!(x.shift_right(8).to_hex(), "a");
        assert_eq!(x.shift_right(12).to_hex(), "0");
        assert_eq!(x.shift_right(1000).to_hex(), "0");

        let y = hex::<u64>(A);
        assert_eq!(y.shift_left(64).unwrap().to_hex(), "7d7deab2affa38154326e96d350deee10000000000000000");
        assert_eq!(y.shift_right(64).to_hex(), "7d7deab2affa3815");
        assert_eq!(y.shift_right(68).to_hex(), "7d7deab2affa381");
        assert_eq!(y.shift_left(130).unwrap().shift_right(130), y);
    }

    #[test]
    fn zero() {
        assert_eq!(BigNumber::<u32>::zero().shift_left(usize::MAX), Ok(BigNumber::zero()));
        assert!(BigNumber::<u32>::zero().shift_right(3).is_zero());
    }

    #[test]
    fn unallocatable_shift_is_rejected() {
        assert_eq!(BigNumber::<u64>::one().shift_left(usize::MAX), Err(Error::UnsupportedShiftAmount));
        assert_eq!(hex::<u8>(A).shift_left(usize::MAX - 3), Err(Error::UnsupportedShiftAmount));
        assert_eq!(&hex::<u32>(A) << usize::MAX, Err(Error::UnsupportedShiftAmount));
    }

    #[test]
    fn wrapping_shl_truncates() {
        let x = Wrapping(hex::<u8>("c001"));
        assert_eq!((&x << 1).0.to_hex(), "8002");
        assert_eq!((&x << 8).0.to_hex(), "100");
        assert_eq!((&x << 16).0.to_hex(), "0");
        assert_eq!((&x << usize::MAX).0.to_hex(), "0");
    }
}
