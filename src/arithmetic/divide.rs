use alloc::vec;
use core::cmp::Ordering;

use super::shift::shl_assign_bits;
use super::subtract::sub_assign_borrow;
use crate::numbers::cmp_digits;
use crate::{BigNumber, Digit, Error, Result};

impl<D: Digit> BigNumber<D> {
    /// The remainder of division by `modulus`, i.e., the unique `r < modulus`
    /// with `self = q * modulus + r`.
    ///
    /// Fails with [`Error::DivisionByZero`] for zero modulus.
    ///
    /// This is reduction by subtraction alone (no multiplication, no quotient digit guessing):
    /// the dividend's bits are fed into a running remainder from the top,
    /// and the modulus is subtracted whenever the remainder reaches it.
    /// That is the same result as subtracting the modulus until the remainder is smaller,
    /// in `self.bits()` steps of `modulus.len()` digits each instead of `self / modulus` steps.
    /// It is still quadratic, there is no long division here.
    pub fn modulo(&self, modulus: &Self) -> Result<Self> {
        if modulus.is_zero() {
            warn!("modulo by zero");
            return Err(Error::DivisionByZero);
        }

        if self < modulus {
            return Ok(self.clone());
        }

        // remainder < modulus before each doubling, so one extra digit suffices
        let mut remainder = vec![D::ZERO; modulus.len() + 1];
        for i in (0..self.bits()).rev() {
            let carry = shl_assign_bits(&mut remainder, 1);
            debug_assert!(carry == D::ZERO);
            if self.bit(i) {
                remainder[0] = remainder[0] | D::ONE;
            }
            if cmp_digits(&remainder, modulus) != Ordering::Less {
                let borrow = sub_assign_borrow(&mut remainder, modulus);
                debug_assert!(!borrow);
            }
        }

        Ok(Self::from_le_digits(remainder))
    }
}
