use core::ops::{Add, AddAssign};

use crate::{BigNumber, Digit};

#[inline]
/// Two argument addition of raw slices:
/// a += b
///
/// The caller _must_ ensure that `a.len() >= b.len()`.
/// Returns the carry out of the top digit (`0` or `1`).
pub(crate) fn add_assign_carry<D: Digit>(a: &mut [D], b: &[D]) -> D {
    debug_assert!(a.len() >= b.len());

    let mut carry = D::DoubleDigit::default();
    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = D::adc(*a, *b, &mut carry);
    }

    if carry != D::DoubleDigit::default() {
        for a in a_hi {
            *a = D::adc(*a, D::ZERO, &mut carry);
            if carry == D::DoubleDigit::default() {
                break;
            }
        }
    }

    if carry == D::DoubleDigit::default() { D::ZERO } else { D::ONE }
}

impl<D: Digit> BigNumber<D> {
    /// The sum, one digit longer than the longer summand if the top carries.
    pub fn add(&self, summand: &Self) -> Self {
        let (long, short) = if self.len() >= summand.len() {
            (self, summand)
        } else {
            (summand, self)
        };

        let mut sum = long.to_vec();
        let carry = add_assign_carry(&mut sum, short);
        if carry != D::ZERO {
            sum.push(carry);
        }
        Self::from_le_digits(sum)
    }
}

impl<D: Digit> Add for &BigNumber<D> {
    type Output = BigNumber<D>;

    fn add(self, summand: Self) -> Self::Output {
        BigNumber::add(self, summand)
    }
}

impl<D: Digit> AddAssign<&Self> for BigNumber<D> {
    fn add_assign(&mut self, summand: &Self) {
        *self = BigNumber::add(self, summand);
    }
}
