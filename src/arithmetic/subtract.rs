use core::ops::Sub;

use ref_cast::RefCast;

use crate::{BigNumber, Digit, Error, Result, Wrapping};

/// Two argument subtraction of raw slices:
/// a -= b
///
/// The caller _must_ ensure that `a.len() >= b.len()`.
/// Returns whether a borrow was left over, i.e., whether `b > a`
/// (in which case `a` holds the difference modulo $2^{\text{bits of } a}$).
pub(crate) fn sub_assign_borrow<D: Digit>(a: &mut [D], b: &[D]) -> bool {
    debug_assert!(a.len() >= b.len());
    let mut borrow = D::SignedDoubleDigit::default();

    let (a_lo, a_hi) = a.split_at_mut(b.len());

    for (a, b) in a_lo.iter_mut().zip(b) {
        *a = D::sbb(*a, *b, &mut borrow);
    }

    if borrow != D::SignedDoubleDigit::default() {
        for a in a_hi {
            *a = D::sbb(*a, D::ZERO, &mut borrow);
            if borrow == D::SignedDoubleDigit::default() {
                break;
            }
        }
    }

    borrow != D::SignedDoubleDigit::default()
}

impl<D: Digit> BigNumber<D> {
    /// The difference, failing with [`Error::Underflow`] if `subtrahend > self`.
    pub fn sub(&self, subtrahend: &Self) -> Result<Self> {
        self.checked_sub(subtrahend).ok_or_else(|| {
            debug!("subtraction underflow: {} - {}", self, subtrahend);
            Error::Underflow
        })
    }

    /// The difference, or `None` if `subtrahend > self`.
    pub fn checked_sub(&self, subtrahend: &Self) -> Option<Self> {
        if self < subtrahend {
            return None;
        }
        // minuend >= subtrahend, hence also longer or equally long
        let mut difference = self.to_vec();
        let borrow = sub_assign_borrow(&mut difference, subtrahend);
        debug_assert!(!borrow);
        Some(Self::from_le_digits(difference))
    }

    /// The difference modulo $2^{N}$, `N` the bits in the longer operand's digits.
    pub fn wrapping_sub(&self, subtrahend: &Self) -> Self {
        (Wrapping::ref_cast(self) - Wrapping::ref_cast(subtrahend)).0
    }
}

// Subtraction in BigNumber / 2^N -- can forget borrows

impl<D: Digit> Sub for &Wrapping<BigNumber<D>> {
    type Output = Wrapping<BigNumber<D>>;

    fn sub(self, subtrahend: Self) -> Self::Output {
        let width = self.0.len().max(subtrahend.0.len());
        let mut difference = self.0.to_vec();
        difference.resize(width, D::ZERO);
        sub_assign_borrow(&mut difference, &subtrahend.0);
        Wrapping(BigNumber::from_le_digits(difference))
    }
}
