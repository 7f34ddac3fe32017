//! Arithmetic on [`BigNumber`]: bitwise logic, shifts, addition, subtraction, modulo.
//!
//! Every operation borrows its operands and returns a fresh, normalized value.
//! Work happens on a local digit buffer which is only wrapped up as
//! [`BigNumber`] once finished.
//!
//! For `Wrapping<BigNumber>`, results keep a fixed width of digits instead of growing,
//! dropping carries and borrows (subtraction, left shift).

use ref_cast::RefCast;

use crate::BigNumber;

mod bitwise;
mod shift;
mod add;
mod subtract;
mod divide;

#[repr(transparent)]
#[derive(Clone, Debug, Default, PartialEq, Eq, RefCast)]
/// Intentionally-wrapped arithmetic.
///
/// We can't use `core::num::Wrapping` due to type coherence clashing
/// with our usage requirements.
///
/// For `T = BigNumber<D>`, we wrap around $2^{N}$, where `N` is the number
/// of bits in the wider operand's digits (leading zeros included).
pub struct Wrapping<T>(pub T);

impl<T> Wrapping<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<D: crate::Digit> From<BigNumber<D>> for Wrapping<BigNumber<D>> {
    fn from(number: BigNumber<D>) -> Self {
        Self(number)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ref_cast() {
        let x = BigNumber::<u8>::from(7);
        let wrapped: &Wrapping<BigNumber<u8>> = Wrapping::ref_cast(&x);
        assert_eq!(&wrapped.0, &x);
        assert_eq!(Wrapping::from(x.clone()).into_inner(), x);
    }
}
