use core::{cmp::Ordering, fmt, str::FromStr};

use super::significant_len;
use crate::{BigNumber, Digit, Error};

/// Compares little-endian digit slices by value, ignoring leading zeros.
///
/// This is *little endian* ordering, as opposed to the default
/// ordering on slices!
pub(crate) fn cmp_digits<D: Digit>(m: &[D], n: &[D]) -> Ordering {
    let l_m = significant_len(m);
    let l_n = significant_len(n);
    match l_m.cmp(&l_n) {
        Ordering::Equal => {}
        not_equal => return not_equal,
    }

    for i in (0..l_m).rev() {
        match m[i].cmp(&n[i]) {
            Ordering::Equal => (),
            not_equal => return not_equal
        }
    }
    Ordering::Equal
}

// Since we store little-endian, comparison needs to start at the last
// digit, instead of at the first as the derived / default implementation would.
impl<D: Digit> Ord for BigNumber<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_digits(self.digits(), other.digits())
    }
}

impl<D: Digit> PartialOrd for BigNumber<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: Digit> Default for BigNumber<D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<D: Digit> From<D> for BigNumber<D> {
    fn from(digit: D) -> Self {
        Self::from_digit(digit)
    }
}

impl<D: Digit> FromStr for BigNumber<D> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse_hex(s)
    }
}

impl<D: Digit> fmt::Display for BigNumber<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "", &self.to_hex())
    }
}

impl<D: Digit> fmt::LowerHex for BigNumber<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex())
    }
}

impl<D: Digit> fmt::UpperHex for BigNumber<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0x", &self.to_hex().to_ascii_uppercase())
    }
}

impl<D: Digit> fmt::Debug for BigNumber<D> {
    /// Big-endian bytes, as opposed to the internal representation.
    #[cfg(feature = "hex-debug")]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({})", delog::hex_str!(self.to_be_bytes().as_slice()))
    }

    #[cfg(not(feature = "hex-debug"))]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigNumber({:#x})", self)
    }
}
