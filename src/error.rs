use core::fmt;

/// The ways an operation on [`BigNumber`][crate::BigNumber] can fail.
///
/// All of these are local and recoverable, nothing here is worth a panic.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// Input text is empty or contains a non-hexadecimal character.
    InvalidFormat,
    /// Modulo by zero.
    DivisionByZero,
    /// Subtrahend exceeds minuend.
    Underflow,
    /// Left shift whose result is too large to allocate.
    UnsupportedShiftAmount,
}

/// [`Error`] or success.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::InvalidFormat => "invalid hexadecimal number",
            Error::DivisionByZero => "division by zero",
            Error::Underflow => "subtraction underflow",
            Error::UnsupportedShiftAmount => "unsupported shift amount",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
