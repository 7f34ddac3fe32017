//! Arbitrary-precision unsigned integers, as little-endian digits of selectable width.
//!
//! [`BigNumber`] is read from and written to hexadecimal text, and supports
//! bitwise logic (AND, OR, XOR, complement), shifts, addition, subtraction and modulo.
//! There is no multiplication, no division beyond modulo, and no attempt at constant time.
//!
//! ```
//! use bignumber::BigNumber;
//!
//! let a: BigNumber = BigNumber::parse_hex("ff").unwrap();
//! let b = BigNumber::parse_hex("10").unwrap();
//! assert_eq!(a.modulo(&b).unwrap().to_hex(), "f");
//! assert_eq!((&a ^ &b).to_hex(), "ef");
//! ```
#![cfg_attr(not(test), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "delog")]
delog::generate_macros!();

// logging compiles to nothing without `delog`
#[cfg(not(feature = "delog"))]
macro_rules! debug { ($($arg:tt)*) => {} }
#[cfg(not(feature = "delog"))]
macro_rules! warn { ($($arg:tt)*) => {} }

mod arithmetic;
pub use arithmetic::Wrapping;
mod digit;
pub use digit::{Digit, Word};
mod error;
pub use error::{Error, Result};
mod numbers;
pub use numbers::BigNumber;
