//! # Arithmetic over GF(2⁸)
//!
//! This library implements arithmetic over the finite field with 256
//! elements as well as over the polynomial ring with coefficients in that
//! field. Byte-oriented codes such as Reed–Solomon are built directly on
//! these two layers.
//!
//! ## Structure
//!
//! 1. **Field**: one instantiation of GF(2⁸), defined by an irreducible
//!    degree-8 polynomial over ℤ₂ and a multiplicative generator. Discrete
//!    exponent and logarithm tables are built once at construction time.
//! 2. **Polynomial ring**: evaluation, addition, multiplication and long
//!    division of polynomials whose coefficients live in a given [`Field`].
//!
//! A [`Field`] is immutable after construction and safe to share across
//! threads; every polynomial operation takes the field by reference and
//! never mutates its arguments.
//!
//! ## Usage Example
//!
//! ```
//! use gf256::{Field, Irreducible, Num, Polynomial};
//!
//! let field = Field::new(Irreducible::new(0x11d), Num::new(0x02))?;
//! let nominator = Polynomial::from_bytes(&[0xff, 0x01, 0x00, 0x17, 0x02, 0x01]);
//! let denominator = Polynomial::from_bytes(&[0x01, 0x00, 0x01]);
//! let (quotient, remainder) = field.divide_polynomials(&nominator, &denominator)?;
//! assert_eq!(quotient.to_string(), "x^3 + 10 x^2 + 10110 x + 10");
//! assert_eq!(remainder.to_string(), "10111 x + 11111101");
//! # Ok::<(), gf256::Error>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

// Core modules - the field layer has no dependency on the ring layer
pub mod field;      // GF(2⁸) construction and element arithmetic
pub mod polynomial; // Polynomials with coefficients in GF(2⁸)

// Re-exports for convenience
pub use field::{Field, Irreducible, Num};
pub use polynomial::Polynomial;

use thiserror::Error;

/// Errors reported by field construction and arithmetic
///
/// All of these are caller-input errors detected synchronously; retrying
/// the same inputs can never change the outcome.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The supplied polynomial does not have degree exactly 8
    #[error("polynomial {0} does not have degree 8")]
    InvalidDegree(Irreducible),

    /// The supplied element does not generate the full multiplicative group
    #[error("{0} is not a generator")]
    NotAGenerator(Num),

    /// Logarithm requested for the additive zero
    #[error("logarithm of zero is undefined")]
    LogOfZero,

    /// Multiplicative inverse requested for the additive zero
    #[error("multiplicative inverse of zero is undefined")]
    InverseOfZero,

    /// Polynomial division attempted with an identically-zero denominator
    #[error("division by the zero polynomial")]
    DivisionByZeroPolynomial,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::NotAGenerator(Num::new(0x20)).to_string(),
            "100000 is not a generator"
        );
        assert_eq!(
            Error::InvalidDegree(Irreducible::new(0x3)).to_string(),
            "polynomial x+1 does not have degree 8"
        );
    }
}
