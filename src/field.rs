//! GF(2⁸) field construction and element arithmetic
//!
//! A [`Field`] is defined by an irreducible degree-8 polynomial over ℤ₂
//! and a generator of the 255-element multiplicative group. Construction
//! builds the discrete exponent and logarithm tables once; every later
//! operation is a table lookup.

use bitvec::prelude::*;
use tracing::debug;

use crate::Error;

/// Order of the multiplicative group of GF(2⁸)
const GROUP_ORDER: i64 = 255;

/// An element of GF(2⁸)
///
/// Bit i of the value is the coefficient of term xⁱ in the element's
/// representation as a polynomial over ℤ₂. [`Num`] renders as its bit
/// pattern: `Num::new(0x17)` displays as `10111`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Num(u8);

impl Num {
    /// Wrap a byte as a field element
    pub fn new(value: u8) -> Self {
        Num(value)
    }

    /// The 8-bit value of this element
    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Num {
    fn from(value: u8) -> Self {
        Num(value)
    }
}

impl From<Num> for u8 {
    fn from(num: Num) -> Self {
        num.0
    }
}

impl std::fmt::Display for Num {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:b}", self.0)
    }
}

/// A bit-vector representation of a degree-8 polynomial over ℤ₂
///
/// Used only to parameterize [`Field`] construction. Valid values have
/// bit 8 set and no higher bit: a common choice is x⁸+x⁴+x³+x²+1, the bit
/// pattern `100011101`, or `0x11d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Irreducible(u16);

impl Irreducible {
    /// Wrap a bitmask as an irreducible-polynomial candidate
    ///
    /// Validation happens in [`Field::new`], not here.
    pub fn new(bits: u16) -> Self {
        Irreducible(bits)
    }

    /// The raw bitmask of this polynomial
    pub fn bits(self) -> u16 {
        self.0
    }
}

impl From<u16> for Irreducible {
    fn from(bits: u16) -> Self {
        Irreducible(bits)
    }
}

impl std::fmt::Display for Irreducible {
    /// Renders the polynomial in superscript notation, e.g. `x⁸+x⁴+x³+x²+1`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        const TERMS: [&str; 9] = ["1", "x", "x²", "x³", "x⁴", "x⁵", "x⁶", "x⁷", "x⁸"];
        let mut bits = self.0;
        if bits == 0 {
            return write!(f, "0");
        }
        let mut terms = Vec::new();
        let mut i = 0;
        while bits != 0 {
            if bits & 1 != 0 {
                match TERMS.get(i) {
                    Some(term) => terms.push((*term).to_string()),
                    None => terms.push(format!("x^{}", i)),
                }
            }
            bits >>= 1;
            i += 1;
        }
        terms.reverse();
        write!(f, "{}", terms.join("+"))
    }
}

/// One instantiation of GF(2⁸)
///
/// Immutable once constructed; safe to share read-only across arbitrarily
/// many threads. Multiple distinct fields (different polynomials or
/// generators) can coexist.
#[derive(Debug, Clone)]
pub struct Field {
    /// The irreducible congruence defining the field
    poly: Irreducible,

    /// The generator used for multiplication and division
    generator: Num,

    /// exp_table[i] == generator^i
    exp_table: [Num; GROUP_ORDER as usize],

    /// log_table[x] == log_generator(x); the entry for zero is never a
    /// valid logarithm and must not be read (zero has no logarithm)
    log_table: [i64; 256],
}

impl Field {
    /// Create a new instantiation of GF(2⁸)
    ///
    /// Fails with [`Error::InvalidDegree`] unless `polynomial` has degree
    /// exactly 8, and with [`Error::NotAGenerator`] unless the successive
    /// powers of `generator` enumerate all 255 non-zero elements. The
    /// latter check also rejects reducible polynomials: modulo a reducible
    /// congruence the non-zero elements do not form a cyclic group of
    /// order 255, so no candidate generator can cover them all.
    pub fn new(polynomial: Irreducible, generator: Num) -> Result<Self, Error> {
        if polynomial.bits() | 0x1ff != 0x1ff {
            return Err(Error::InvalidDegree(polynomial));
        }
        if polynomial.bits() & 0x100 == 0 {
            return Err(Error::InvalidDegree(polynomial));
        }
        if generator == Num(0) || generator == Num(1) {
            return Err(Error::NotAGenerator(generator));
        }

        let mut exp_table = [Num(0); GROUP_ORDER as usize];
        let mut log_table = [0i64; 256];
        // Presence bitmap: records which elements the generator has visited.
        // Keeping this separate from log_table removes the ambiguity between
        // "logarithm is 0" (true for the unit) and "never recorded".
        let mut seen = bitvec![0; 256];

        let mut product = Num(1);
        for i in 0..GROUP_ORDER as usize {
            if i != 0 && product == Num(1) {
                // The generator cycled back to 1 early: its order divides i < 255.
                return Err(Error::NotAGenerator(generator));
            }
            exp_table[i] = product;
            log_table[product.value() as usize] = i as i64;
            seen.set(product.value() as usize, true);
            product = carryless_mul(product, generator, polynomial);
        }
        for n in 1..256 {
            if !seen[n] {
                return Err(Error::NotAGenerator(generator));
            }
        }

        debug!(polynomial = %polynomial, generator = %generator, "field tables built");
        Ok(Field {
            poly: polynomial,
            generator,
            exp_table,
            log_table,
        })
    }

    /// The additive zero of the field
    pub fn zero(&self) -> Num {
        Num(0)
    }

    /// The multiplicative unit of the field
    pub fn one(&self) -> Num {
        Num(1)
    }

    /// The generator used when defining the field
    pub fn generator(&self) -> Num {
        self.generator
    }

    /// The irreducible polynomial used when defining the field
    pub fn polynomial(&self) -> Irreducible {
        self.poly
    }

    /// The generator raised to the power `x`
    ///
    /// The exponent is reduced modulo 255 first (negative exponents wrap
    /// into [0, 255)), since the multiplicative group has order 255.
    pub fn exp(&self, x: i64) -> Num {
        self.exp_table[x.rem_euclid(GROUP_ORDER) as usize]
    }

    /// The discrete logarithm of `x` with respect to the generator
    ///
    /// Fails with [`Error::LogOfZero`] when `x` is zero.
    pub fn log(&self, x: Num) -> Result<i64, Error> {
        if x == self.zero() {
            return Err(Error::LogOfZero);
        }
        Ok(self.log_table[x.value() as usize])
    }

    /// The multiplicative inverse of `x`
    ///
    /// Fails with [`Error::InverseOfZero`] when `x` is zero.
    pub fn inv(&self, x: Num) -> Result<Num, Error> {
        if x == self.zero() {
            return Err(Error::InverseOfZero);
        }
        let log_x = self.log_table[x.value() as usize];
        Ok(self.exp(-log_x))
    }

    /// The sum of `x` and `y`
    ///
    /// Addition and subtraction coincide in characteristic 2: both are XOR.
    pub fn add(&self, x: Num, y: Num) -> Num {
        Num(x.value() ^ y.value())
    }

    /// The product of `x` and `y`
    pub fn mul(&self, x: Num, y: Num) -> Num {
        if x == self.zero() || y == self.zero() {
            return self.zero();
        }
        let log_x = self.log_table[x.value() as usize];
        let log_y = self.log_table[y.value() as usize];
        self.exp(log_x + log_y)
    }
}

/// Carryless multiplication of `x` and `y`, reduced modulo `poly`
///
/// Multiplies the two operands as polynomials over ℤ₂ via XOR-based
/// shift-and-add, then reduces by XORing in `poly` aligned to the top set
/// bit until the result fits in 8 bits. `poly` must have degree 8;
/// [`Field::new`] validates this before calling.
fn carryless_mul(x: Num, y: Num, poly: Irreducible) -> Num {
    let mut x = u32::from(x.value());
    let mut y = u32::from(y.value());
    let mut product = 0u32;
    while y != 0 {
        if y & 1 != 0 {
            product ^= x;
        }
        x <<= 1;
        y >>= 1;
    }
    let poly = u32::from(poly.bits());
    let poly_msb = poly.ilog2();
    while product >= 0x100 {
        product ^= poly << (product.ilog2() - poly_msb);
    }
    Num(product as u8)
}
