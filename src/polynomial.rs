//! Polynomials with coefficients in GF(2⁸)
//!
//! The ring operations are methods on [`Field`]: they are stateless apart
//! from the coefficient arithmetic the field provides, never mutate their
//! arguments, and always allocate fresh results.

use crate::field::{Field, Num};
use crate::Error;

/// A polynomial with coefficients in GF(2⁸)
///
/// Position i in the coefficient sequence holds the coefficient of term
/// xⁱ. The representation is not required to be normalized: trailing
/// zero coefficients at the high-degree end may be present, and the zero
/// polynomial may be represented by an empty sequence or by all-zero
/// coefficients. Every operation accepts both forms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polynomial {
    coefficients: Vec<Num>,
}

impl Polynomial {
    /// Create a polynomial from its coefficient sequence
    pub fn new(coefficients: Vec<Num>) -> Self {
        Polynomial { coefficients }
    }

    /// Create a polynomial from raw byte coefficients
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Polynomial {
            coefficients: bytes.iter().copied().map(Num::new).collect(),
        }
    }

    /// The canonical zero polynomial: a single zero coefficient
    pub fn zero() -> Self {
        Polynomial {
            coefficients: vec![Num::new(0)],
        }
    }

    /// The coefficient sequence, lowest degree first
    pub fn coefficients(&self) -> &[Num] {
        &self.coefficients
    }

    /// Number of stored coefficients (not the degree: trailing zeros count)
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// Whether the coefficient sequence is empty
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }
}

impl From<Vec<Num>> for Polynomial {
    fn from(coefficients: Vec<Num>) -> Self {
        Polynomial::new(coefficients)
    }
}

impl FromIterator<Num> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Num>>(iter: I) -> Self {
        Polynomial::new(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Polynomial {
    /// Renders the polynomial as a sum of terms from highest to lowest
    /// degree with bit-pattern coefficients, e.g.
    /// `x^5 + 10 x^4 + 10111 x^3 + x + 11111111`. Zero-coefficient terms
    /// are omitted; the all-zero polynomial renders as `0`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut terms = Vec::new();
        for power in (0..self.len()).rev() {
            let n = self.coefficients[power];
            if n == Num::new(0) {
                continue;
            }
            terms.push(join_term(&n.to_string(), power));
        }
        if terms.is_empty() {
            write!(f, "0")
        } else {
            write!(f, "{}", terms.join(" + "))
        }
    }
}

impl Field {
    /// Whether every coefficient of `p` is the field's zero
    ///
    /// True for the empty polynomial.
    pub fn is_identical_zero(&self, p: &Polynomial) -> bool {
        p.coefficients().iter().all(|&c| c == self.zero())
    }

    /// Strip redundant trailing zero coefficients from `p`
    ///
    /// The result always has at least one coefficient: normalizing the
    /// empty or all-zero polynomial yields [`Polynomial::zero`]. The input
    /// is not mutated.
    pub fn normalize(&self, p: &Polynomial) -> Polynomial {
        match p.coefficients().iter().rposition(|&c| c != self.zero()) {
            Some(i) => Polynomial::new(p.coefficients()[..=i].to_vec()),
            None => Polynomial::zero(),
        }
    }

    /// Evaluate the polynomial `p` at the point `x`
    ///
    /// Iterates coefficients from lowest degree upward, maintaining a
    /// running power of `x`. The empty polynomial evaluates to zero.
    pub fn evaluate_polynomial(&self, p: &Polynomial, x: Num) -> Num {
        let mut result = self.zero();
        let mut power = self.one();
        for &coefficient in p.coefficients() {
            result = self.add(result, self.mul(coefficient, power));
            power = self.mul(power, x);
        }
        result
    }

    /// The sum of `p1` and `p2`
    ///
    /// Coefficient-wise field addition; the result has
    /// `max(p1.len(), p2.len())` coefficients, with missing coefficients
    /// on the shorter operand treated as zero.
    pub fn add_polynomials(&self, p1: &Polynomial, p2: &Polynomial) -> Polynomial {
        let length = p1.len().max(p2.len());
        let mut sum = vec![self.zero(); length];
        for (i, coefficient) in sum.iter_mut().enumerate() {
            if let Some(&c) = p1.coefficients().get(i) {
                *coefficient = self.add(*coefficient, c);
            }
            if let Some(&c) = p2.coefficients().get(i) {
                *coefficient = self.add(*coefficient, c);
            }
        }
        Polynomial::new(sum)
    }

    /// The product of `p1` and `p2`
    ///
    /// Long multiplication using field addition and multiplication for
    /// the coefficients; the result has `p1.len() + p2.len() - 1`
    /// coefficients. If either operand is empty the convolution is
    /// undefined, and the canonical zero polynomial is returned.
    pub fn multiply_polynomials(&self, p1: &Polynomial, p2: &Polynomial) -> Polynomial {
        if p1.is_empty() || p2.is_empty() {
            return Polynomial::zero();
        }
        let mut product = vec![self.zero(); p1.len() + p2.len() - 1];
        for (i1, &n1) in p1.coefficients().iter().enumerate() {
            for (i2, &n2) in p2.coefficients().iter().enumerate() {
                product[i1 + i2] = self.add(product[i1 + i2], self.mul(n1, n2));
            }
        }
        Polynomial::new(product)
    }

    /// The quotient and remainder when dividing `nominator` by `denominator`
    ///
    /// Synthetic long division using field arithmetic for the
    /// coefficients. Fails with [`Error::DivisionByZeroPolynomial`] if the
    /// denominator is identically zero, regardless of its length. The
    /// denominator is normalized first so the leading coefficient used for
    /// division is non-zero; if the nominator then has fewer coefficients
    /// than the denominator, the quotient is the zero polynomial and the
    /// remainder is the nominator unchanged. The returned remainder is
    /// normalized; the quotient is not.
    pub fn divide_polynomials(
        &self,
        nominator: &Polynomial,
        denominator: &Polynomial,
    ) -> Result<(Polynomial, Polynomial), Error> {
        if self.is_identical_zero(denominator) {
            return Err(Error::DivisionByZeroPolynomial);
        }
        let denominator = self.normalize(denominator);
        if nominator.len() < denominator.len() {
            return Ok((Polynomial::zero(), nominator.clone()));
        }
        let mut remainder = nominator.coefficients().to_vec();
        let degree_diff = nominator.len() - denominator.len();
        let mut quotient = vec![self.zero(); degree_diff + 1];
        // Normalization guarantees a non-zero leading coefficient.
        let d_inv = self.inv(denominator.coefficients()[denominator.len() - 1])?;
        for i in (0..quotient.len()).rev() {
            quotient[i] = self.mul(remainder[i + denominator.len() - 1], d_inv);
            for (j, &n) in denominator.coefficients().iter().enumerate() {
                // Subtraction is addition in characteristic 2.
                remainder[i + j] = self.add(remainder[i + j], self.mul(quotient[i], n));
            }
        }
        let remainder = self.normalize(&Polynomial::new(remainder));
        Ok((Polynomial::new(quotient), remainder))
    }

    /// Render `p` with each coefficient expressed as a power of the
    /// field generator
    ///
    /// The coefficients g⁰ and g¹ render as `1` and `α`; the monomials
    /// x⁰ and x¹ render as `1` and `x`. Zero-coefficient terms are
    /// omitted and the all-zero polynomial renders as `0`.
    pub fn to_alpha_string(&self, p: &Polynomial) -> String {
        let mut terms = Vec::new();
        for power in (0..p.len()).rev() {
            let n = p.coefficients()[power];
            let Ok(log) = self.log(n) else {
                continue; // Zero coefficient: term omitted.
            };
            let coeff = match log {
                0 => "1".to_string(),
                1 => "α".to_string(),
                _ => format!("α^{}", log),
            };
            terms.push(join_term(&coeff, power));
        }
        if terms.is_empty() {
            "0".to_string()
        } else {
            terms.join(" + ")
        }
    }
}

/// Combine a rendered coefficient with the monomial for `power`
///
/// The unit coefficient is dropped in favor of the bare monomial, and the
/// degree-0 monomial is dropped in favor of the bare coefficient.
fn join_term(coeff: &str, power: usize) -> String {
    let monomial = match power {
        0 => "1".to_string(),
        1 => "x".to_string(),
        _ => format!("x^{}", power),
    };
    if coeff == "1" {
        monomial
    } else if power == 0 {
        coeff.to_string()
    } else {
        format!("{} {}", coeff, monomial)
    }
}
