//! Property tests for the polynomial ring over GF(2⁸)

use gf256::{Field, Irreducible, Num, Polynomial};
use proptest::prelude::*;

fn canonical() -> Field {
    Field::new(Irreducible::new(0x11d), Num::new(0x02)).expect("canonical field")
}

fn poly(max_len: usize) -> impl Strategy<Value = Polynomial> {
    proptest::collection::vec(any::<u8>(), 0..max_len)
        .prop_map(|bytes| Polynomial::from_bytes(&bytes))
}

proptest! {
    #[test]
    fn addition_is_commutative(p1 in poly(16), p2 in poly(16)) {
        let f = canonical();
        prop_assert_eq!(f.add_polynomials(&p1, &p2), f.add_polynomials(&p2, &p1));
    }

    #[test]
    fn multiplication_is_commutative(p1 in poly(12), p2 in poly(12)) {
        let f = canonical();
        prop_assert_eq!(
            f.multiply_polynomials(&p1, &p2),
            f.multiply_polynomials(&p2, &p1)
        );
    }

    #[test]
    fn normalize_is_idempotent_and_never_grows(p in poly(16)) {
        let f = canonical();
        let once = f.normalize(&p);
        prop_assert!(!once.is_empty(), "normalize always leaves a coefficient");
        prop_assert!(once.len() <= p.len().max(1));
        prop_assert_eq!(f.normalize(&once), once);
    }

    #[test]
    fn evaluation_is_a_ring_homomorphism(p1 in poly(12), p2 in poly(12), x: u8) {
        let f = canonical();
        let x = Num::new(x);
        let sum = f.add_polynomials(&p1, &p2);
        prop_assert_eq!(
            f.evaluate_polynomial(&sum, x),
            f.add(f.evaluate_polynomial(&p1, x), f.evaluate_polynomial(&p2, x))
        );
        let product = f.multiply_polynomials(&p1, &p2);
        prop_assert_eq!(
            f.evaluate_polynomial(&product, x),
            f.mul(f.evaluate_polynomial(&p1, x), f.evaluate_polynomial(&p2, x))
        );
    }

    /// Synthetic division identity: nominator == quotient × denominator + remainder.
    #[test]
    fn division_round_trips(nominator in poly(16), denominator in poly(8)) {
        let f = canonical();
        prop_assume!(!f.is_identical_zero(&denominator));

        let (quotient, remainder) = f
            .divide_polynomials(&nominator, &denominator)
            .expect("denominator is non-zero");
        let recombined = f.add_polynomials(
            &f.multiply_polynomials(&quotient, &denominator),
            &remainder,
        );
        prop_assert_eq!(f.normalize(&recombined), f.normalize(&nominator));
    }

    #[test]
    fn remainder_degree_is_below_denominator_degree(
        nominator in poly(16),
        denominator in poly(8),
    ) {
        let f = canonical();
        prop_assume!(!f.is_identical_zero(&denominator));

        let normalized_denominator = f.normalize(&denominator);
        let (_, remainder) = f
            .divide_polynomials(&nominator, &denominator)
            .expect("denominator is non-zero");
        if !f.is_identical_zero(&remainder) {
            prop_assert!(f.normalize(&remainder).len() < normalized_denominator.len());
        }
    }

    #[test]
    fn division_by_zero_is_rejected(nominator in poly(16), len in 0usize..8) {
        let f = canonical();
        let zeros = Polynomial::new(vec![f.zero(); len]);
        prop_assert!(f.divide_polynomials(&nominator, &zeros).is_err());
    }
}
