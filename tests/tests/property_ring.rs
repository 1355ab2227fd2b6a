//! Property-based tests for the lattice algebra

use latcrypt_algorithms::{ModularInteger, RingElement, RingMatrix};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

/// A modulus together with two polynomials of equal length
fn ring_pair() -> impl Strategy<Value = (i64, Vec<i64>, Vec<i64>)> {
    (2i64..=97, 1usize..=8).prop_flat_map(|(q, n)| {
        (
            Just(q),
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
        )
    })
}

fn ring_triple() -> impl Strategy<Value = (i64, Vec<i64>, Vec<i64>, Vec<i64>)> {
    (2i64..=97, 1usize..=8).prop_flat_map(|(q, n)| {
        (
            Just(q),
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
            prop::collection::vec(-1000i64..1000, n),
        )
    })
}

proptest! {
    #[test]
    fn modular_reduction_is_canonical(q in 2i64..=1_000_000, v in any::<i64>()) {
        let x = ModularInteger::new(q, v).unwrap();
        prop_assert!((0..q).contains(&x.value()));
        prop_assert_eq!((x.value() as i128 - v as i128).rem_euclid(q as i128), 0);
    }

    #[test]
    fn symmetric_form_keeps_residue(q in 2i64..=10_000, v in any::<i64>()) {
        let x = ModularInteger::new(q, v).unwrap();
        let s = x.to_symmetric();
        // Even q: [-q/2, q/2 - 1]; odd q: [-(q-1)/2, (q-1)/2]
        let upper = if q % 2 == 0 { q / 2 - 1 } else { q / 2 };
        prop_assert!(-(q / 2) <= s.value() && s.value() <= upper);
        prop_assert_eq!((s.value() - x.value()).rem_euclid(q), 0);
        prop_assert_eq!(s.to_symmetric(), s);
    }

    #[test]
    fn round_yields_a_bit(q in 2i64..=10_000, v in any::<i64>()) {
        let bit = ModularInteger::new(q, v).unwrap().round().value();
        prop_assert!(bit == 0 || bit == 1);
    }

    #[test]
    fn ring_mul_commutes((q, a, b) in ring_pair()) {
        let a = RingElement::new(q, &a).unwrap();
        let b = RingElement::new(q, &b).unwrap();
        prop_assert_eq!(a.mul(&b).unwrap(), b.mul(&a).unwrap());
    }

    #[test]
    fn ring_mul_distributes((q, a, b, c) in ring_triple()) {
        let a = RingElement::new(q, &a).unwrap();
        let b = RingElement::new(q, &b).unwrap();
        let c = RingElement::new(q, &c).unwrap();

        let lhs = a.mul(&b.add(&c).unwrap()).unwrap();
        let rhs = a.mul(&b).unwrap().add(&a.mul(&c).unwrap()).unwrap();
        prop_assert_eq!(lhs, rhs);
    }

    #[test]
    fn ring_ops_stay_closed((q, a, b) in ring_pair()) {
        let n = a.len();
        let a = RingElement::new(q, &a).unwrap();
        let b = RingElement::new(q, &b).unwrap();

        for result in [a.add(&b).unwrap(), a.sub(&b).unwrap(), a.mul(&b).unwrap()] {
            prop_assert_eq!(result.n(), n);
            prop_assert_eq!(result.q(), q);
            prop_assert!(result.values().iter().all(|c| (0..q).contains(c)));
        }
    }

    #[test]
    fn transpose_is_an_involution(
        rows in 1usize..=4,
        cols in 1usize..=4,
        n in 1usize..=8,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let m = RingMatrix::random_uniform(rows, cols, 3329, n, &mut rng).unwrap();
        let t = m.transpose();
        prop_assert_eq!(t.shape(), (cols, rows));
        prop_assert_eq!(t.transpose(), m);
    }

    #[test]
    fn mat_mul_shape_and_transpose_law(
        rows in 1usize..=3,
        inner in 1usize..=3,
        cols in 1usize..=3,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let a = RingMatrix::random_uniform(rows, inner, 17, 4, &mut rng).unwrap();
        let b = RingMatrix::random_uniform(inner, cols, 17, 4, &mut rng).unwrap();

        let ab = a.mat_mul(&b).unwrap();
        prop_assert_eq!(ab.shape(), (rows, cols));
        // (A·B)ᵀ = Bᵀ·Aᵀ since the ring is commutative
        prop_assert_eq!(ab.transpose(), b.transpose().mat_mul(&a.transpose()).unwrap());
    }
}
