//! Property tests for the Vector laws over bounded, finite components.
//!
//! Components stay within +/-1e6 so sums of a few vectors cannot overflow;
//! `mean_overflows_when_sum_exceeds_f64_max` in `vector_ops.rs` covers the
//! unbounded case.

use proptest::prelude::*;
use qlib_math::{ToleranceConfig, Vector};

const BOUND: f64 = 1e6;

fn components() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-BOUND..BOUND, 1..64)
}

fn equal_length_pair() -> impl Strategy<Value = (Vec<f64>, Vec<f64>)> {
    (1usize..64).prop_flat_map(|len| {
        (
            prop::collection::vec(-BOUND..BOUND, len),
            prop::collection::vec(-BOUND..BOUND, len),
        )
    })
}

fn vector(values: &[f64]) -> Vector {
    Vector::new(values.iter().copied()).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn float_components_are_kept_in_order(values in components()) {
        let a = vector(&values);
        prop_assert_eq!(a.get_components(), values.as_slice());
        prop_assert_eq!(a.get_number_of_components(), values.len());
    }

    #[test]
    fn integer_components_are_coerced(values in prop::collection::vec(any::<i32>(), 1..64)) {
        let a = Vector::new(values.iter().copied()).unwrap();
        let expected: Vec<f64> = values.iter().map(|&i| f64::from(i)).collect();
        prop_assert_eq!(a.to_vec(), expected);
    }

    #[test]
    fn subtract_restores_after_add((a, b) in equal_length_pair()) {
        let original = vector(&a);
        let other = vector(&b);
        let mut roundtrip = original.clone();
        roundtrip.add(&other).unwrap();
        roundtrip.subtract(&other).unwrap();

        // one rounding step of a sum bounded by 2e6 is below 1e-9
        let tolerance = ToleranceConfig::new(1e-9, 0.0).unwrap();
        prop_assert!(roundtrip.approx_eq(&original, &tolerance).unwrap());
    }

    #[test]
    fn add_is_commutative((a, b) in equal_length_pair()) {
        let va = vector(&a);
        let vb = vector(&b);
        prop_assert_eq!(va.add_copy(&vb).unwrap(), vb.add_copy(&va).unwrap());
    }

    #[test]
    fn scaling_by_one_and_zero(values in components()) {
        let original = vector(&values);

        let mut unchanged = original.clone();
        unchanged.multiply_with_scalar(&1).unwrap();
        prop_assert_eq!(&unchanged, &original);

        let mut zeroed = original.clone();
        zeroed.multiply_with_scalar(&0).unwrap();
        prop_assert_eq!(zeroed.get_number_of_components(), original.get_number_of_components());
        prop_assert!(zeroed.iter().all(|c| *c == 0.0));
    }

    #[test]
    fn sum_of_single_vector_is_itself(values in components()) {
        let a = vector(&values);
        prop_assert_eq!(Vector::sum_up_vectors(std::slice::from_ref(&a)).unwrap(), a);
    }

    #[test]
    fn mean_of_identical_vectors_is_itself(values in components()) {
        let a = vector(&values);
        let mean = Vector::mean_of_vectors(&[a.clone(), a.clone()]).unwrap();
        prop_assert_eq!(mean, a);
    }

    #[test]
    fn magnitude_is_root_of_sum_of_squares(values in components()) {
        let a = vector(&values);
        prop_assert_eq!(a.magnitude(), a.sum_of_squares().sqrt());
        prop_assert!(a.magnitude() >= 0.0);
    }

    #[test]
    fn distance_is_magnitude_of_difference_and_symmetric((a, b) in equal_length_pair()) {
        let va = vector(&a);
        let vb = vector(&b);
        let distance = va.distance(&vb).unwrap();
        prop_assert_eq!(distance, va.subtract_copy(&vb).unwrap().magnitude());
        prop_assert_eq!(distance, vb.distance(&va).unwrap());
    }
}
