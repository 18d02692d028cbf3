//! Property-based tests for the evaluator and the session store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use recall_calc::core::{evaluate, EvalError, Operation, SessionStore};

prop_compose! {
    fn arbitrary_operation()(variant in 0..5usize) -> Operation {
        Operation::ALL[variant]
    }
}

fn finite() -> impl Strategy<Value = f64> {
    -1.0e9..1.0e9f64
}

fn non_zero() -> impl Strategy<Value = f64> {
    finite().prop_filter("divisor must be non-zero", |v| *v != 0.0)
}

proptest! {
    #[test]
    fn divide_matches_float_division(a in finite(), b in non_zero()) {
        prop_assert_eq!(evaluate(a, b, '/'), Ok(a / b));
    }

    #[test]
    fn modulo_matches_float_remainder(a in finite(), b in non_zero()) {
        let result = evaluate(a, b, '%').unwrap();
        prop_assert_eq!(result, a % b);
        prop_assert!(result.abs() < b.abs());
        prop_assert!(result == 0.0 || result.signum() == a.signum());
    }

    #[test]
    fn zero_divisor_always_fails(a in finite()) {
        prop_assert_eq!(evaluate(a, 0.0, '/'), Err(EvalError::DivisionByZero));
        prop_assert_eq!(evaluate(a, 0.0, '%'), Err(EvalError::ModuloByZero));
    }

    #[test]
    fn evaluation_is_deterministic(a in finite(), b in finite(), op in arbitrary_operation()) {
        prop_assert_eq!(op.apply(a, b), op.apply(a, b));
    }

    #[test]
    fn create_session_appends_seeded_record(
        seeds in prop::collection::vec(finite(), 1..8)
    ) {
        let mut store = SessionStore::new();

        for (i, seed) in seeds.iter().enumerate() {
            let handle = store.create_session(*seed);
            prop_assert_eq!(handle.index(), i + 1);
            prop_assert_eq!(store.list_summaries().last().copied(), Some((i + 1, *seed)));
            prop_assert_eq!(store.get_steps(handle.index()).unwrap().len(), 1);
            prop_assert!(store.get_steps(handle.index()).unwrap()[0].starts_with("Start: "));
        }

        let indices: Vec<usize> = store.list_summaries().iter().map(|(i, _)| *i).collect();
        let expected: Vec<usize> = (1..=seeds.len()).collect();
        prop_assert_eq!(indices, expected);
    }

    #[test]
    fn running_result_tracks_successful_steps(
        seed in finite(),
        steps in prop::collection::vec((arbitrary_operation(), finite()), 0..12)
    ) {
        let mut store = SessionStore::new();
        let handle = store.create_session(seed);

        for (op, operand) in steps {
            let previous = store.active_result().unwrap();
            let before = store.get_steps(handle.index()).unwrap().len();

            match op.apply(previous, operand) {
                Ok(result) => {
                    store.append_step(previous, op, operand, result).unwrap();
                    prop_assert_eq!(store.get_steps(handle.index()).unwrap().len(), before + 1);
                    prop_assert!(
                        store.active_result() == Some(result)
                            || (result.is_nan() && store.active_result().is_some_and(f64::is_nan))
                    );
                }
                Err(_) => {
                    prop_assert_eq!(store.get_steps(handle.index()).unwrap().len(), before);
                    prop_assert!(
                        store.active_result() == Some(previous)
                            || (previous.is_nan() && store.active_result().is_some_and(f64::is_nan))
                    );
                }
            }
        }
    }

    #[test]
    fn out_of_range_indices_fail(count in 1..6usize, extra in 1..100usize) {
        let mut store = SessionStore::new();
        for seed in 0..count {
            store.create_session(seed as f64);
        }

        prop_assert!(store.get_steps(0).is_err());
        prop_assert!(store.get_steps(count + extra).is_err());
        prop_assert!(store.get_steps(count).is_ok());
    }
}
