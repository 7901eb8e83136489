//! Property-based tests for the array operations.
//!
//! Verifies:
//! 1. Search reports the leftmost match, or not-found when absent
//! 2. Insert at any legal index matches `Vec::insert`
//! 3. Delete at any legal index matches `Vec::remove`
//! 4. Illegal indices are rejected with the array untouched
//! 5. Every run ends with an idle scene, and resetting again changes nothing

use arrayviz::harness::{index, index_value, target, Harness};
use arrayviz::operations::{Operation, OperationError, OperationOutcome};
use proptest::prelude::*;

fn arb_array(min_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(1i64..=99, min_len..=10)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn search_reports_leftmost_match(array in arb_array(0), needle in 1i64..=99) {
        let mut harness = Harness::new(array.clone());
        let request = harness.request(Operation::Search, target(needle));
        let expected = match array.iter().position(|&v| v == needle) {
            Some(index) => OperationOutcome::Found { target: needle, index },
            None => OperationOutcome::NotFound { target: needle },
        };
        prop_assert_eq!(harness.run(request), Ok(expected));
        prop_assert_eq!(harness.array(), array);
    }

    #[test]
    fn insert_matches_vec_insert(
        (array, at) in arb_array(0).prop_flat_map(|a| {
            let len = a.len();
            (Just(a), 0..=len)
        }),
        value in -1000i64..1000,
    ) {
        let mut harness = Harness::new(array.clone());
        let request = harness.request(Operation::Insert, index_value(at, value));
        let mut expected = array;
        expected.insert(at, value);

        prop_assert!(harness.run(request).is_ok());
        prop_assert_eq!(harness.array(), expected);
    }

    #[test]
    fn delete_matches_vec_remove(
        (array, at) in arb_array(1).prop_flat_map(|a| {
            let len = a.len();
            (Just(a), 0..len)
        }),
    ) {
        let mut harness = Harness::new(array.clone());
        let request = harness.request(Operation::Delete, index(at));
        let mut expected = array;
        let removed = expected.remove(at);

        prop_assert_eq!(
            harness.run(request),
            Ok(OperationOutcome::Deleted { index: at, value: removed, len: expected.len() })
        );
        prop_assert_eq!(harness.array(), expected);
    }

    #[test]
    fn illegal_index_is_rejected_untouched(array in arb_array(0), offset in 0i64..5) {
        let len = array.len() as i64;
        for (operation, bad) in [
            (Operation::Access, len + offset),
            (Operation::Delete, -1 - offset),
        ] {
            let mut harness = Harness::new(array.clone());
            let request = harness.request(operation, index(bad));
            let rejected = matches!(
                harness.run(request),
                Err(OperationError::IndexOutOfRange { .. }) | Err(OperationError::EmptyArray { .. })
            );
            prop_assert!(rejected);
            prop_assert_eq!(harness.array(), array.clone());
        }
    }

    #[test]
    fn runs_end_idle_and_reset_is_idempotent(array in arb_array(1), needle in 1i64..=99) {
        let mut harness = Harness::new(array);
        let request = harness.request(Operation::Search, target(needle));
        let _ = harness.run(request);
        prop_assert!(harness.scene.borrow().is_idle());

        harness.controller.reset();
        let once = harness.scene.borrow().cursor().clone();
        harness.controller.reset();
        prop_assert_eq!(harness.scene.borrow().cursor().clone(), once);
        prop_assert!(harness.scene.borrow().is_idle());
    }
}
