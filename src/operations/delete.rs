//! Shift-left deletion
//!
//! Elements after the deleted one move one slot left, then the duplicated
//! last slot is dropped.

use super::listings::{listing, Marker};
use super::{element_range, parse_index, OperationError, OperationOutcome, OperationRequest};
use crate::animation::controller::{AnimationRun, Step};
use crate::memory::stack::StackFrameSnapshot;
use crate::scene::ElementState;

/// `arr` after every element past `index` moved one slot left.
/// The last slot still holds its old value.
pub fn shifted_left(arr: &[i64], index: usize) -> Vec<i64> {
    let mut shifted = arr.to_vec();
    if index < shifted.len() {
        shifted[index..].rotate_left(1);
        if let (Some(last), Some(&old_last)) = (shifted.last_mut(), arr.last()) {
            *last = old_last;
        }
    }
    shifted
}

pub async fn delete(
    run: &AnimationRun,
    request: &OperationRequest,
) -> Result<OperationOutcome, OperationError> {
    let arr = &request.array;
    let len = arr.len();
    let index = parse_index(request.operation, &request.params.index, element_range(len))?;
    let value = arr[index];
    let code = listing(request.operation, request.language);
    let frame = || {
        StackFrameSnapshot::new(code.function_name)
            .local("index", index)
            .local("n", len)
    };

    run.sync_step(
        Step::new(
            code.line_of(Marker::Signature),
            format!("Deleting arr[{}] = {}", index, value),
        )
        .memory(|| run.update_stack_frame(frame())),
    )
    .await
    .proceed()?;

    run.sync_step(
        Step::new(
            code.line_of(Marker::BoundsCheck),
            format!("Bounds check: 0 <= {} < {}, marking {} for removal", index, len, value),
        )
        .visual(|| run.highlight_element(index, ElementState::Deleting)),
    )
    .await
    .proceed()?;

    if index + 1 < len {
        run.sync_step(
            Step::new(
                code.line_of(Marker::ShiftLoop),
                format!("Shifting {} element(s) one slot left", len - index - 1),
            )
            .visual(|| {
                run.set_element_states((index + 1..len).map(|i| (i, ElementState::Shifting)))
            }),
        )
        .await
        .proceed()?;

        let shifted = shifted_left(arr, index);
        run.sync_step(
            Step::new(
                code.line_of(Marker::ShiftMove),
                format!("arr[i] = arr[i + 1] for i = {} to {}", index, len - 2),
            )
            .visual(|| {
                run.set_working_array(shifted);
                run.set_element_states((index..len - 1).map(|i| (i, ElementState::Shifted)));
            })
            .memory(|| run.update_stack_frame(frame().local("i", len - 2)))
            .pause(1.5),
        )
        .await
        .proceed()?;
    }

    let mut remaining = arr.clone();
    remaining.remove(index);
    let new_len = remaining.len();
    run.sync_step(
        Step::new(
            code.line_of(Marker::Resize),
            format!("Dropped the last slot, length is now {}", new_len),
        )
        .visual(|| {
            run.set_array(remaining);
            run.clear_element_states();
        })
        .memory(|| run.update_stack_frame(frame().local("n", new_len)))
        .pause(1.5),
    )
    .await
    .proceed()?;

    Ok(OperationOutcome::Deleted {
        index,
        value,
        len: new_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{index as at, Harness};
    use crate::operations::Operation;

    #[test]
    fn test_shifted_left_duplicates_last_slot() {
        assert_eq!(shifted_left(&[10, 20, 30, 40], 1), vec![10, 30, 40, 40]);
        assert_eq!(shifted_left(&[10, 20, 30], 2), vec![10, 20, 30]);
        assert_eq!(shifted_left(&[7], 0), vec![7]);
    }

    #[test]
    fn test_delete_in_the_middle() {
        let mut harness = Harness::new(vec![10, 20, 30, 40]);
        let request = harness.request(Operation::Delete, at(2));
        assert_eq!(
            harness.run(request),
            Ok(OperationOutcome::Deleted { index: 2, value: 30, len: 3 })
        );
        assert_eq!(harness.array(), vec![10, 20, 40]);
    }

    #[test]
    fn test_delete_last_skips_shift_phase() {
        let mut harness = Harness::new(vec![1, 2, 3]);
        let last = harness.count_steps(harness.request(Operation::Delete, at(2)));
        assert_eq!(harness.array(), vec![1, 2]);
        let first = harness.count_steps(harness.request(Operation::Delete, at(0)));
        assert_eq!(harness.array(), vec![2]);
        assert_eq!(first, last + 2);
    }

    #[test]
    fn test_delete_down_to_empty_then_reject() {
        let mut harness = Harness::new(vec![5]);
        let request = harness.request(Operation::Delete, at(0));
        assert!(harness.run(request).is_ok());
        assert!(harness.array().is_empty());

        let request = harness.request(Operation::Delete, at(0));
        assert_eq!(
            harness.run(request),
            Err(OperationError::EmptyArray { index: 0 })
        );
    }

    #[test]
    fn test_delete_rejects_negative_index() {
        let mut harness = Harness::new(vec![1, 2, 3]);
        let request = harness.request(Operation::Delete, at(-1));
        assert!(matches!(
            harness.run(request),
            Err(OperationError::IndexOutOfRange { index: -1, .. })
        ));
        assert_eq!(harness.array(), vec![1, 2, 3]);
    }
}
