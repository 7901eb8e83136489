//! Shift-right insertion
//!
//! Elements from the insertion point to the end move one slot right, then the
//! new value is written into the gap. Appending skips the shift phase.

use super::listings::{listing, Marker};
use super::{parse_index, parse_int, OperationError, OperationOutcome, OperationRequest, ParamField};
use crate::animation::controller::{AnimationRun, Step};
use crate::memory::stack::StackFrameSnapshot;
use crate::scene::ElementState;

/// `arr` after every element at `index..` moved one slot right.
/// The slot at `index` still holds its old value.
pub fn shifted_right(arr: &[i64], index: usize) -> Vec<i64> {
    let mut shifted = arr.to_vec();
    if let Some(&value) = arr.get(index) {
        shifted.insert(index, value);
    }
    shifted
}

pub async fn insert(
    run: &AnimationRun,
    request: &OperationRequest,
) -> Result<OperationOutcome, OperationError> {
    let arr = &request.array;
    let len = arr.len();
    let index = parse_index(request.operation, &request.params.index, Some(0..=len))?;
    let value = parse_int(ParamField::Value, &request.params.value)?;
    let fixed_capacity = request.language.is_fixed_capacity();
    if fixed_capacity && len >= request.capacity {
        return Err(OperationError::CapacityExceeded {
            capacity: request.capacity,
        });
    }

    let code = listing(request.operation, request.language);
    let frame = || {
        StackFrameSnapshot::new(code.function_name)
            .local("index", index)
            .local("value", value)
            .local("n", len)
    };

    run.sync_step(
        Step::new(
            code.line_of(Marker::Signature),
            format!("Inserting {} at index {}", value, index),
        )
        .memory(|| run.update_stack_frame(frame())),
    )
    .await
    .proceed()?;

    if fixed_capacity {
        run.sync_step(
            Step::new(
                code.line_of(Marker::CapacityCheck),
                format!("Capacity check: {} < {}", len, request.capacity),
            )
            .pause(0.5),
        )
        .await
        .proceed()?;
    }

    let mut working = arr.clone();
    if index < len {
        run.sync_step(
            Step::new(
                code.line_of(Marker::ShiftLoop),
                format!("Shifting {} element(s) one slot right", len - index),
            )
            .visual(|| run.set_element_states((index..len).map(|i| (i, ElementState::Shifting)))),
        )
        .await
        .proceed()?;

        working = shifted_right(arr, index);
        let shifted = working.clone();
        run.sync_step(
            Step::new(
                code.line_of(Marker::ShiftMove),
                format!("arr[i] = arr[i - 1] for i = {} down to {}", len, index + 1),
            )
            .visual(|| {
                run.set_working_array(shifted);
                run.set_element_states((index + 1..=len).map(|i| (i, ElementState::Shifted)));
            })
            .memory(|| run.update_stack_frame(frame().local("i", index + 1)))
            .pause(1.5),
        )
        .await
        .proceed()?;
    } else {
        working.push(value);
    }

    working[index] = value;
    let new_len = working.len();
    run.sync_step(
        Step::new(
            code.line_of(Marker::Write),
            format!("arr[{}] = {}", index, value),
        )
        .visual(|| {
            run.set_array(working);
            run.highlight_element(index, ElementState::Inserted);
        }),
    )
    .await
    .proceed()?;

    run.sync_step(
        Step::new(
            code.line_of(Marker::Resize),
            format!("Insert complete, length is now {}", new_len),
        )
        .memory(|| run.update_stack_frame(frame().local("n", new_len)))
        .pause(1.5),
    )
    .await
    .proceed()?;

    Ok(OperationOutcome::Inserted {
        index,
        value,
        len: new_len,
    })
}
