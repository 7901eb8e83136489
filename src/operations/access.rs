//! Constant-time access: compute the element's address and read it

use super::listings::{listing, Marker};
use super::{element_range, parse_index, OperationError, OperationOutcome, OperationRequest};
use crate::animation::controller::{AnimationRun, Step};
use crate::memory::stack::StackFrameSnapshot;
use crate::memory::{element_address, format_address, BASE_ADDRESS, INT_SIZE};
use crate::scene::ElementState;

pub async fn access(
    run: &AnimationRun,
    request: &OperationRequest,
) -> Result<OperationOutcome, OperationError> {
    let arr = &request.array;
    let index = parse_index(request.operation, &request.params.index, element_range(arr.len()))?;
    let value = arr[index];
    let address = element_address(index);
    let code = listing(request.operation, request.language);

    run.sync_step(
        Step::new(code.line_of(Marker::Signature), format!("Accessing arr[{}]", index))
            .memory(|| {
                run.update_stack_frame(
                    StackFrameSnapshot::new(code.function_name).local("index", index),
                )
            }),
    )
    .await
    .proceed()?;

    run.sync_step(
        Step::new(
            code.line_of(Marker::BoundsCheck),
            format!("Bounds check: 0 <= {} < {}", index, arr.len()),
        )
        .pause(0.5),
    )
    .await
    .proceed()?;

    run.sync_step(
        Step::new(
            code.line_of(Marker::Read),
            format!(
                "Address = {} + {} * {} = {}",
                format_address(BASE_ADDRESS),
                index,
                INT_SIZE,
                format_address(address)
            ),
        )
        .visual(|| run.highlight_element(index, ElementState::Accessed))
        .memory(|| {
            run.update_stack_frame(
                StackFrameSnapshot::new(code.function_name)
                    .local("index", index)
                    .local("value", value)
                    .local("&arr[index]", format_address(address)),
            )
        }),
    )
    .await
    .proceed()?;

    run.sync_step(
        Step::new(
            code.line_of(Marker::ReturnValue),
            format!("arr[{}] = {} (one step, no matter the size)", index, value),
        )
        .pause(1.5),
    )
    .await
    .proceed()?;

    Ok(OperationOutcome::Accessed { index, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harness::{index as at, Harness};
    use crate::operations::Operation;

    #[test]
    fn test_access_reads_value() {
        let mut harness = Harness::new(vec![10, 20, 30]);
        let request = harness.request(Operation::Access, at(1));
        assert_eq!(
            harness.run(request),
            Ok(OperationOutcome::Accessed { index: 1, value: 20 })
        );
        assert_eq!(harness.array(), vec![10, 20, 30]);
    }

    #[test]
    fn test_access_out_of_bounds_is_rejected_without_steps() {
        let mut harness = Harness::new(vec![1, 2, 3]);
        let request = harness.request(Operation::Access, at(5));
        assert_eq!(harness.count_steps(request.clone()), 0);
        assert!(matches!(
            harness.run(request),
            Err(OperationError::IndexOutOfRange { index: 5, .. })
        ));
        assert_eq!(harness.array(), vec![1, 2, 3]);
        assert!(harness.scene.borrow().cursor().status.starts_with("Invalid index 5"));
    }

    #[test]
    fn test_access_frame_carries_computed_address() {
        let mut harness = Harness::new(vec![4, 5, 6, 7]);
        let request = harness.request(Operation::Access, at(3));
        harness.start(request);
        harness.begin();
        harness.step();
        harness.step();

        let scene = harness.scene.borrow();
        assert_eq!(scene.element_state(3), Some(ElementState::Accessed));
        let frame = scene.stack_frame().expect("frame published");
        assert_eq!(frame.get("value"), Some("7"));
        assert_eq!(frame.get("&arr[index]"), Some("0x1000000c"));
    }
}
