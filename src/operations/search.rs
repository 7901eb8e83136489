//! Linear search: scan left to right, first match wins

use super::listings::{listing, Marker};
use super::{parse_int, OperationError, OperationOutcome, OperationRequest, ParamField};
use crate::animation::controller::{AnimationRun, Step};
use crate::memory::stack::StackFrameSnapshot;
use crate::scene::{ElementState, FoundIndex};

pub async fn search(
    run: &AnimationRun,
    request: &OperationRequest,
) -> Result<OperationOutcome, OperationError> {
    let target = parse_int(ParamField::Target, &request.params.target)?;
    let code = listing(request.operation, request.language);
    let arr = &request.array;
    let frame = || StackFrameSnapshot::new(code.function_name).local("target", target);

    run.sync_step(
        Step::new(
            code.line_of(Marker::Signature),
            format!("Searching for {} in {} elements", target, arr.len()),
        )
        .memory(|| run.update_stack_frame(frame().local("n", arr.len()))),
    )
    .await
    .proceed()?;

    for (i, &value) in arr.iter().enumerate() {
        run.sync_step(
            Step::new(code.line_of(Marker::LoopHead), format!("Loop iteration: i = {}", i))
                .visual(|| run.set_iteration(i))
                .pause(0.5),
        )
        .await
        .proceed()?;

        run.sync_step(
            Step::new(
                code.line_of(Marker::LoopHead),
                format!("Checking arr[{}] = {}", i, value),
            )
            .visual(|| run.highlight_element(i, ElementState::Checking))
            .memory(|| run.update_stack_frame(frame().local("i", i).local("arr[i]", value))),
        )
        .await
        .proceed()?;

        run.sync_step(Step::new(
            code.line_of(Marker::Compare),
            format!("Comparing arr[{}] ({}) == target ({})", i, value, target),
        ))
        .await
        .proceed()?;

        if value == target {
            run.sync_step(
                Step::new(
                    code.line_of(Marker::ReturnFound),
                    format!("Found {} at index {}!", target, i),
                )
                .visual(|| run.highlight_element(i, ElementState::Found))
                .memory(|| run.set_found_index(FoundIndex::At(i)))
                .pause(1.5),
            )
            .await
            .proceed()?;

            return Ok(OperationOutcome::Found { target, index: i });
        }

        run.sync_step(
            Step::new(
                code.line_of(Marker::Compare),
                format!("{} != {}, moving on", value, target),
            )
            .visual(|| run.set_element_states([(i, ElementState::Checked)]))
            .pause(0.5),
        )
        .await
        .proceed()?;
    }

    run.sync_step(
        Step::new(
            code.line_of(Marker::ReturnMissing),
            format!("{} not found, returning -1", target),
        )
        .memory(|| run.set_found_index(FoundIndex::Absent))
        .pause(1.5),
    )
    .await
    .proceed()?;

    Ok(OperationOutcome::NotFound { target })
}
