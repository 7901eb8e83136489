//! Animation controller and synchronized steps
//!
//! [`AnimationController`] owns the run flag, the [`StepClock`] and the
//! injected [`CursorSink`]. Operations do not talk to the controller
//! directly: [`AnimationController::start`] hands them an [`AnimationRun`]
//! bound to the current cancellation token, and every mutation goes through
//! that run. Once the run's token is cancelled, all of its mutators become
//! no-ops and its next [`AnimationRun::sync_step`] is skipped.
//!
//! # Synchronized steps
//!
//! A [`Step`] bundles a code line, a status message, an optional visual
//! effect, an optional memory effect and a pause multiplier. `sync_step`
//! publishes the line and status, runs both effects, and only then suspends.
//! Nothing is observed between the line update and the effects, so the code
//! pane and the array/memory panes always agree.

use super::cancel::{CancellationSource, CancellationToken};
use super::clock::{DelayOutcome, StepClock, TimeSource};
use crate::memory::stack::StackFrameSnapshot;
use crate::operations::OperationError;
use crate::scene::{CursorSink, ElementState, FoundIndex, IDLE_STATUS};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, trace};

/// A deferred mutation run as part of a [`Step`]
pub type Effect<'a> = Box<dyn FnOnce() + 'a>;

/// One synchronized step of an operation
pub struct Step<'a> {
    line: Option<usize>,
    status: String,
    visual: Option<Effect<'a>>,
    memory: Option<Effect<'a>>,
    multiplier: f32,
}

impl<'a> Step<'a> {
    /// A step highlighting `line` and showing `status`, pausing one speed unit
    pub fn new(line: Option<usize>, status: impl Into<String>) -> Self {
        Step {
            line,
            status: status.into(),
            visual: None,
            memory: None,
            multiplier: 1.0,
        }
    }

    /// Mutation of the element visual states or array contents
    pub fn visual(mut self, effect: impl FnOnce() + 'a) -> Self {
        self.visual = Some(Box::new(effect));
        self
    }

    /// Mutation of the simulated stack frame or heap
    pub fn memory(mut self, effect: impl FnOnce() + 'a) -> Self {
        self.memory = Some(Box::new(effect));
        self
    }

    /// Pause for `multiplier` speed units after the effects
    pub fn pause(mut self, multiplier: f32) -> Self {
        self.multiplier = multiplier;
        self
    }
}

/// What happened to a synchronized step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Effects applied and the full pause elapsed
    Ran,
    /// The run was already stopped; nothing was mutated
    Skipped,
    /// Effects applied, then the run was stopped during the pause
    Interrupted,
}

impl StepOutcome {
    /// Continue only after a step that ran to completion
    pub fn proceed(self) -> Result<(), OperationError> {
        match self {
            StepOutcome::Ran => Ok(()),
            StepOutcome::Skipped | StepOutcome::Interrupted => Err(OperationError::Interrupted),
        }
    }
}

/// Owns run/stop state and the channel into the presentation state
pub struct AnimationController {
    sink: Rc<RefCell<dyn CursorSink>>,
    clock: StepClock,
    run: RefCell<CancellationSource>,
}

impl AnimationController {
    /// Create a stopped controller publishing into `sink`
    pub fn new(
        sink: Rc<RefCell<dyn CursorSink>>,
        time: Rc<dyn TimeSource>,
        speed: Duration,
    ) -> Self {
        let run = CancellationSource::new();
        run.cancel();
        AnimationController {
            sink,
            clock: StepClock::new(time, speed),
            run: RefCell::new(run),
        }
    }

    /// Set the run flag and return a handle for the current run.
    ///
    /// Idempotent: while active, every call returns a handle to the same run.
    /// After a stop, a fresh token is issued so that handles from the old run
    /// stay cancelled.
    pub fn start(self: &Rc<Self>) -> AnimationRun {
        let mut run = self.run.borrow_mut();
        if run.is_cancelled() {
            *run = CancellationSource::new();
            debug!("animation run started");
        }
        AnimationRun {
            controller: Rc::clone(self),
            token: run.token(),
        }
    }

    /// Clear the run flag and cancel any pending delay. Safe when stopped.
    pub fn stop(&self) {
        let run = self.run.borrow();
        if !run.is_cancelled() {
            debug!("animation run stopped");
        }
        run.cancel();
        self.clock.cancel_pending();
    }

    pub fn is_active(&self) -> bool {
        !self.run.borrow().is_cancelled()
    }

    /// Stop, then return every cursor field to idle and show the idle message
    pub fn reset(&self) {
        self.reset_with_status(IDLE_STATUS);
    }

    /// Like [`reset`](Self::reset), but leave `status` on display
    pub fn reset_with_status(&self, status: impl Into<String>) {
        self.stop();
        let mut sink = self.sink.borrow_mut();
        sink.set_code_line(None);
        sink.set_active_element(None);
        sink.set_active_memory(None);
        sink.set_iteration(None);
        sink.set_found_index(FoundIndex::NotSearched);
        sink.clear_element_states();
        sink.set_stack_frame(None);
        sink.set_working_array(None);
        sink.set_status(status.into());
    }

    pub fn speed(&self) -> Duration {
        self.clock.speed()
    }

    /// Change the base speed for subsequent delays
    pub fn set_speed(&self, speed: Duration) {
        self.clock.set_speed(speed);
    }

    /// Whether a step is currently parked in its pause
    pub fn has_pending_delay(&self) -> bool {
        self.clock.has_pending()
    }

    pub(crate) fn sink(&self) -> &Rc<RefCell<dyn CursorSink>> {
        &self.sink
    }
}

/// A single run of an operation, bound to one cancellation token
#[derive(Clone)]
pub struct AnimationRun {
    controller: Rc<AnimationController>,
    token: CancellationToken,
}

impl AnimationRun {
    /// Whether this run may still mutate state
    pub fn is_active(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Run one synchronized step.
    ///
    /// Order: code line, status, visual effect, memory effect, pause.
    pub async fn sync_step(&self, step: Step<'_>) -> StepOutcome {
        if !self.is_active() {
            return StepOutcome::Skipped;
        }

        trace!(line = ?step.line, status = %step.status, "sync step");
        {
            let mut sink = self.controller.sink.borrow_mut();
            sink.set_code_line(step.line);
            sink.set_status(step.status);
        }
        if let Some(visual) = step.visual {
            visual();
        }
        if let Some(memory) = step.memory {
            memory();
        }

        match self.controller.clock.delay(&self.token, step.multiplier).await {
            DelayOutcome::Elapsed if self.is_active() => StepOutcome::Ran,
            _ => StepOutcome::Interrupted,
        }
    }

    fn with_sink(&self, f: impl FnOnce(&mut dyn CursorSink)) {
        if self.is_active() {
            f(&mut *self.controller.sink.borrow_mut());
        }
    }

    /// Make `index` the active element and memory cell and tag it with
    /// `state`. Tags left by earlier steps are dropped.
    pub fn highlight_element(&self, index: usize, state: ElementState) {
        self.with_sink(|sink| {
            sink.set_active_element(Some(index));
            sink.set_active_memory(Some(index));
            sink.clear_element_states();
            sink.set_element_state(index, state);
        });
    }

    /// Replace every element tag with `states` in one update
    pub fn set_element_states(&self, states: impl IntoIterator<Item = (usize, ElementState)>) {
        self.with_sink(|sink| {
            sink.clear_element_states();
            for (index, state) in states {
                sink.set_element_state(index, state);
            }
        });
    }

    pub fn clear_element_states(&self) {
        self.with_sink(|sink| sink.clear_element_states());
    }

    pub fn set_iteration(&self, iteration: usize) {
        self.with_sink(|sink| sink.set_iteration(Some(iteration)));
    }

    pub fn update_stack_frame(&self, frame: StackFrameSnapshot) {
        self.with_sink(|sink| sink.set_stack_frame(Some(frame)));
    }

    pub fn set_found_index(&self, found: FoundIndex) {
        self.with_sink(|sink| sink.set_found_index(found));
    }

    /// Commit new array contents
    pub fn set_array(&self, values: Vec<i64>) {
        self.with_sink(|sink| {
            sink.set_working_array(None);
            sink.set_array(values);
        });
    }

    /// Show an in-progress copy of the array without committing it
    pub fn set_working_array(&self, values: Vec<i64>) {
        self.with_sink(|sink| sink.set_working_array(Some(values)));
    }
}
