//! Deterministic driver for operations
//!
//! [`Harness`] wires a [`Scene`], an [`AnimationController`] on a
//! [`ManualTime`] clock and a [`Runner`] together so an operation can be
//! advanced one synchronized step at a time, stopped at any step boundary,
//! and inspected in between. The unit and integration tests are built on it.

use crate::animation::clock::ManualTime;
use crate::animation::controller::AnimationController;
use crate::animation::runner::{Runner, RunnerState};
use crate::config::Language;
use crate::operations::{
    run_operation, Operation, OperationError, OperationOutcome, OperationParams, OperationRequest,
};
use crate::scene::Scene;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Step speed used by the harness; the pause of any step is at most twice this
pub const HARNESS_SPEED: Duration = Duration::from_millis(100);

type ResultSlot = Rc<RefCell<Option<Result<OperationOutcome, OperationError>>>>;

pub struct Harness {
    pub time: Rc<ManualTime>,
    pub scene: Rc<RefCell<Scene>>,
    pub controller: Rc<AnimationController>,
    pub runner: Runner,
    result: ResultSlot,
}

impl Harness {
    pub fn new(array: Vec<i64>) -> Self {
        let time = Rc::new(ManualTime::new());
        let scene = Rc::new(RefCell::new(Scene::new(array)));
        let controller = Rc::new(AnimationController::new(
            scene.clone(),
            time.clone(),
            HARNESS_SPEED,
        ));
        let runner = Runner::new(controller.clone());
        Harness {
            time,
            scene,
            controller,
            runner,
            result: Rc::new(RefCell::new(None)),
        }
    }

    /// Build a request against the scene's current array
    pub fn request(&self, operation: Operation, params: OperationParams) -> OperationRequest {
        OperationRequest {
            operation,
            array: self.array(),
            params,
            language: Language::Python,
            capacity: crate::config::MAX_ARRAY_SIZE,
        }
    }

    /// Start `request`, replacing whatever was running
    pub fn start(&mut self, request: OperationRequest) {
        let controller = self.controller.clone();
        let slot = self.result.clone();
        slot.borrow_mut().take();
        self.runner.spawn(async move {
            let result = run_operation(controller, request).await;
            *slot.borrow_mut() = Some(result);
        });
    }

    /// Run up to and including the effects of the first step
    pub fn begin(&mut self) -> RunnerState {
        self.runner.poll()
    }

    /// Let the pending pause elapse and run the next step's effects
    pub fn step(&mut self) -> RunnerState {
        self.time.advance(HARNESS_SPEED * 2);
        self.runner.poll()
    }

    /// Start `request` and drive it to the end
    pub fn run(&mut self, request: OperationRequest) -> Result<OperationOutcome, OperationError> {
        self.start(request);
        let mut state = self.begin();
        while state == RunnerState::Running {
            state = self.step();
        }
        self.take_result()
            .unwrap_or(Err(OperationError::Interrupted))
    }

    /// Number of synchronized steps `request` takes when left alone
    pub fn count_steps(&mut self, request: OperationRequest) -> usize {
        self.start(request);
        let mut steps = 0;
        let mut state = self.begin();
        while state == RunnerState::Running {
            steps += 1;
            state = self.step();
        }
        steps
    }

    pub fn take_result(&self) -> Option<Result<OperationOutcome, OperationError>> {
        self.result.borrow_mut().take()
    }

    /// The committed array
    pub fn array(&self) -> Vec<i64> {
        self.scene.borrow().array().to_vec()
    }

    /// Replace the committed array between runs
    pub fn set_array(&self, values: Vec<i64>) {
        use crate::scene::CursorSink;
        self.scene.borrow_mut().set_array(values);
    }
}

/// Parameters for a search
pub fn target(value: impl ToString) -> OperationParams {
    OperationParams {
        target: value.to_string(),
        ..OperationParams::default()
    }
}

/// Parameters for access and delete
pub fn index(value: impl ToString) -> OperationParams {
    OperationParams {
        index: value.to_string(),
        ..OperationParams::default()
    }
}

/// Parameters for insert
pub fn index_value(index: impl ToString, value: impl ToString) -> OperationParams {
    OperationParams {
        index: index.to_string(),
        value: value.to_string(),
        ..OperationParams::default()
    }
}
