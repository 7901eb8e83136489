//! Cooperative driver for operation futures
//!
//! There is no async runtime: the host's event loop calls [`Runner::poll`]
//! once per tick. A poll advances the running operation until it parks in a
//! step delay or finishes. Panics raised inside step effects are caught here,
//! logged, and turn into a forced controller reset.

use super::controller::AnimationController;
use std::cell::Cell;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};
use tracing::error;

/// Status shown after an operation blew up mid-step
pub const INTERRUPTED_STATUS: &str = "Animation interrupted by an internal error";

type Task = Pin<Box<dyn Future<Output = ()>>>;

thread_local! {
    static POLLING: Cell<bool> = const { Cell::new(false) };
}

/// True while a [`Runner`] on this thread is inside a poll.
///
/// A panic hook can use this to leave panics the runner catches to the
/// runner's own logging.
pub fn is_polling() -> bool {
    POLLING.with(Cell::get)
}

/// State of the runner after a poll
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Running,
    Finished,
    Panicked,
}

/// Polls at most one operation at a time
pub struct Runner {
    controller: Rc<AnimationController>,
    task: Option<Task>,
}

impl Runner {
    pub fn new(controller: Rc<AnimationController>) -> Self {
        Runner {
            controller,
            task: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Replace the running operation with `future`.
    ///
    /// The previous operation is dropped and the controller reset first, so
    /// no continuation of it can run afterwards.
    pub fn spawn(&mut self, future: impl Future<Output = ()> + 'static) {
        self.cancel();
        self.task = Some(Box::pin(future));
    }

    /// Drop the running operation and reset the controller
    pub fn cancel(&mut self) {
        self.task = None;
        self.controller.reset();
    }

    /// Advance the running operation by one poll
    pub fn poll(&mut self) -> RunnerState {
        let Some(task) = self.task.as_mut() else {
            return RunnerState::Idle;
        };

        let mut cx = Context::from_waker(Waker::noop());
        POLLING.with(|polling| polling.set(true));
        let result = panic::catch_unwind(AssertUnwindSafe(|| task.as_mut().poll(&mut cx)));
        POLLING.with(|polling| polling.set(false));

        match result {
            Ok(Poll::Pending) => RunnerState::Running,
            Ok(Poll::Ready(())) => {
                self.task = None;
                RunnerState::Finished
            }
            Err(payload) => {
                let message = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "unknown panic".to_string());
                error!(%message, "operation panicked inside a step");
                self.task = None;
                self.controller.reset_with_status(INTERRUPTED_STATUS);
                RunnerState::Panicked
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clock::ManualTime;
    use crate::animation::controller::Step;
    use crate::scene::Scene;
    use std::cell::RefCell;
    use std::time::Duration;

    fn setup(speed_ms: u64) -> (Rc<ManualTime>, Rc<RefCell<Scene>>, Rc<AnimationController>) {
        let time = Rc::new(ManualTime::new());
        let scene = Rc::new(RefCell::new(Scene::new(vec![5, 6, 7])));
        let controller = Rc::new(AnimationController::new(
            scene.clone(),
            time.clone(),
            Duration::from_millis(speed_ms),
        ));
        (time, scene, controller)
    }

    #[test]
    fn test_poll_without_task_is_idle() {
        let (_time, _scene, controller) = setup(0);
        let mut runner = Runner::new(controller);
        assert_eq!(runner.poll(), RunnerState::Idle);
    }

    #[test]
    fn test_task_parks_until_time_advances() {
        let (time, scene, controller) = setup(100);
        let mut runner = Runner::new(controller.clone());
        let ctrl = controller.clone();
        runner.spawn(async move {
            let run = ctrl.start();
            let _ = run.sync_step(Step::new(Some(0), "first")).await;
            let _ = run.sync_step(Step::new(Some(1), "second")).await;
        });

        assert_eq!(runner.poll(), RunnerState::Running);
        assert_eq!(scene.borrow().cursor().code_line, Some(0));
        assert!(controller.has_pending_delay());

        time.advance(Duration::from_millis(100));
        assert_eq!(runner.poll(), RunnerState::Running);
        assert_eq!(scene.borrow().cursor().code_line, Some(1));

        time.advance(Duration::from_millis(100));
        assert_eq!(runner.poll(), RunnerState::Finished);
        assert!(!runner.is_running());
    }

    #[test]
    fn test_panic_in_effect_forces_reset() {
        let (_time, scene, controller) = setup(0);
        let mut runner = Runner::new(controller.clone());
        let ctrl = controller.clone();
        runner.spawn(async move {
            let run = ctrl.start();
            let _ = run
                .sync_step(Step::new(Some(0), "boom").visual(|| panic!("effect failed")))
                .await;
        });

        assert_eq!(runner.poll(), RunnerState::Panicked);
        assert!(!controller.is_active());
        assert!(!runner.is_running());
        assert_eq!(scene.borrow().cursor().status, INTERRUPTED_STATUS);
        assert_eq!(scene.borrow().cursor().code_line, None);
    }

    #[test]
    fn test_polling_flag_is_set_only_inside_poll() {
        let (_time, _scene, controller) = setup(0);
        let mut runner = Runner::new(controller);
        let seen = Rc::new(Cell::new(false));
        let inside = seen.clone();
        runner.spawn(async move {
            inside.set(is_polling());
        });

        assert!(!is_polling());
        assert_eq!(runner.poll(), RunnerState::Finished);
        assert!(seen.get());
        assert!(!is_polling());
    }

    #[test]
    fn test_polling_flag_is_cleared_after_a_caught_panic() {
        let (_time, _scene, controller) = setup(0);
        let mut runner = Runner::new(controller);
        runner.spawn(async {
            panic!("step failed");
        });

        assert_eq!(runner.poll(), RunnerState::Panicked);
        assert!(!is_polling());
    }

    #[test]
    fn test_spawn_cancels_previous_task() {
        let (_time, scene, controller) = setup(1000);
        let mut runner = Runner::new(controller.clone());
        let ctrl = controller.clone();
        runner.spawn(async move {
            let run = ctrl.start();
            let _ = run.sync_step(Step::new(Some(3), "old")).await;
            run.set_array(vec![0]);
        });
        assert_eq!(runner.poll(), RunnerState::Running);

        runner.spawn(async {});
        assert_eq!(runner.poll(), RunnerState::Finished);
        assert_eq!(scene.borrow().array(), &[5, 6, 7]);
        assert!(scene.borrow().is_idle());
    }
}
