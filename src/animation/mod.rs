//! Animation synchronization engine
//!
//! This module provides the machinery every operation runs on:
//! - [`clock`]: the cancelable step delay and its time sources
//! - [`cancel`]: cancellation tokens that back the run flag
//! - [`controller`]: run/stop state, synchronized steps, cursor mutators
//! - [`runner`]: the cooperative driver polled from the UI event loop
//!
//! # Execution Model
//!
//! Operations are `async fn`s. Their only suspension point is the step delay
//! inside [`controller::AnimationRun::sync_step`]. Everything between two
//! delays runs synchronously, so a cancellation can only take effect at a
//! step boundary and never halfway through a step's effects.

pub mod cancel;
pub mod clock;
pub mod controller;
pub mod runner;

pub use clock::{ManualTime, MonotonicTime, StepClock, TimeSource};
pub use controller::{AnimationController, AnimationRun, Step, StepOutcome};
pub use runner::{Runner, RunnerState};
