//! # Introduction
//!
//! `arrayviz` animates array operations (linear search, indexed access,
//! insertion and deletion) step by step in the terminal. Every step moves the
//! highlighted code line, the array cells and the simulated memory together,
//! then pauses before the next one.
//!
//! ## Pipeline
//!
//! ```text
//! Key press → OperationRequest → procedure → AnimationController → Scene → TUI
//! ```
//!
//! 1. [`operations`]: the four procedures plus their per-language listings.
//! 2. [`animation`]: the step synchronizer, its cancellable clock and the
//!    [`animation::Runner`] that polls procedures from the event loop.
//! 3. [`scene`]: the observable state the panes draw.
//! 4. [`memory`]: simulated stack frame and heap addresses.
//! 5. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! [`harness`] drives operations deterministically on a manual clock and is
//! what the tests are built on.

pub mod animation;
pub mod config;
pub mod harness;
pub mod memory;
pub mod operations;
pub mod scene;
pub mod ui;
