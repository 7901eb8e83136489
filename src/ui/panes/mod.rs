//! TUI pane rendering modules
//!
//! Each pane module exports a `render_*` function taking a borrowed
//! `*RenderData` struct, so panes stay stateless and read the scene only
//! between polls of the running operation.
//!
//! # Pane Modules
//!
//! - [`array`]: Element cells coloured by state, with index and offset rows
//! - [`code`]: Operation listing with the current line highlighted and the status message
//! - [`memory`]: Simulated stack frame and heap cells
//! - [`controls`]: Operation picker, parameter inputs and settings
//! - [`status`]: Status bar with keybindings and progress

pub mod array;
pub mod code;
pub mod controls;
pub mod memory;
pub mod status;

pub use array::{render_array_pane, ArrayRenderData};
pub use code::{render_code_pane, CodeRenderData};
pub use controls::{render_controls_pane, ControlsRenderData};
pub use memory::{render_memory_pane, MemoryRenderData};
pub use status::{render_status_bar, StatusRenderData};
