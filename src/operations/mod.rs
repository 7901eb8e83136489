//! Array operation procedures
//!
//! This module provides the four animated operations and their shared plumbing:
//! - [`search`]: linear scan, first match wins
//! - [`access`]: O(1) indexed read with address computation
//! - [`insert`]: shift-right insertion
//! - [`delete`]: shift-left deletion
//! - [`listings`]: per-language source shown in the code pane
//!
//! # Lifecycle
//!
//! [`run_operation`] resets the controller, starts a fresh run, drives the
//! chosen procedure and finally resets again. Rejected input and capacity
//! violations end with the error message left on the status line; an
//! interrupted run ends silently.
//!
//! # Array mutation
//!
//! Procedures never write the committed array halfway. Intermediate shifts are
//! published as a working copy, and the final contents are committed by a
//! single step's effect. Stopping a run at any step boundary therefore leaves
//! the committed array either untouched or fully updated.

pub mod access;
pub mod delete;
pub mod insert;
pub mod listings;
pub mod search;

use crate::animation::controller::AnimationController;
use crate::config::Language;
use std::fmt;
use std::ops::RangeInclusive;
use std::rc::Rc;
use thiserror::Error;
use tracing::{info, warn};

/// The four supported operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Search,
    Access,
    Insert,
    Delete,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Search,
        Operation::Access,
        Operation::Insert,
        Operation::Delete,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Operation::Search => "search",
            Operation::Access => "access",
            Operation::Insert => "insert",
            Operation::Delete => "delete",
        }
    }

    /// Parameter fields the operation reads, in input order
    pub fn fields(self) -> &'static [ParamField] {
        match self {
            Operation::Search => &[ParamField::Target],
            Operation::Access | Operation::Delete => &[ParamField::Index],
            Operation::Insert => &[ParamField::Index, ParamField::Value],
        }
    }

    pub fn next(self) -> Self {
        match self {
            Operation::Search => Operation::Access,
            Operation::Access => Operation::Insert,
            Operation::Insert => Operation::Delete,
            Operation::Delete => Operation::Search,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Operation::Search => Operation::Delete,
            Operation::Access => Operation::Search,
            Operation::Insert => Operation::Access,
            Operation::Delete => Operation::Insert,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user-editable operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamField {
    Target,
    Index,
    Value,
}

impl ParamField {
    pub fn label(self) -> &'static str {
        match self {
            ParamField::Target => "target",
            ParamField::Index => "index",
            ParamField::Value => "value",
        }
    }
}

/// Raw parameter strings as typed by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationParams {
    pub target: String,
    pub index: String,
    pub value: String,
}

impl OperationParams {
    pub fn get(&self, field: ParamField) -> &str {
        match field {
            ParamField::Target => &self.target,
            ParamField::Index => &self.index,
            ParamField::Value => &self.value,
        }
    }

    pub fn get_mut(&mut self, field: ParamField) -> &mut String {
        match field {
            ParamField::Target => &mut self.target,
            ParamField::Index => &mut self.index,
            ParamField::Value => &mut self.value,
        }
    }
}

/// Everything an operation needs, captured when it is triggered
#[derive(Debug, Clone)]
pub struct OperationRequest {
    pub operation: Operation,
    pub array: Vec<i64>,
    pub params: OperationParams,
    pub language: Language,
    /// Capacity of the fixed-size array when `language` is fixed-capacity
    pub capacity: usize,
}

/// How a completed operation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutcome {
    Found { target: i64, index: usize },
    NotFound { target: i64 },
    Accessed { index: usize, value: i64 },
    Inserted { index: usize, value: i64, len: usize },
    Deleted { index: usize, value: i64, len: usize },
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperationOutcome::Found { target, index } => {
                write!(f, "Found {} at index {}", target, index)
            }
            OperationOutcome::NotFound { target } => write!(f, "{} is not in the array", target),
            OperationOutcome::Accessed { index, value } => {
                write!(f, "arr[{}] = {}", index, value)
            }
            OperationOutcome::Inserted { index, value, len } => write!(
                f,
                "Inserted {} at index {}, length is now {}",
                value, index, len
            ),
            OperationOutcome::Deleted { index, value, len } => write!(
                f,
                "Deleted {} from index {}, length is now {}",
                value, index, len
            ),
        }
    }
}

/// Why an operation did not complete
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OperationError {
    /// A parameter is not an integer
    #[error("Invalid input: {field} must be an integer, got '{input}'")]
    InvalidInput { field: &'static str, input: String },

    /// An index falls outside the operation's legal range
    #[error("Invalid index {index}: {operation} needs an index between {min} and {max}")]
    IndexOutOfRange {
        operation: Operation,
        index: i64,
        min: i64,
        max: i64,
    },

    /// The array is empty, so no index is legal
    #[error("Invalid index {index}: the array is empty")]
    EmptyArray { index: i64 },

    /// Insert into a full fixed-capacity array
    #[error("Array is full: capacity is {capacity} elements")]
    CapacityExceeded { capacity: usize },

    /// The run was stopped; never shown to the user
    #[error("operation interrupted")]
    Interrupted,
}

/// Parse a required integer parameter
pub fn parse_int(field: ParamField, input: &str) -> Result<i64, OperationError> {
    input
        .trim()
        .parse()
        .map_err(|_| OperationError::InvalidInput {
            field: field.label(),
            input: input.to_string(),
        })
}

/// Parse an index parameter and check it against `range`
pub fn parse_index(
    operation: Operation,
    input: &str,
    range: Option<RangeInclusive<usize>>,
) -> Result<usize, OperationError> {
    let index = parse_int(ParamField::Index, input)?;
    let Some(range) = range else {
        return Err(OperationError::EmptyArray { index });
    };

    match usize::try_from(index) {
        Ok(i) if range.contains(&i) => Ok(i),
        _ => Err(OperationError::IndexOutOfRange {
            operation,
            index,
            min: *range.start() as i64,
            max: *range.end() as i64,
        }),
    }
}

/// Legal indices of an existing element: `[0, len - 1]`
pub fn element_range(len: usize) -> Option<RangeInclusive<usize>> {
    len.checked_sub(1).map(|last| 0..=last)
}

/// Animate `request` to completion on `controller`.
///
/// Any previous run is stopped first. The returned result mirrors what the
/// status line shows once the run is over.
pub async fn run_operation(
    controller: Rc<AnimationController>,
    request: OperationRequest,
) -> Result<OperationOutcome, OperationError> {
    controller.reset();
    let run = controller.start();
    info!(
        operation = %request.operation,
        language = %request.language,
        len = request.array.len(),
        "operation started"
    );

    let result = match request.operation {
        Operation::Search => search::search(&run, &request).await,
        Operation::Access => access::access(&run, &request).await,
        Operation::Insert => insert::insert(&run, &request).await,
        Operation::Delete => delete::delete(&run, &request).await,
    };

    match &result {
        Ok(outcome) => {
            info!(%outcome, "operation finished");
            controller.sink().borrow_mut().set_outcome(Some(outcome.clone()));
            controller.reset_with_status(outcome.to_string());
        }
        Err(OperationError::Interrupted) => {
            info!(operation = %request.operation, "operation interrupted");
            if !controller.is_active() {
                controller.reset();
            }
        }
        Err(error) => {
            warn!(%error, operation = %request.operation, "operation rejected");
            controller.reset_with_status(error.to_string());
        }
    }

    result
}
