//! Observable visualization state
//!
//! The [`Scene`] is everything the panes render: the authoritative array, the
//! execution cursor, the element state map and the simulated stack frame. The
//! animation core never touches it directly; it publishes through the
//! [`CursorSink`] trait, which the scene implements.
//!
//! Panes only read the scene between polls of the running operation, so every
//! frame they draw shows the effects of whole synchronized steps.

use crate::memory::stack::StackFrameSnapshot;
use crate::operations::OperationOutcome;
use rustc_hash::FxHashMap;

/// Status text shown when nothing is running
pub const IDLE_STATUS: &str = "Ready! Pick an operation and press Enter";

/// Visual tag of a single element. Idle elements have no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementState {
    Checking,
    Found,
    Checked,
    Accessed,
    Shifting,
    Shifted,
    Inserted,
    Deleting,
}

impl ElementState {
    pub fn label(self) -> &'static str {
        match self {
            ElementState::Checking => "checking",
            ElementState::Found => "found",
            ElementState::Checked => "checked",
            ElementState::Accessed => "accessed",
            ElementState::Shifting => "shifting",
            ElementState::Shifted => "shifted",
            ElementState::Inserted => "inserted",
            ElementState::Deleting => "deleting",
        }
    }
}

/// Result of the most recent search as the cursor tracks it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoundIndex {
    /// No search has concluded in the current run
    #[default]
    NotSearched,
    /// Searched the whole array, target absent
    Absent,
    At(usize),
}

/// The execution cursor: independent fields reset together
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    pub code_line: Option<usize>,
    pub active_element: Option<usize>,
    pub active_memory: Option<usize>,
    pub iteration: Option<usize>,
    pub found: FoundIndex,
    pub status: String,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor {
            code_line: None,
            active_element: None,
            active_memory: None,
            iteration: None,
            found: FoundIndex::NotSearched,
            status: IDLE_STATUS.to_string(),
        }
    }
}

/// Receiver of everything the animation core publishes.
///
/// Implemented once by the host's [`Scene`]; tests may implement it to record
/// the exact order of publications.
pub trait CursorSink {
    fn set_code_line(&mut self, line: Option<usize>);
    fn set_status(&mut self, text: String);
    fn set_active_element(&mut self, index: Option<usize>);
    fn set_active_memory(&mut self, index: Option<usize>);
    fn set_element_state(&mut self, index: usize, state: ElementState);
    fn clear_element_states(&mut self);
    fn set_iteration(&mut self, iteration: Option<usize>);
    fn set_stack_frame(&mut self, frame: Option<StackFrameSnapshot>);
    fn set_found_index(&mut self, found: FoundIndex);

    /// Replace the authoritative array contents
    fn set_array(&mut self, values: Vec<i64>);

    /// Publish (or clear) the in-progress copy shown while elements shift
    fn set_working_array(&mut self, values: Option<Vec<i64>>);

    /// Remember how the last completed operation ended
    fn set_outcome(&mut self, outcome: Option<OperationOutcome>);
}

/// Host-owned observable state
#[derive(Debug, Clone, Default)]
pub struct Scene {
    array: Vec<i64>,
    working_array: Option<Vec<i64>>,
    element_states: FxHashMap<usize, ElementState>,
    cursor: Cursor,
    stack_frame: Option<StackFrameSnapshot>,
    last_outcome: Option<OperationOutcome>,
}

impl Scene {
    pub fn new(array: Vec<i64>) -> Self {
        Scene {
            array,
            ..Scene::default()
        }
    }

    /// The committed array
    pub fn array(&self) -> &[i64] {
        &self.array
    }

    /// What the array and heap panes draw: the working copy while an
    /// operation is shifting elements, otherwise the committed array
    pub fn displayed_array(&self) -> &[i64] {
        self.working_array.as_deref().unwrap_or(&self.array)
    }

    pub fn working_array(&self) -> Option<&[i64]> {
        self.working_array.as_deref()
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn element_state(&self, index: usize) -> Option<ElementState> {
        self.element_states.get(&index).copied()
    }

    pub fn element_states(&self) -> &FxHashMap<usize, ElementState> {
        &self.element_states
    }

    pub fn stack_frame(&self) -> Option<&StackFrameSnapshot> {
        self.stack_frame.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&OperationOutcome> {
        self.last_outcome.as_ref()
    }

    /// True when the cursor, element map and stack frame are all idle
    pub fn is_idle(&self) -> bool {
        self.cursor.code_line.is_none()
            && self.cursor.active_element.is_none()
            && self.cursor.active_memory.is_none()
            && self.cursor.iteration.is_none()
            && self.cursor.found == FoundIndex::NotSearched
            && self.element_states.is_empty()
            && self.stack_frame.is_none()
            && self.working_array.is_none()
    }
}

impl CursorSink for Scene {
    fn set_code_line(&mut self, line: Option<usize>) {
        self.cursor.code_line = line;
    }

    fn set_status(&mut self, text: String) {
        self.cursor.status = text;
    }

    fn set_active_element(&mut self, index: Option<usize>) {
        self.cursor.active_element = index;
    }

    fn set_active_memory(&mut self, index: Option<usize>) {
        self.cursor.active_memory = index;
    }

    fn set_element_state(&mut self, index: usize, state: ElementState) {
        self.element_states.insert(index, state);
    }

    fn clear_element_states(&mut self) {
        self.element_states.clear();
    }

    fn set_iteration(&mut self, iteration: Option<usize>) {
        self.cursor.iteration = iteration;
    }

    fn set_stack_frame(&mut self, frame: Option<StackFrameSnapshot>) {
        self.stack_frame = frame;
    }

    fn set_found_index(&mut self, found: FoundIndex) {
        self.cursor.found = found;
    }

    fn set_array(&mut self, values: Vec<i64>) {
        self.array = values;
    }

    fn set_working_array(&mut self, values: Option<Vec<i64>>) {
        self.working_array = values;
    }

    fn set_outcome(&mut self, outcome: Option<OperationOutcome>) {
        self.last_outcome = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_is_idle() {
        let scene = Scene::new(vec![1, 2, 3]);
        assert!(scene.is_idle());
        assert_eq!(scene.array(), &[1, 2, 3]);
        assert_eq!(scene.cursor().status, IDLE_STATUS);
    }

    #[test]
    fn test_displayed_array_prefers_working_copy() {
        let mut scene = Scene::new(vec![1, 2, 3]);
        scene.set_working_array(Some(vec![1, 1, 2, 3]));
        assert_eq!(scene.displayed_array(), &[1, 1, 2, 3]);
        assert_eq!(scene.array(), &[1, 2, 3]);
        assert!(!scene.is_idle());

        scene.set_working_array(None);
        assert_eq!(scene.displayed_array(), &[1, 2, 3]);
    }

    #[test]
    fn test_element_states_overwrite_per_index() {
        let mut scene = Scene::default();
        scene.set_element_state(2, ElementState::Checking);
        scene.set_element_state(2, ElementState::Found);
        assert_eq!(scene.element_state(2), Some(ElementState::Found));
        assert_eq!(scene.element_state(0), None);
        scene.clear_element_states();
        assert!(scene.element_states().is_empty());
    }
}
