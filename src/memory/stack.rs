//! Simulated stack frame snapshot
//!
//! Not a real call stack: an operation publishes one [`StackFrameSnapshot`]
//! per step describing the locals of the function shown in the code pane.
//! Locals keep their declaration order.

use std::fmt::Display;

/// A local variable as the memory pane shows it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalSlot {
    pub name: String,
    pub value: String,
}

/// Locals of the simulated call at the current step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackFrameSnapshot {
    pub function_name: String,
    pub locals: Vec<LocalSlot>,
}

impl StackFrameSnapshot {
    pub fn new(function_name: impl Into<String>) -> Self {
        StackFrameSnapshot {
            function_name: function_name.into(),
            locals: Vec::new(),
        }
    }

    /// Declare (or overwrite) a local, builder style
    pub fn local(mut self, name: &str, value: impl Display) -> Self {
        let value = value.to_string();
        match self.locals.iter_mut().find(|slot| slot.name == name) {
            Some(slot) => slot.value = value,
            None => self.locals.push(LocalSlot {
                name: name.to_string(),
                value,
            }),
        }
        self
    }

    /// Look up a local by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.locals
            .iter()
            .find(|slot| slot.name == name)
            .map(|slot| slot.value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locals_keep_declaration_order() {
        let frame = StackFrameSnapshot::new("linear_search")
            .local("target", 89)
            .local("i", 0)
            .local("arr[i]", 42);
        let names: Vec<&str> = frame.locals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["target", "i", "arr[i]"]);
    }

    #[test]
    fn test_redeclaring_a_local_overwrites_in_place() {
        let frame = StackFrameSnapshot::new("f").local("i", 0).local("x", 1).local("i", 2);
        assert_eq!(frame.locals.len(), 2);
        assert_eq!(frame.get("i"), Some("2"));
        assert_eq!(frame.locals[0].name, "i");
    }
}
