//! Ordered handler registration with coexistence allow-lists.

use std::collections::BTreeSet;

use crate::error::{InputError, InputResult};
use crate::handler::Handler;

/// One registered handler: its unique name, the recognizer itself, and the
/// names of other handlers it may remain active alongside.
pub struct HandlerEntry {
    pub name: String,
    pub handler: Box<dyn Handler>,
    pub allow_list: Vec<String>,
}

/// Fixed-order list of named handlers. Dispatch iterates in registration
/// order; the order is part of the merge semantics (later handlers win
/// field-by-field within one dispatch).
#[derive(Default)]
pub struct HandlerRegistry {
    entries: Vec<HandlerEntry>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a unique name.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        handler: Box<dyn Handler>,
        allow_list: Vec<String>,
    ) -> InputResult<()> {
        let name = name.into();
        if self.entries.iter().any(|e| e.name == name) {
            return Err(InputError::DuplicateHandler(name));
        }
        self.entries.push(HandlerEntry {
            name,
            handler,
            allow_list,
        });
        Ok(())
    }

    pub fn get_mut(&mut self, name: &str) -> InputResult<&mut dyn Handler> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.name == name)
            .ok_or_else(|| InputError::UnknownHandler(name.to_string()))?;
        Ok(entry.handler.as_mut())
    }

    pub fn get(&self, name: &str) -> InputResult<&dyn Handler> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.handler.as_ref())
            .ok_or_else(|| InputError::UnknownHandler(name.to_string()))
    }

    pub fn entries_mut(&mut self) -> impl Iterator<Item = &mut HandlerEntry> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True iff any currently active handler other than `candidate` is absent
    /// from `allow_list`. A blocked handler is reset instead of invoked, so
    /// two conflicting recognizers can never both claim the same physical
    /// gesture.
    pub fn is_blocked(
        active: &BTreeSet<String>,
        allow_list: &[String],
        candidate: &str,
    ) -> bool {
        active
            .iter()
            .any(|name| name != candidate && !allow_list.iter().any(|a| a == name))
    }
}
