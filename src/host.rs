//! Host capabilities consumed by the page components.
//!
//! Components never look up the document, the clock, or storage on their
//! own. They receive these handles at construction, which keeps the
//! animation and throttle logic testable without a live display.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// One-shot delayed execution.
pub trait Scheduler {
    /// Run `task` once, `delay_ms` milliseconds from now. Returns immediately.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

impl<S: Scheduler + ?Sized> Scheduler for Rc<S> {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        (**self).schedule(delay_ms, task);
    }
}

/// A single text-bearing output target.
pub trait TextSurface {
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
}

impl<T: TextSurface + ?Sized> TextSurface for Rc<T> {
    fn text(&self) -> String {
        (**self).text()
    }

    fn set_text(&self, text: &str) {
        (**self).set_text(text);
    }
}

/// Key-value preference storage.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

impl<P: PreferenceStore + ?Sized> PreferenceStore for Rc<P> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }
}

/// Shared in-memory text surface. Clones observe the same text.
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    text: Rc<RefCell<String>>,
    writes: Rc<RefCell<usize>>,
}

impl TextBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_text` calls observed so far.
    #[must_use]
    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }
}

impl TextSurface for TextBuffer {
    fn text(&self) -> String {
        self.text.borrow().clone()
    }

    fn set_text(&self, text: &str) {
        let mut current = self.text.borrow_mut();
        current.clear();
        current.push_str(text);
        *self.writes.borrow_mut() += 1;
    }
}

/// Shared in-memory preference store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
    }
}
