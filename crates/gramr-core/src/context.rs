//! Scoped label stack for tracing rule evaluation.
//!
//! One `Context` belongs to one top-level parse invocation. Labels are
//! pushed through [`Context::enter`], which returns a guard; dropping the
//! guard restores the stack, whatever path the caller leaves by.

use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct Context {
    labels: RefCell<Vec<String>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `label` until the returned guard is dropped.
    #[must_use = "the label is popped as soon as the guard is dropped"]
    pub fn enter(&self, label: impl Into<String>) -> PathGuard<'_> {
        let mut labels = self.labels.borrow_mut();
        let depth = labels.len();
        labels.push(label.into());
        PathGuard {
            context: self,
            depth,
        }
    }

    /// Run `f` with `label` pushed.
    pub fn in_path<T>(&self, label: impl Into<String>, f: impl FnOnce() -> T) -> T {
        let _guard = self.enter(label);
        f()
    }

    /// Snapshot of the active labels, outermost first.
    pub fn path(&self) -> Vec<String> {
        self.labels.borrow().clone()
    }

    pub fn depth(&self) -> usize {
        self.labels.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.borrow().is_empty()
    }
}

/// Restores the owning [`Context`] to its depth before the matching `enter`.
#[derive(Debug)]
pub struct PathGuard<'c> {
    context: &'c Context,
    depth: usize,
}

impl Drop for PathGuard<'_> {
    fn drop(&mut self) {
        self.context.labels.borrow_mut().truncate(self.depth);
    }
}
