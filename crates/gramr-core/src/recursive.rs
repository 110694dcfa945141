//! Trampoline for running deep recursive computations in constant stack.
//!
//! An algorithm step returns either its final value or a closure producing
//! the next step. [`Recursive::run`] drives the steps in a plain loop, so the
//! native call stack never grows with the number of steps.

/// One step of a trampolined computation.
pub enum Recursive<'a, Out> {
    Done(Out),
    Continue(Box<dyn FnOnce() -> Recursive<'a, Out> + 'a>),
}

impl<'a, Out> Recursive<'a, Out> {
    #[inline]
    pub fn done(out: Out) -> Self {
        Self::Done(out)
    }

    #[inline]
    pub fn next(step: impl FnOnce() -> Recursive<'a, Out> + 'a) -> Self {
        Self::Continue(Box::new(step))
    }

    /// Drive the computation until it produces a value.
    pub fn run(self) -> Out {
        let mut current = self;
        loop {
            match current {
                Self::Done(out) => return out,
                Self::Continue(step) => current = step(),
            }
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

impl<Out: std::fmt::Debug> std::fmt::Debug for Recursive<'_, Out> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(out) => f.debug_tuple("Done").field(out).finish(),
            Self::Continue(_) => f.write_str("Continue(..)"),
        }
    }
}
