//! The chain of environments consulted during evaluation.
//!
//! Frame 0 is the global environment. Every saturated closure call pushes
//! the closure's own environment and pops it when the body has been reduced.
//! A closure body is re-parented to its caller at call time, so the order of
//! frames on the stack is exactly the parent chain:
//!
//! ```text
//! [global] <- [caller frame] <- [callee frame]
//! ```
//!
//! Lookup walks from the innermost frame outwards. `def` writes frame 0 and
//! `=` writes the innermost frame.

use crate::{environment::Environment, values::Value};
use ecow::EcoString;

/// A stack of environments, searched from innermost to outermost.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    /// Never empty: `frames[0]` is the global environment.
    frames: Vec<Environment>,
}

impl ScopeStack {
    /// Create a stack holding only the given global environment.
    pub fn new(global: Environment) -> Self {
        Self {
            frames: vec![global],
        }
    }

    /// Number of frames, including the global one.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Push a call frame.
    pub fn push(&mut self, frame: Environment) {
        self.frames.push(frame);
    }

    /// Pop the innermost call frame and return it.
    ///
    /// The global frame is never popped.
    pub fn pop(&mut self) -> Result<Environment, PopError> {
        if self.frames.len() <= 1 {
            return Err(PopError::GlobalFrame);
        }
        self.frames.pop().ok_or(PopError::GlobalFrame)
    }

    /// Look up a name, searching frames from innermost to outermost.
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    pub fn global(&self) -> &Environment {
        &self.frames[0]
    }

    pub fn global_mut(&mut self) -> &mut Environment {
        &mut self.frames[0]
    }

    /// The innermost frame (the global frame when no call is active).
    pub fn current(&self) -> &Environment {
        &self.frames[self.frames.len() - 1]
    }

    pub fn current_mut(&mut self) -> &mut Environment {
        let top = self.frames.len() - 1;
        &mut self.frames[top]
    }

    /// Drop every call frame and return the global environment.
    pub fn into_global(self) -> Environment {
        self.frames.into_iter().next().unwrap_or_default()
    }

    /// Bind in the global frame.
    pub fn define_global(&mut self, name: impl Into<EcoString>, value: Value) {
        self.global_mut().put(name, value);
    }

    /// Bind in the innermost frame.
    pub fn define_local(&mut self, name: impl Into<EcoString>, value: Value) {
        self.current_mut().put(name, value);
    }
}

/// Error when trying to pop a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PopError {
    /// Only the global frame is left.
    #[error("cannot pop the global environment")]
    GlobalFrame,
}
