//! Stack growth for deep recursion.
//!
//! Reading and evaluating recurse once per nesting level, so the depth
//! limits alone cannot keep a small thread stack (2 MiB for spawned threads)
//! from overflowing. Recursive entry points go through
//! [`ensure_sufficient_stack`], which moves onto a fresh segment when the
//! current one runs low.

/// Run `f`, first switching to a new stack segment if less than
/// `RED_ZONE` bytes remain.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    const RED_ZONE: usize = 100 * 1024;
    const SEGMENT_SIZE: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// wasm32 cannot switch stacks.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
