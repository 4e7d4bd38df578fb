//! Stack growth for recursive tree walks.
//!
//! Type trees built in code (rather than parsed) can nest arbitrarily, so
//! every recursive walk in the parser, the generalizer and the conflict
//! engine goes through [`ensure_sufficient_stack`]. On native targets it
//! grows the stack with `stacker` when fewer than `RED_ZONE` bytes remain.
//! On wasm it calls the closure directly.

const RED_ZONE: usize = 128 * 1024;

const GROWTH: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if it is nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
