//! Stack growth for the recursive parser and evaluator.
//!
//! Both the Pratt parser and the tree-walking evaluator recurse once per
//! nesting level of the input. Wrapping those recursive entry points in
//! [`ensure_sufficient_stack`] lets deeply nested expressions and deep
//! user-level recursion run on a segmented stack instead of overflowing
//! the thread's native one.
//!
//! On `wasm32` the wrapper calls through directly.

/// Grow when less than this much stack remains.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
