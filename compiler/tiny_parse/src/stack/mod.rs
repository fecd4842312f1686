//! Stack growth for deep recursion.
//!
//! Nested parentheses, prefix operators and nested `if`/`while` bodies each
//! add frames to the recursive descent. The recognizing methods that recurse
//! wrap their bodies in [`ensure_sufficient_stack`], which grows the stack on
//! the heap when it runs low.
//!
//! - **Red zone**: 100KB. Less than this remaining triggers growth.
//! - **Growth size**: 1MB per new segment.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
