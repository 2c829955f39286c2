//! Stack safety for recursive evaluation
//!
//! Evaluation recurses once per nesting level of the expression tree and
//! several frames per closure call, so deep programs can exhaust small thread
//! stacks (2MB test threads) long before `max_call_depth` is reached.

/// Minimum stack space to keep available (256KB red zone).
const RED_ZONE: usize = 256 * 1024;

/// Stack space to allocate when growing (2MB).
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
///
/// Grows the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
