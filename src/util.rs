/// Native stack management for deep recursion.
///
/// The parser and evaluator are recursive; this module lets them grow the
/// stack on demand so that the configured depth limits, not the size of the
/// thread's stack, decide when input is too deeply nested.
pub mod stack;
