/// Parser entry points and shared parser state.
///
/// Holds [`core::parse`], which turns source text into a
/// [`Document`](crate::interpreter::document::Document), the
/// [`core::ParserState`] nesting guard and the `ParseResult` alias.
pub mod core;

/// Statement and expression-list parsing.
pub mod statement;

/// Binary operator parsing by precedence climbing.
///
/// `+ -` and `* /` are left-associative; `=` is right-associative.
pub mod binary;

/// Terms: parenthesized expressions, numbers, variables and calls.
pub mod unary;

/// Function literals: `fun(params) -> body end`.
pub mod function;

/// Helpers shared by the parsing functions.
mod utils;
