/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], expression dispatch, and evaluation of
/// expression sequences and statements.
pub mod core;

/// Binary operator evaluation.
///
/// Implements assignment and the four arithmetic operators.
pub mod binary;

/// Function evaluation.
///
/// Handles call lookup, argument evaluation, parameter binding in a fresh
/// scope and the call-depth limit.
pub mod function;
