//! # funcalc
//!
//! funcalc is a small expression language interpreter written in Rust.
//! Programs are statements terminated by `.`; each statement is a list of
//! comma-separated expressions built from numbers, variables, the four
//! arithmetic operators, assignment, and first-class functions written as
//! `fun(params) -> body end`.
//!
//! ```
//! use funcalc::Session;
//!
//! let mut session = Session::new();
//! session.run("add = fun(a, b) -> a + b end.").unwrap();
//! let result = session.run("add(2, 3) * 2.").unwrap();
//! assert_eq!(result, 10.0);
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum, the `Function` literal and the
/// `Statement` type that represent source code as a tree. The AST is built by
/// the parser, never modified afterwards, and traversed by the evaluator.
pub mod ast;
/// Interpreter settings.
///
/// Limits on parse nesting and call depth, and the division-by-zero policy.
pub mod config;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. Every error carries the source line it was raised on
/// and can be classified with `kind()`.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, scopes, values and evaluation.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and scopes.
/// - Provides entry points for parsing and executing user code.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General utilities shared by the parser and evaluator.
pub mod util;

pub use crate::{
    config::{Config, DivisionPolicy},
    error::{Error, ErrorKind, ParseError, RuntimeError},
    interpreter::{document::Document, parser::core::parse, scope::Scope, value::Value},
};

/// Parses and executes `source` against `scope`.
///
/// Statements run in order; the value of the last expression of the last
/// statement is returned. Assignments persist in `scope`, so repeated calls
/// with the same scope behave like one continuous session.
///
/// # Errors
/// Returns an error if lexing, parsing or evaluation fails. A parse error
/// leaves `scope` untouched; a runtime error keeps the effects of everything
/// evaluated before it.
///
/// # Examples
/// ```
/// use funcalc::{Config, Scope, run};
///
/// let mut scope = Scope::new();
/// let config = Config::default();
///
/// assert_eq!(run("x = 5.", &mut scope, &config).unwrap(), 5.0);
/// assert_eq!(run("x + 1.", &mut scope, &config).unwrap(), 6.0);
///
/// // Missing terminator.
/// assert!(run("1 + 2", &mut scope, &config).is_err());
/// ```
pub fn run(source: &str, scope: &mut Scope<'_>, config: &Config) -> Result<Value, Error> {
    let document = parse(source, scope, config)?;
    Ok(document.execute()?)
}

/// A persistent interpreter session.
///
/// Owns the root scope, so variables and functions defined by one call to
/// [`Session::run`] are visible to the next.
#[derive(Debug, Default)]
pub struct Session {
    scope:  Scope<'static>,
    config: Config,
}

impl Session {
    /// Creates a session with an empty root scope and default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session with an empty root scope and the given settings.
    #[must_use]
    pub fn with_config(config: Config) -> Self {
        Self { scope: Scope::new(),
               config }
    }

    /// Parses and executes `source` in this session.
    ///
    /// # Errors
    /// See [`run`].
    pub fn run(&mut self, source: &str) -> Result<Value, Error> {
        run(source, &mut self.scope, &self.config)
    }

    /// The root scope.
    #[must_use]
    pub const fn scope(&self) -> &Scope<'static> {
        &self.scope
    }

    /// The session's settings.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }
}
