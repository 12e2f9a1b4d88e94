/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unknown characters, missing tokens, invalid assignment targets and
/// excessive nesting.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: calling a
/// non-function, arity mismatches, empty bodies, runaway recursion, type
/// mismatches and strict division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Broad category of an error, independent of its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An unrecognized character in the source.
    Lex,
    /// A malformed token sequence.
    Syntax,
    /// Calling something that cannot be called, or with the wrong arity.
    Invocation,
    /// Invoking a function that has no body expressions.
    EmptyBody,
    /// Parse nesting or call depth exceeded its configured limit.
    RecursionLimit,
    /// Arithmetic applied to a function value.
    Type,
    /// Division by zero under strict division.
    Arithmetic,
}

/// Any error produced while parsing or executing a request.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The source could not be tokenized or parsed.
    Parse(ParseError),
    /// The parsed document failed while executing.
    Runtime(RuntimeError),
}

impl Error {
    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(e) => e.kind(),
            Self::Runtime(e) => e.kind(),
        }
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => std::fmt::Display::fmt(e, f),
            Self::Runtime(e) => std::fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
