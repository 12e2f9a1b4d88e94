use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Called a name whose value is not a function.
    NotCallable {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The number of parameters the function declares.
        expected: usize,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A function without body expressions was invoked.
    EmptyBody {
        /// The source line of the function literal.
        line: usize,
    },
    /// Calls are nested deeper than the configured limit.
    RecursionLimit {
        /// The configured maximum call depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero under strict division.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotCallable { .. } | Self::ArgumentCountMismatch { .. } => ErrorKind::Invocation,
            Self::EmptyBody { .. } => ErrorKind::EmptyBody,
            Self::RecursionLimit { .. } => ErrorKind::RecursionLimit,
            Self::TypeError { .. } => ErrorKind::Type,
            Self::DivisionByZero { .. } => ErrorKind::Arithmetic,
        }
    }

    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::NotCallable { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::EmptyBody { line }
            | Self::RecursionLimit { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotCallable { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::ArgumentCountMismatch { expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: Argument count mismatch. Expected {expected}, but found {found}."),
            Self::EmptyBody { line } => write!(f,
                                               "Error on line {line}: Function body is empty and has no value."),
            Self::RecursionLimit { limit, line } => write!(f,
                                                           "Error on line {line}: Call depth exceeds the limit of {limit}."),
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
        }
    }
}

impl std::error::Error for RuntimeError {}
