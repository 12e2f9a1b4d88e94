use crate::error::ErrorKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A specific token was required but another one was found.
    Expected {
        /// Description of what was required, e.g. `'.'`.
        expected: String,
        /// Description of what was found instead.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found a token that cannot start a term.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The left-hand side of `=` is not a variable.
    InvalidAssignmentTarget {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Expressions are nested deeper than the configured limit.
    NestingTooDeep {
        /// The configured maximum nesting depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl ParseError {
    /// The category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::UnknownCharacter { .. } => ErrorKind::Lex,
            Self::NestingTooDeep { .. } => ErrorKind::RecursionLimit,
            Self::Expected { .. }
            | Self::UnexpectedToken { .. }
            | Self::UnexpectedEndOfInput { .. }
            | Self::InvalidAssignmentTarget { .. } => ErrorKind::Syntax,
        }
    }

    /// The source line the error was raised on.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownCharacter { line, .. }
            | Self::Expected { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line }
            | Self::InvalidAssignmentTarget { line }
            | Self::NestingTooDeep { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, line } => {
                write!(f, "Error on line {line}: Unknown character '{character}'.")
            },

            Self::Expected { expected,
                             found,
                             line, } => {
                write!(f, "Error on line {line}: Expected {expected} but found {found}.")
            },

            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },

            Self::InvalidAssignmentTarget { line } => write!(f,
                                                             "Error on line {line}: Only a variable can be assigned to."),

            Self::NestingTooDeep { limit, line } => write!(f,
                                                           "Error on line {line}: Expression nesting exceeds the limit of {limit}."),
        }
    }
}

impl std::error::Error for ParseError {}
