use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Function},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// Every expression evaluates to either a number or a function. Functions
/// are the literal nodes themselves, shared by reference count.
#[derive(Debug, Clone)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A callable function value.
    Function(Rc<Function>),
}

impl Value {
    /// The value an unassigned variable reads as.
    pub const ZERO: Self = Self::Number(0.0);

    /// Returns the number, if this is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Function(_) => None,
        }
    }

    /// Returns the function, if this is a function.
    #[must_use]
    pub const fn as_function(&self) -> Option<&Rc<Function>> {
        match self {
            Self::Function(function) => Some(function),
            Self::Number(_) => None,
        }
    }

    /// Name of the value's type, for error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Function(_) => "function",
        }
    }

    /// Unwraps a number for an operand of `op`, reporting a type error
    /// otherwise.
    pub(crate) fn expect_number(&self, op: BinaryOperator, line: usize) -> EvalResult<f64> {
        self.as_number().ok_or_else(|| RuntimeError::TypeError {
            details: format!("operator '{op}' expects numbers, found a {}", self.type_name()),
            line,
        })
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::ZERO
    }
}

/// Numbers compare numerically; functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq<f64> for Value {
    fn eq(&self, other: &f64) -> bool {
        self.as_number() == Some(*other)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
