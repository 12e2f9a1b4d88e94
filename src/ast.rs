use std::rc::Rc;

/// An arithmetic binary operator.
///
/// Operators are ordered by binding strength through [`precedence`]:
/// multiplication and division bind tighter than addition and subtraction.
/// Assignment is not an arithmetic operator and has its own node,
/// [`Expr::Assign`].
///
/// [`precedence`]: BinaryOperator::precedence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOperator {
    /// Binding strength used by precedence climbing. Higher binds tighter.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 2,
            Self::Mul | Self::Div => 3,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{symbol}")
    }
}

/// A function literal: `fun(params) -> body end`.
///
/// The literal is itself the callable value. It is shared behind an [`Rc`]
/// so that a function stored in a long-lived scope stays valid after the
/// document that defined it has been dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Parameter names in declaration order.
    pub params: Vec<String>,
    /// Body expressions; the value of the last one is the call result.
    pub body:   Vec<Expr>,
    /// Line number of the `fun` keyword.
    pub line:   usize,
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "fun({})", self.params.join(", "))
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// The set of variants is closed; the evaluator matches on it exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number {
        /// The parsed value.
        value: f64,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number of the operator.
        line:  usize,
    },
    /// Assignment `name = value`.
    ///
    /// Only a variable can be assigned to, so the target is kept as its name.
    Assign {
        /// Variable written in the current scope.
        name:  String,
        /// Right-hand side.
        value: Box<Self>,
        /// Line number of the `=`.
        line:  usize,
    },
    /// A function literal.
    Function(Rc<Function>),
    /// Call of the function stored under `name`.
    Call {
        /// Name the callee is looked up by.
        name:      String,
        /// Argument expressions, evaluated in the caller's scope.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
}

/// A statement: one or more comma-separated expressions closed by `.`.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Expressions in source order.
    pub expressions: Vec<Expr>,
    /// Line number the statement starts on.
    pub line:        usize,
}
