use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Expr, Statement},
    config::Config,
    error::RuntimeError,
    interpreter::{scope::Scope, value::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Walks the AST against a scope.
///
/// The evaluator holds no variables itself; every operation takes the active
/// [`Scope`] explicitly. It only tracks the configuration and how many calls
/// are currently active.
pub struct Evaluator {
    pub(crate) config:     Config,
    pub(crate) call_depth: usize,
}

impl Evaluator {
    /// Creates an evaluator with no active calls.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config,
               call_depth: 0 }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation.
    /// Numbers evaluate to themselves, variables are read from the scope
    /// chain, and function literals evaluate to the function without running
    /// its body.
    pub fn eval(&mut self, expr: &Expr, scope: &mut Scope<'_>) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Number { value, .. } => Ok(Value::Number(*value)),
            Expr::Variable { name, .. } => Ok(scope.read(name)),
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => self.eval_binary_op(left, *op, right, *line, scope),
            Expr::Assign { name, value, .. } => self.eval_assign(name, value, scope),
            Expr::Function(function) => Ok(Value::Function(Rc::clone(function))),
            Expr::Call { name,
                         arguments,
                         line, } => self.eval_call(name, arguments, *line, scope),
        })
    }

    /// Evaluates expressions in order.
    ///
    /// # Returns
    /// The value of the last expression, or `None` for an empty sequence.
    pub fn eval_sequence(&mut self,
                         exprs: &[Expr],
                         scope: &mut Scope<'_>)
                         -> EvalResult<Option<Value>> {
        let mut result = None;

        for expr in exprs {
            result = Some(self.eval(expr, scope)?);
        }

        Ok(result)
    }

    /// Executes statements in order against `scope`.
    ///
    /// Effects of statements that completed before a failing one are kept.
    ///
    /// # Returns
    /// The value of the last expression of the last statement.
    pub fn eval_statements(&mut self,
                           statements: &[Statement],
                           scope: &mut Scope<'_>)
                           -> EvalResult<Value> {
        let mut result = None;

        for statement in statements {
            trace!(line = statement.line,
                   expressions = statement.expressions.len(),
                   "evaluating statement");

            if let Some(value) = self.eval_sequence(&statement.expressions, scope)? {
                result = Some(value);
            }
        }

        // The parser never produces an empty document or statement.
        Ok(result.unwrap_or_default())
    }
}
