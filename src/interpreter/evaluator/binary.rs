use crate::{
    ast::{BinaryOperator, Expr},
    config::DivisionPolicy,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        scope::Scope,
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates an arithmetic operation.
    ///
    /// Evaluates the left operand, then the right one, and combines the two
    /// numbers.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` if either operand is a function.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize,
                                 scope: &mut Scope<'_>)
                                 -> EvalResult<Value> {
        let lhs = self.eval(left, scope)?.expect_number(op, line)?;
        let rhs = self.eval(right, scope)?.expect_number(op, line)?;

        self.eval_arithmetic(op, lhs, rhs, line).map(Value::Number)
    }

    /// Evaluates `value` and binds it to `name` in `scope` only.
    ///
    /// # Returns
    /// The assigned value.
    pub(crate) fn eval_assign(&mut self,
                              name: &str,
                              value: &Expr,
                              scope: &mut Scope<'_>)
                              -> EvalResult<Value> {
        let value = self.eval(value, scope)?;
        scope.write(name, value.clone());
        Ok(value)
    }

    /// Applies an arithmetic operator to two numbers.
    ///
    /// Division by zero yields infinity or NaN unless the configuration asks
    /// for [`DivisionPolicy::Strict`].
    fn eval_arithmetic(&self, op: BinaryOperator, lhs: f64, rhs: f64, line: usize) -> EvalResult<f64> {
        match op {
            BinaryOperator::Add => Ok(lhs + rhs),
            BinaryOperator::Sub => Ok(lhs - rhs),
            BinaryOperator::Mul => Ok(lhs * rhs),
            BinaryOperator::Div => {
                if rhs == 0.0 && self.config.division == DivisionPolicy::Strict {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(lhs / rhs)
            },
        }
    }
}
