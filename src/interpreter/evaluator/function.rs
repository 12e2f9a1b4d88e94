use tracing::debug;

use crate::{
    ast::{Expr, Function},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        scope::Scope,
        value::Value,
    },
};

impl Evaluator {
    /// Evaluates a call expression.
    ///
    /// The callee is read from the scope chain like any variable, so an unknown
    /// name reads as zero and fails as not callable.
    ///
    /// # Errors
    /// Returns `RuntimeError::NotCallable` if `name` does not hold a function,
    /// and propagates any error from [`Evaluator::invoke`].
    pub(crate) fn eval_call(&mut self,
                            name: &str,
                            arguments: &[Expr],
                            line: usize,
                            scope: &mut Scope<'_>)
                            -> EvalResult<Value> {
        let Value::Function(function) = scope.read(name) else {
            return Err(RuntimeError::NotCallable { name: name.to_string(),
                                                   line });
        };

        debug!(function = name,
               arity = function.params.len(),
               depth = self.call_depth,
               "calling function");

        self.invoke(&function, arguments, line, scope)
    }

    /// Invokes `function` with argument expressions from `caller`.
    ///
    /// Arguments are evaluated in the caller's scope from left to right. The
    /// body then runs in a new scope whose parent is the caller's scope, not
    /// the scope the function was defined in, with each parameter bound to
    /// its argument. The new scope is dropped when the call returns.
    ///
    /// # Returns
    /// The value of the last body expression.
    ///
    /// # Errors
    /// - `ArgumentCountMismatch` if the number of arguments differs from the
    ///   number of parameters.
    /// - `RecursionLimit` if the call would exceed the configured call depth.
    /// - `EmptyBody` if the function has no body expressions.
    pub fn invoke(&mut self,
                  function: &Function,
                  arguments: &[Expr],
                  line: usize,
                  caller: &mut Scope<'_>)
                  -> EvalResult<Value> {
        let values = arguments.iter()
                              .map(|argument| self.eval(argument, caller))
                              .collect::<EvalResult<Vec<_>>>()?;

        if values.len() != function.params.len() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: function.params.len(),
                                                             found: values.len(),
                                                             line });
        }

        if self.call_depth >= self.config.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.config.max_call_depth,
                                                      line });
        }

        let mut frame = Scope::with_parent(caller);
        for (param, value) in function.params.iter().zip(values) {
            frame.write(param, value);
        }

        self.call_depth += 1;
        let result = self.eval_sequence(&function.body, &mut frame);
        self.call_depth -= 1;

        result?.ok_or(RuntimeError::EmptyBody { line: function.line })
    }
}
