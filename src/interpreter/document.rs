use tracing::debug;

use crate::{
    ast::Statement,
    config::Config,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        scope::Scope,
        value::Value,
    },
};

/// A parsed program bound to the scope it will run against.
///
/// Produced by [`parse`](crate::interpreter::parser::core::parse) and
/// consumed by [`Document::execute`].
pub struct Document<'s, 'p> {
    scope:      &'s mut Scope<'p>,
    statements: Vec<Statement>,
    config:     Config,
}

impl<'s, 'p> Document<'s, 'p> {
    pub(crate) const fn new(scope: &'s mut Scope<'p>,
                            statements: Vec<Statement>,
                            config: Config)
                            -> Self {
        Self { scope,
               statements,
               config }
    }

    /// The parsed statements, in source order. Never empty.
    #[must_use]
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Runs every statement against the bound scope.
    ///
    /// # Returns
    /// The value of the last expression of the last statement.
    ///
    /// # Errors
    /// Stops at the first `RuntimeError`. Assignments made by earlier
    /// expressions stay in the scope.
    pub fn execute(self) -> EvalResult<Value> {
        debug!(statements = self.statements.len(), "executing document");

        Evaluator::new(self.config).eval_statements(&self.statements, self.scope)
    }
}
