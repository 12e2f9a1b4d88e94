/// Default bound on how deeply expressions may nest while parsing.
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;
/// Default bound on how many function calls may be active at once.
pub const DEFAULT_MAX_CALL_DEPTH: usize = 256;

/// How `/` behaves when the divisor is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DivisionPolicy {
    /// IEEE 754 semantics: `1/0` is infinity and `0/0` is NaN.
    #[default]
    Ieee,
    /// Division by zero is a runtime error.
    Strict,
}

/// Interpreter settings.
///
/// A `Config` is fixed for the lifetime of a session and is consulted by both
/// the parser (nesting limit) and the evaluator (call limit, division).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting depth of expressions accepted by the parser.
    pub max_nesting_depth: usize,
    /// Maximum number of simultaneously active function calls.
    pub max_call_depth:    usize,
    /// Behaviour of division by zero.
    pub division:          DivisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
               max_call_depth:    DEFAULT_MAX_CALL_DEPTH,
               division:          DivisionPolicy::default(), }
    }
}

impl Config {
    #[must_use]
    pub const fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_max_call_depth(mut self, depth: usize) -> Self {
        self.max_call_depth = depth;
        self
    }

    #[must_use]
    pub const fn with_division(mut self, division: DivisionPolicy) -> Self {
        self.division = division;
        self
    }
}
