/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST against an explicit scope, performs
/// assignment and arithmetic, invokes function values and reports runtime
/// errors such as calling a number.
///
/// # Responsibilities
/// - Evaluates every expression variant.
/// - Binds parameters in a fresh scope per call and limits call depth.
/// - Applies the configured division-by-zero policy.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// paired with the line it appears on: numbers, identifiers, the `fun` and
/// `end` keywords, operators and punctuation. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Skips spaces, tabs and newlines while counting lines.
/// - Distinguishes `-` from `->` and `1.5` from `1.`.
/// - Reports any other character as a lexical error.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// a [`document::Document`] of statements, each a list of expressions.
/// Operators are parsed by precedence climbing.
///
/// # Responsibilities
/// - Converts tokens into AST nodes.
/// - Reports the first missing or unexpected token; there is no recovery.
/// - Rejects input nested deeper than the configured limit.
pub mod parser;
/// Name tables linked into chains.
///
/// A root scope lives for a whole session; every function call gets a child
/// scope of its caller.
pub mod scope;
/// Runtime values: numbers and functions.
pub mod value;
/// A parsed program together with the scope it runs against.
pub mod document;
