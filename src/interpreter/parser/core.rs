use std::iter::Peekable;

use crate::{
    ast::Statement,
    config::Config,
    error::ParseError,
    interpreter::{
        document::Document,
        lexer::{Token, tokenize},
        parser::statement::parse_statement,
        scope::Scope,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// State threaded through the recursive parsing functions.
///
/// Tracks how deeply expressions are nested, counting both parenthesized
/// subexpressions and operator chains, so that pathological input fails
/// with [`ParseError::NestingTooDeep`] instead of exhausting the stack, and
/// remembers the last line of input for errors raised at end of input.
pub struct ParserState {
    depth:    usize,
    limit:    usize,
    end_line: usize,
}

impl ParserState {
    /// Creates a state allowing at most `limit` nested expressions.
    #[must_use]
    pub const fn new(limit: usize, end_line: usize) -> Self {
        Self { depth: 0,
               limit,
               end_line }
    }

    /// Enters one level of expression nesting.
    ///
    /// # Errors
    /// Fails if the nesting limit has already been reached.
    pub fn enter(&mut self, line: usize) -> ParseResult<()> {
        if self.depth >= self.limit {
            return Err(ParseError::NestingTooDeep { limit: self.limit,
                                                    line });
        }
        self.depth += 1;
        Ok(())
    }

    /// Leaves one level of expression nesting.
    pub const fn leave(&mut self) {
        self.release(1);
    }

    /// Leaves `levels` levels of expression nesting at once.
    pub const fn release(&mut self, levels: usize) {
        self.depth = self.depth.saturating_sub(levels);
    }

    /// The last line of the input.
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.end_line
    }

    /// The line of a peeked token, or the last line at end of input.
    #[must_use]
    pub fn line_of(&self, peeked: Option<&&(Token, usize)>) -> usize {
        peeked.map_or(self.end_line, |(_, line)| *line)
    }
}

/// Parses source text into a [`Document`] bound to `scope`.
///
/// The scope is only borrowed here; it is not touched until the document is
/// executed.
///
/// # Errors
/// Returns a `ParseError` on the first lexical or syntax error; nothing is
/// recovered.
pub fn parse<'s, 'p>(source: &str,
                     scope: &'s mut Scope<'p>,
                     config: &Config)
                     -> ParseResult<Document<'s, 'p>> {
    let tokens = tokenize(source)?;
    let end_line = tokens.last().map_or(1, |(_, line)| *line);

    let mut state = ParserState::new(config.max_nesting_depth, end_line);
    let statements = parse_statements(&mut tokens.iter().peekable(), &mut state)?;

    Ok(Document::new(scope, statements, *config))
}

/// Parses statements until the token stream is exhausted.
///
/// At least one statement is always parsed, so empty input is an error.
///
/// Grammar: `document := statement+`
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>,
                               state: &mut ParserState)
                               -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = vec![parse_statement(tokens, state)?];

    while tokens.peek().is_some() {
        statements.push(parse_statement(tokens, state)?);
    }

    Ok(statements)
}
