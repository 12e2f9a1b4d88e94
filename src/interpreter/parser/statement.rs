use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, ParserState},
            utils::expect,
        },
    },
};

/// Parses a single statement: an expression list closed by `.`.
///
/// Grammar: `statement := expression_list "."`
///
/// # Errors
/// Returns `ParseError::Expected` if the terminating `.` is missing, and
/// propagates any error from the expressions.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              state: &mut ParserState)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = state.line_of(tokens.peek());
    let expressions = parse_expression_list(tokens, state)?;
    expect(tokens, &Token::Dot, state)?;

    Ok(Statement { expressions,
                   line })
}

/// Parses one or more comma-separated expressions.
///
/// Used for statements and for function bodies.
///
/// Grammar: `expression_list := expression ("," expression)*`
pub fn parse_expression_list<'a, I>(tokens: &mut Peekable<I>,
                                    state: &mut ParserState)
                                    -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut expressions = vec![parse_expression(tokens, 0, state)?];

    while let Some((Token::Comma, _)) = tokens.peek() {
        tokens.next();
        expressions.push(parse_expression(tokens, 0, state)?);
    }

    Ok(expressions)
}
