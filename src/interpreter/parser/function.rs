use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{Expr, Function},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParserState},
            statement::parse_expression_list,
            utils::{expect, parse_comma_separated, parse_identifier},
        },
    },
};

/// Parses a function literal.
///
/// Syntax:
/// ```text
///     fun(a, b) -> a * b, a + b end
/// ```
/// The parameter list may be empty. The body is an expression list and may
/// also be empty (`fun() -> end`); such a function parses, but fails when it
/// is called.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the `fun` keyword.
///
/// # Returns
/// An `Expr::Function` node.
///
/// # Errors
/// Returns `ParseError::Expected` if `(`, `)`, `->` or `end` is missing, and
/// propagates any error from the parameters or body.
pub(in crate::interpreter::parser) fn parse_function_literal<'a, I>(tokens: &mut Peekable<I>,
                                                                    state: &mut ParserState)
                                                                    -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::Fun, state)?;
    expect(tokens, &Token::LParen, state)?;

    let params = parse_comma_separated(tokens, state, parse_identifier, &Token::RParen)?;
    expect(tokens, &Token::Arrow, state)?;

    let body = match tokens.peek() {
        Some((Token::End, _)) => Vec::new(),
        _ => parse_expression_list(tokens, state)?,
    };
    expect(tokens, &Token::End, state)?;

    Ok(Expr::Function(Rc::new(Function { params,
                                         body,
                                         line })))
}
