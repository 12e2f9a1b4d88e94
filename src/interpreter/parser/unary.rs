use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_expression,
            core::{ParseResult, ParserState},
            utils::{expect, parse_comma_separated},
        },
    },
};

/// Parses a term: the operand of a binary operator.
///
/// Grammar:
/// ```text
///     unary := "(" expression ")"
///            | number
///            | identifier
///            | identifier "(" (expression ("," expression)*)? ")"
/// ```
///
/// # Errors
/// Returns a `ParseError` if the closing `)` is missing, the next token
/// cannot start a term, or the input ends.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>,
                                 state: &mut ParserState)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens, 0, state)?;
            expect(tokens, &Token::RParen, state)?;
            Ok(expr)
        },
        Some((Token::Number(value), line)) => Ok(Expr::Number { value: *value,
                                                                line:  *line, }),
        Some((Token::Identifier(name), line)) => parse_variable_or_call(tokens, name, *line, state),
        Some((tok, line)) => Err(ParseError::UnexpectedToken { token: tok.to_string(),
                                                               line:  *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: state.end_line() }),
    }
}

/// Parses what follows an identifier.
///
/// An identifier immediately followed by `(` is a call whose arguments are
/// full expressions; otherwise it is a variable reference.
fn parse_variable_or_call<'a, I>(tokens: &mut Peekable<I>,
                                 name: &str,
                                 line: usize,
                                 state: &mut ParserState)
                                 -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LParen, _)) = tokens.peek() {
        tokens.next();

        let arguments = parse_comma_separated(tokens,
                                              state,
                                              |tokens, state| parse_expression(tokens, 0, state),
                                              &Token::RParen)?;

        return Ok(Expr::Call { name: name.to_string(),
                               arguments,
                               line });
    }

    Ok(Expr::Variable { name: name.to_string(),
                        line })
}
