use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, ParserState},
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// Returns `ParseError::Expected` naming `expected` if another token, or the
/// end of input, is found.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token,
                                                    state: &ParserState)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        Some((tok, line)) => Err(ParseError::Expected { expected: expected.to_string(),
                                                        found:    tok.to_string(),
                                                        line:     *line, }),
        None => Err(ParseError::Expected { expected: expected.to_string(),
                                           found:    "end of input".to_string(),
                                           line:     state.end_line(), }),
    }
}

/// Parses a comma-separated list of items until a closing token.
///
/// This utility is shared by call argument lists and function parameter
/// lists. It repeatedly calls `parse_item` to parse one element, expecting
/// either a comma, to continue the list, or `closing`, to end it.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := (item ("," item)*)? closing`
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    state: &mut ParserState,
    parse_item: impl Fn(&mut Peekable<I>, &mut ParserState) -> ParseResult<T>,
    closing: &Token)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens, state)?);
        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((tok, _)) if tok == closing => break,
            Some((tok, line)) => {
                return Err(ParseError::Expected { expected: format!("',' or {closing}"),
                                                  found:    tok.to_string(),
                                                  line:     *line, });
            },
            None => {
                return Err(ParseError::Expected { expected: closing.to_string(),
                                                  found:    "end of input".to_string(),
                                                  line:     state.end_line(), });
            },
        }
    }
    Ok(items)
}

/// Parses a plain identifier and returns its name.
///
/// # Errors
/// Returns a `ParseError` if the next token is not an identifier or the input
/// ends.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                              state: &mut ParserState)
                                                              -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Identifier(s), _)) => Ok(s.clone()),
        Some((tok, line)) => Err(ParseError::Expected { expected: "an identifier".to_string(),
                                                        found:    tok.to_string(),
                                                        line:     *line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: state.end_line() }),
    }
}
