use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, ParserState},
            function::parse_function_literal,
            unary::parse_unary,
        },
    },
    util::stack::ensure_sufficient_stack,
};

/// Parses an expression whose operators all bind tighter than
/// `min_precedence`.
///
/// A leading `fun` makes the whole expression a function literal, which is
/// not combined with any following operator. Otherwise a term is parsed and
/// binary operators are folded onto it by precedence climbing.
///
/// Pass `0` to parse a complete expression.
///
/// # Errors
/// Returns `ParseError::NestingTooDeep` when the nesting limit is reached, and
/// propagates any error from the operands.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>,
                               min_precedence: u8,
                               state: &mut ParserState)
                               -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    state.enter(state.line_of(tokens.peek()))?;

    let expr = ensure_sufficient_stack(|| {
        if let Some((Token::Fun, _)) = tokens.peek() {
            return parse_function_literal(tokens, state);
        }
        let left = parse_unary(tokens, state)?;
        parse_binary_rhs(tokens, min_precedence, left, state)
    });

    state.leave();
    expr
}

/// An operator token as seen by precedence climbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operator {
    Assign,
    Arithmetic(BinaryOperator),
}

impl Operator {
    const fn precedence(self) -> u8 {
        match self {
            Self::Assign => 1,
            Self::Arithmetic(op) => op.precedence(),
        }
    }

    const fn is_right_associative(self) -> bool {
        matches!(self, Self::Assign)
    }

    /// Builds the node for `left <op> right`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidAssignmentTarget` when the left side of `=`
    /// is not a variable.
    fn combine(self, left: Expr, right: Expr, line: usize) -> ParseResult<Expr> {
        match self {
            Self::Assign => {
                let Expr::Variable { name, .. } = left else {
                    return Err(ParseError::InvalidAssignmentTarget { line });
                };
                Ok(Expr::Assign { name,
                                  value: Box::new(right),
                                  line })
            },
            Self::Arithmetic(op) => Ok(Expr::BinaryOp { left: Box::new(left),
                                                        op,
                                                        right: Box::new(right),
                                                        line }),
        }
    }
}

/// Folds binary operators onto `left` while they bind tighter than
/// `min_precedence`.
///
/// An operator that does not bind tighter ends the loop, which makes equal
/// precedence operators group to the left: `8 - 2 - 1` is `(8 - 2) - 1`.
/// Assignment never ends the loop, so `a = b = 3` is `a = (b = 3)`.
///
/// Every folded operator puts `left` one level deeper in the tree, so each
/// one counts against the nesting limit until the loop ends.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` when the left side of `=` is
/// not a variable, and `ParseError::NestingTooDeep` when the folded chain
/// exceeds the nesting limit.
fn parse_binary_rhs<'a, I>(tokens: &mut Peekable<I>,
                           min_precedence: u8,
                           mut left: Expr,
                           state: &mut ParserState)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut folded = 0;

    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_operator(token)
    {
        if min_precedence >= op.precedence() && !op.is_right_associative() {
            break;
        }

        let line = *line;
        tokens.next();

        state.enter(line)?;
        folded += 1;

        let right = parse_expression(tokens, op.precedence(), state)?;
        left = op.combine(left, right, line)?;
    }

    state.release(folded);
    Ok(left)
}

/// Maps a token to the operator it denotes, if any.
const fn token_to_operator(token: &Token) -> Option<Operator> {
    match token {
        Token::Equals => Some(Operator::Assign),
        Token::Plus => Some(Operator::Arithmetic(BinaryOperator::Add)),
        Token::Minus => Some(Operator::Arithmetic(BinaryOperator::Sub)),
        Token::Star => Some(Operator::Arithmetic(BinaryOperator::Mul)),
        Token::Slash => Some(Operator::Arithmetic(BinaryOperator::Div)),
        _ => None,
    }
}
