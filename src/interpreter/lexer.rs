use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// End of input is not a token; it is the end of the token stream.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`.
    #[regex(r"[0-9]+", lex_number)]
    Number(f64),
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[_a-zA-Z][_a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `fun`
    #[token("fun")]
    Fun,
    /// `end`
    #[token("end")]
    End,
    /// `.`
    #[token(".")]
    Dot,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `->`
    #[token("->")]
    Arrow,
    /// `=`
    #[token("=")]
    Equals,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,

    /// Line breaks; counted, never emitted.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces and tabs.
    #[regex(r"[ \t]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "number {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Fun => write!(f, "'fun'"),
            Self::End => write!(f, "'end'"),
            Self::Dot => write!(f, "'.'"),
            Self::Comma => write!(f, "','"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::Arrow => write!(f, "'->'"),
            Self::Equals => write!(f, "'='"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Finishes a numeric literal whose integer part has just been matched.
///
/// A `.` belongs to the number only when at least one digit follows it, so
/// `1.5` is a single literal while `1.` is the literal `1` followed by a
/// statement terminator.
///
/// # Returns
/// - `Some(f64)`: The parsed value of the literal.
/// - `None`: If the slice is not a valid float.
fn lex_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    let rest = lex.remainder().as_bytes();

    if rest.len() > 1 && rest[0] == b'.' && rest[1].is_ascii_digit() {
        let fraction = rest[1..].iter().take_while(|b| b.is_ascii_digit()).count();
        lex.bump(1 + fraction);
    }

    lex.slice().parse().ok()
}

/// Pull-based tokenizer over a source string.
///
/// Yields each token together with the line it starts on. The first
/// unrecognized character produces a [`ParseError::UnknownCharacter`].
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, Token>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`, on line 1.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<(Token, usize), ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.inner.next()?;
        let line = self.inner.extras.line;

        match token {
            Ok(tok) => Some(Ok((tok, line))),
            Err(()) => {
                let character = self.inner.slice().chars().next().unwrap_or('\0');
                Some(Err(ParseError::UnknownCharacter { character, line }))
            },
        }
    }
}

/// Converts a whole source string into `(Token, line)` pairs.
///
/// # Errors
/// Returns the first lexical error encountered; no tokens are returned in that
/// case.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    Lexer::new(source).collect()
}
