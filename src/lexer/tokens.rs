use lazy_static::lazy_static;
use regex::Regex;
use std::fmt::Display;

use crate::Position;

lazy_static! {
    /// Compiled pattern per kind, in declaration order. Every pattern is
    /// anchored so it can only match at the scanner's current offset.
    pub static ref PATTERNS: Vec<(TokenKind, Regex)> = TokenKind::ALL
        .iter()
        .map(|kind| {
            (
                *kind,
                Regex::new(&format!("^(?:{})", kind.pattern())).unwrap(),
            )
        })
        .collect();
}

/// The lexical categories of the language.
///
/// Declaration order doubles as matching priority: when two kinds match a
/// span of the same length at the same offset, the kind declared first
/// wins. That is how `integer` stays a keyword while `integers` becomes an
/// identifier under the longest-match rule.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Comment,
    Float,
    Int,

    // Reserved words
    Program,
    Var,
    Integer,
    Real,
    If,
    Then,
    Else,
    Begin,
    End,
    While,
    Do,
    Write,
    Read,
    Procedure,

    NotEquals,     // <>
    GreaterEquals, // >=
    LessEquals,    // <=
    Assign,        // :=

    Dollar,
    OpenParen,
    CloseParen,
    Star,
    Slash,
    Plus,
    Dash,
    Greater,
    Less,
    Colon,
    Semicolon,
    Equals,
    Comma,
    Dot,

    Identifier,

    Newline,
    Whitespace,
    Mismatch, // Any leftover character
}

impl TokenKind {
    pub const ALL: [TokenKind; 39] = [
        TokenKind::Comment,
        TokenKind::Float,
        TokenKind::Int,
        TokenKind::Program,
        TokenKind::Var,
        TokenKind::Integer,
        TokenKind::Real,
        TokenKind::If,
        TokenKind::Then,
        TokenKind::Else,
        TokenKind::Begin,
        TokenKind::End,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::Write,
        TokenKind::Read,
        TokenKind::Procedure,
        TokenKind::NotEquals,
        TokenKind::GreaterEquals,
        TokenKind::LessEquals,
        TokenKind::Assign,
        TokenKind::Dollar,
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Plus,
        TokenKind::Dash,
        TokenKind::Greater,
        TokenKind::Less,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Equals,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::Identifier,
        TokenKind::Newline,
        TokenKind::Whitespace,
        TokenKind::Mismatch,
    ];

    pub fn pattern(&self) -> &'static str {
        match self {
            TokenKind::Comment => r"\{[^}]*\}",
            TokenKind::Float => r"[0-9]+\.[0-9]+",
            TokenKind::Int => "[0-9]+",
            TokenKind::Program => "program",
            TokenKind::Var => "var",
            TokenKind::Integer => "integer",
            TokenKind::Real => "real",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::Write => "write",
            TokenKind::Read => "read",
            TokenKind::Procedure => "procedure",
            TokenKind::NotEquals => "<>",
            TokenKind::GreaterEquals => ">=",
            TokenKind::LessEquals => "<=",
            TokenKind::Assign => ":=",
            TokenKind::Dollar => r"\$",
            TokenKind::OpenParen => r"\(",
            TokenKind::CloseParen => r"\)",
            TokenKind::Star => r"\*",
            TokenKind::Slash => "/",
            TokenKind::Plus => r"\+",
            TokenKind::Dash => "-",
            TokenKind::Greater => ">",
            TokenKind::Less => "<",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Equals => "=",
            TokenKind::Comma => ",",
            TokenKind::Dot => r"\.",
            TokenKind::Identifier => "[a-zA-Z][a-zA-Z0-9]*",
            TokenKind::Newline => r"\n",
            TokenKind::Whitespace => "[ \t\r]+",
            TokenKind::Mismatch => ".",
        }
    }

    /// Kinds that never produce a token in the output stream.
    pub fn is_trivia(&self) -> bool {
        matches!(
            self,
            TokenKind::Comment | TokenKind::Newline | TokenKind::Whitespace
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A classified, positioned lexical unit.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub line: u32,
    pub column: u32,
}

impl Token {
    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }
}

// Equality is (kind, text) only; position never takes part, so a token can
// be compared against a literal template regardless of where it was found.
impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:>13}  {:?} at {}:{}",
            self.kind.to_string(),
            self.text,
            self.line,
            self.column
        )
    }
}
