use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{Position, Span};

lazy_static! {
    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("=", TokenKind::Assign);
        map.insert(";", TokenKind::Semicolon);
        map.insert("(", TokenKind::LParen);
        map.insert(")", TokenKind::RParen);
        map.insert(",", TokenKind::Comma);
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("{", TokenKind::LBrace);
        map.insert("}", TokenKind::RBrace);
        map.insert("[", TokenKind::LBracket);
        map.insert("]", TokenKind::RBracket);
        map.insert(":", TokenKind::Colon);
        map.insert(".", TokenKind::Period);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<", TokenKind::Less);
        map.insert(">", TokenKind::Greater);
        map.insert("!", TokenKind::Bang);
        map.insert("*", TokenKind::Star);
        map.insert("/", TokenKind::Slash);
        map.insert("%", TokenKind::Percent);
        map.insert("&", TokenKind::BitAnd);
        map.insert("|", TokenKind::BitOr);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("<=", TokenKind::LessEq);
        map.insert(">=", TokenKind::GreaterEq);
        map.insert("=>", TokenKind::Lambda);
        map.insert("_", TokenKind::Underscore);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,
    Integer,
    Float,
    String,

    Assign,   // =
    Equal,    // ==
    NotEqual, // !=
    Bang,     // !

    Less,
    LessEq,
    Greater,
    GreaterEq,

    Comma,
    Colon,
    Semicolon,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,

    BitAnd, // &
    BitOr,  // |
    And,    // &&
    Or,     // ||
    Bool,

    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    Lambda,     // =>
    Underscore, // _
    Period,     // .

    Unknown,
}

impl TokenKind {
    /// The canonical display string used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assign => "=",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Bang => "!",
            TokenKind::Less => "<",
            TokenKind::LessEq => "<=",
            TokenKind::Greater => ">",
            TokenKind::GreaterEq => ">=",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::BitAnd => "&",
            TokenKind::BitOr => "|",
            TokenKind::And => "&&",
            TokenKind::Or => "||",
            TokenKind::Bool => "BOOL",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::Lambda => "=>",
            TokenKind::Underscore => "_",
            TokenKind::Period => ".",
            TokenKind::Unknown => "<UNKNOWN>",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classifies the raw text of one scanned symbol.
///
/// Exact symbol matches win. Otherwise a leading digit makes the literal
/// numeric (`Float` if it contains a `.`), and `.` followed by a digit is a
/// `Float`. Numeric literals are not validated beyond that: `1abc` is an
/// `Integer`.
pub fn classify(literal: &str) -> TokenKind {
    if let Some(kind) = SYMBOL_LOOKUP.get(literal) {
        return *kind;
    }

    let mut chars = literal.chars();
    let first = match chars.next() {
        Some(first) => first,
        None => return TokenKind::Unknown,
    };

    if first.is_ascii_digit() {
        if literal.contains('.') {
            return TokenKind::Float;
        }
        return TokenKind::Integer;
    }

    if first == '.' && chars.next().is_some_and(|second| second.is_ascii_digit()) {
        return TokenKind::Float;
    }

    if first.is_alphabetic() || first == '_' {
        TokenKind::Identifier
    } else if first == '"' && literal.len() >= 2 && literal.ends_with('"') {
        TokenKind::String
    } else {
        TokenKind::Unknown
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:?} [{}-{}]",
            self.kind, self.literal, self.span.start, self.span.end
        )
    }
}

impl Token {
    /// An end-of-input token anchored at `position`.
    pub fn eof(position: Position) -> Self {
        Token {
            kind: TokenKind::EOF,
            literal: String::new(),
            span: Span::new(position, position),
        }
    }

    pub fn start(&self) -> Position {
        self.span.start
    }

    pub fn end(&self) -> Position {
        self.span.end
    }
}
