use std::io::{self, Read};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{Position, Span, MK_TOKEN};

use super::tokens::{classify, Token, TokenKind};

/// A pull source of tokens.
///
/// Every call returns exactly one token. Once the input is exhausted the
/// source keeps returning end-of-input tokens.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

pub type PatternHandler = fn(&mut Lexer, String) -> Option<Token>;

pub struct Pattern {
    regex: Regex,
    handler: PatternHandler,
}

impl Pattern {
    fn new(regex: &str, handler: PatternHandler) -> Self {
        Pattern {
            regex: Regex::new(regex).expect("token patterns are valid regular expressions"),
            handler,
        }
    }
}

lazy_static! {
    // Tried in order at the cursor; the first match wins.
    static ref PATTERNS: Vec<Pattern> = vec![
        Pattern::new(r"^[ \t\r\n]+", skip_handler),
        Pattern::new(r"^//[^\n]*", skip_handler),
        Pattern::new(r"^/\*(?s:.*?)\*/", skip_handler),
        Pattern::new(r#"^"(?:[^"\\\n]|\\.)*""#, symbol_handler),
        Pattern::new(r"^[0-9]\w*(?:\.\w*)?", symbol_handler),
        Pattern::new(r"^\.[0-9]\w*", symbol_handler),
        Pattern::new(r"^[\p{L}_][\p{L}\p{N}_]*", symbol_handler),
        Pattern::new(r"^(?:==|!=|<=|>=|&&|\|\||=>)", symbol_handler),
    ];
}

/// Scans source text into tokens on demand.
#[derive(Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    cursor: Position,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            source,
            pos: 0,
            cursor: Position::start(),
        }
    }

    /// Buffers everything `reader` yields and scans it.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Lexer> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(Lexer::new(source))
    }

    /// Moves the cursor over `text`, which must be the next slice of the source.
    fn advance_over(&mut self, text: &str) {
        self.pos += text.len();
        for ch in text.chars() {
            if ch == '\n' {
                self.cursor.line += 1;
                self.cursor.column = 0;
            } else {
                self.cursor.column += 1;
            }
        }
    }

    pub fn cursor(&self) -> Position {
        self.cursor
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn scan(&self) -> (PatternHandler, String) {
        let remainder = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remainder) {
                return (pattern.handler, found.as_str().to_string());
            }
        }

        // Anything no pattern claims is a single-character symbol.
        let single = remainder.chars().next().map(String::from).unwrap_or_default();
        (symbol_handler, single)
    }
}

impl TokenSource for Lexer {
    fn next_token(&mut self) -> Token {
        while !self.at_eof() {
            let (handler, literal) = self.scan();
            if let Some(token) = handler(self, literal) {
                return token;
            }
        }

        Token::eof(self.cursor)
    }
}

fn skip_handler(lexer: &mut Lexer, matched: String) -> Option<Token> {
    lexer.advance_over(&matched);
    None
}

fn symbol_handler(lexer: &mut Lexer, literal: String) -> Option<Token> {
    let start = lexer.cursor();
    lexer.advance_over(&literal);
    let end = lexer.cursor();

    let token = MK_TOKEN!(classify(&literal), literal, Span::new(start, end));
    trace!(
        kind = %token.kind,
        literal = %token.literal,
        start = %start,
        end = %end,
        "scanned token"
    );

    Some(token)
}

/// Collects every token of `source`, up to and including end of input.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
