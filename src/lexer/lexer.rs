use crate::{Position, MK_TOKEN};

use super::tokens::{lookup_identifier, Token, TokenKind};

/// Byte-oriented scanner producing one token per `next_token` call.
///
/// `ch` is the byte under the cursor (0 once the input is exhausted) and
/// `line`/`column` always describe where `ch` sits in the source.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: u8,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: 0,
            line: 1,
            column: 0,
        };

        lexer.read_char();
        lexer
    }

    /// Moves the cursor one byte forward, keeping line/column in step.
    pub fn read_char(&mut self) {
        let bytes = self.source.as_bytes();

        if self.read_pos >= bytes.len() {
            // Already parked on the end of input
            if self.read_pos > bytes.len() {
                return;
            }
            self.ch = 0;
        } else {
            self.ch = bytes[self.read_pos];
        }

        if self.ch == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        self.pos = self.read_pos;
        self.read_pos += 1;
    }

    pub fn peek_char(&self) -> u8 {
        self.source.as_bytes().get(self.read_pos).copied().unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let position = self.position();

        let token = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                MK_TOKEN!(TokenKind::Equal, String::from("=="), position)
            }
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                MK_TOKEN!(TokenKind::NotEqual, String::from("!="), position)
            }
            b'=' => self.single(TokenKind::Assign, position),
            b'!' => self.single(TokenKind::Bang, position),
            b'+' => self.single(TokenKind::Plus, position),
            b'-' => self.single(TokenKind::Minus, position),
            b'*' => self.single(TokenKind::Asterisk, position),
            b'/' => self.single(TokenKind::Slash, position),
            b'<' => self.single(TokenKind::LessThan, position),
            b'>' => self.single(TokenKind::BiggerThan, position),
            b',' => self.single(TokenKind::Comma, position),
            b';' => self.single(TokenKind::Semicolon, position),
            b'(' => self.single(TokenKind::OpeningParenthesis, position),
            b')' => self.single(TokenKind::ClosingParenthesis, position),
            b'{' => self.single(TokenKind::OpeningBrace, position),
            b'}' => self.single(TokenKind::ClosingBrace, position),
            b'[' => self.single(TokenKind::OpeningBracket, position),
            b']' => self.single(TokenKind::ClosingBracket, position),
            0 if self.at_eof() => return MK_TOKEN!(TokenKind::EOF, String::new(), position),
            c if is_identifier_start(c) => return self.read_identifier(position),
            c if c.is_ascii_digit() => return self.read_number(position),
            _ => return self.read_illegal(position),
        };

        self.read_char();
        token
    }

    fn single(&self, kind: TokenKind, position: Position) -> Token {
        MK_TOKEN!(kind, (self.ch as char).to_string(), position)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, predicate: fn(u8) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && predicate(self.ch) {
            self.read_char();
        }

        String::from(&self.source[start..self.pos])
    }

    fn read_identifier(&mut self, position: Position) -> Token {
        let literal = self.read_while(is_identifier_part);
        MK_TOKEN!(lookup_identifier(&literal), literal, position)
    }

    fn read_number(&mut self, position: Position) -> Token {
        let literal = self.read_while(|c| c.is_ascii_digit());
        MK_TOKEN!(TokenKind::Integer, literal, position)
    }

    fn read_illegal(&mut self, position: Position) -> Token {
        let illegal = self
            .source
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(self.ch as char);

        for _ in 0..illegal.len_utf8() {
            self.read_char();
        }

        MK_TOKEN!(TokenKind::Illegal, illegal.to_string(), position)
    }
}

fn is_identifier_start(c: u8) -> bool {
    c.is_ascii_alphabetic() || c == b'_'
}

fn is_identifier_part(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Scans the whole of `source`, returning every token including the final `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);

        if done {
            return tokens;
        }
    }
}
