use super::token::{Token, TokenKind};
use crate::error::{Error, Result};

/// Scanner for S-expression source text
pub struct SExprScanner {
    /// Source code as character vector
    source: Vec<char>,
    /// Accumulated tokens
    tokens: Vec<Token>,
    /// Start position of current token
    start: usize,
    /// Current position in source
    current: usize,
    /// Current line number (1-indexed)
    line: usize,
    /// Current column number (1-indexed)
    column: usize,
    /// Column where the current token started
    start_column: usize,
}

impl SExprScanner {
    /// Creates a new S-expression scanner from source code
    pub fn new(source: &str) -> Self {
        SExprScanner {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            column: 1,
            start_column: 1,
        }
    }

    /// Scans all tokens from source code and returns them as a vector
    pub fn scan_tokens(&mut self) -> Result<Vec<Token>> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_column = self.column;
            self.scan_token()?;
        }

        self.tokens.push(Token::new(
            TokenKind::Eof,
            String::new(),
            self.line,
            self.column,
        ));

        Ok(std::mem::take(&mut self.tokens))
    }

    fn scan_token(&mut self) -> Result<()> {
        let c = self.advance();

        match c {
            ' ' | '\r' | '\t' => {}
            '\n' => {
                self.line += 1;
                self.column = 1;
            }

            ';' => self.skip_line_comment(),

            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),

            '"' => self.scan_string()?,

            c if is_symbol_char(c) => self.scan_word(),

            _ => {
                return Err(Error::ParseError(format!(
                    "Unexpected character '{}' at line {}, column {}",
                    c, self.line, self.start_column
                )));
            }
        }

        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
    }

    /// Scans a string literal; its contents are taken verbatim up to the closing quote
    fn scan_string(&mut self) -> Result<()> {
        let start_line = self.line;

        while !self.is_at_end() && self.peek() != '"' {
            if self.advance() == '\n' {
                self.line += 1;
                self.column = 1;
            }
        }

        if self.is_at_end() {
            return Err(Error::ParseError(format!(
                "Unterminated string at line {}",
                start_line
            )));
        }

        let value: String = self.source[self.start + 1..self.current].iter().collect();
        self.advance(); // Closing "

        self.add_token(TokenKind::String(value));
        Ok(())
    }

    /// Scans a run of symbol characters and classifies it as number or symbol
    fn scan_word(&mut self) {
        while is_symbol_char(self.peek()) {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let kind = match parse_number(&text) {
            Some(n) => TokenKind::Number(n),
            None => TokenKind::Symbol(text),
        };
        self.add_token(kind);
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        self.column += 1;
        c
    }

    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(kind, lexeme, self.line, self.start_column));
    }
}

/// Characters allowed inside symbols and numbers
fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '.' | '+' | '-' | '*' | '/' | '\\' | '_' | '=' | '<' | '>' | '!' | '&' | '?'
        )
}

/// Reads `text` as a number when it looks like one
///
/// `f64::from_str` also accepts `inf` and `NaN`, so the leading characters
/// are checked first: a digit or `.`, optionally after a sign.
fn parse_number(text: &str) -> Option<f64> {
    let mut chars = text.chars();
    let first = chars.next()?;
    let numeric_start = match first {
        '0'..='9' | '.' => true,
        '+' | '-' => matches!(chars.next(), Some('0'..='9' | '.')),
        _ => false,
    };
    if !numeric_start {
        return None;
    }
    text.parse().ok()
}
