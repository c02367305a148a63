use super::ast::{Expression, Program};
use crate::error::{Error, Result};
use crate::lexer::{Token, TokenKind};

/// Recursive-descent parser for S-expressions and braced lists
pub struct SExprParser {
    tokens: Vec<Token>,
    current: usize,
}

impl SExprParser {
    /// Creates a new S-expression parser
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(token) if token.kind == TokenKind::Eof) {
            let (line, column) = tokens.last().map_or((1, 1), |t| (t.line, t.column));
            tokens.push(Token::new(TokenKind::Eof, String::new(), line, column));
        }
        SExprParser { tokens, current: 0 }
    }

    /// Parses the tokens into a program of top-level forms
    pub fn parse(&mut self) -> Result<Program> {
        let mut expressions = Vec::new();

        while !self.is_at_end() {
            expressions.push(self.parse_expression()?);
        }

        Ok(Program { expressions })
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        match self.peek().kind.clone() {
            TokenKind::LeftParen => {
                let children = self.parse_children(TokenKind::RightParen)?;
                Ok(Expression::SExpr(children))
            }
            TokenKind::LeftBrace => {
                let children = self.parse_children(TokenKind::RightBrace)?;
                Ok(Expression::QExpr(children))
            }
            TokenKind::Number(n) => {
                self.advance();
                Ok(Expression::Number(n))
            }
            TokenKind::Symbol(name) => {
                self.advance();
                Ok(Expression::Symbol(name))
            }
            TokenKind::String(s) => {
                self.advance();
                Ok(Expression::String(s))
            }
            kind @ (TokenKind::RightParen | TokenKind::RightBrace) => {
                Err(self.syntax_error(format!("Unmatched {} with no open list", kind)))
            }
            TokenKind::Eof => Err(Error::UnexpectedEof),
        }
    }

    /// Parses list children after the opening delimiter up to `close`
    fn parse_children(&mut self, close: TokenKind) -> Result<Vec<Expression>> {
        self.advance(); // opening delimiter

        let mut children = Vec::new();
        loop {
            match self.peek().kind.clone() {
                TokenKind::Eof => return Err(Error::UnexpectedEof),
                kind if kind == close => {
                    self.advance();
                    return Ok(children);
                }
                kind @ (TokenKind::RightParen | TokenKind::RightBrace) => {
                    return Err(Error::UnexpectedToken {
                        expected: close.to_string(),
                        got: kind.to_string(),
                    });
                }
                _ => children.push(self.parse_expression()?),
            }
        }
    }

    fn is_at_end(&self) -> bool {
        matches!(self.peek().kind, TokenKind::Eof)
    }

    fn peek(&self) -> &Token {
        // `new` guarantees a trailing Eof, and `advance` never moves past it
        &self.tokens[self.current]
    }

    fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !self.is_at_end() {
            self.current += 1;
        }
        token
    }

    fn syntax_error(&self, message: impl Into<String>) -> Error {
        let token = self.peek();
        Error::SyntaxError {
            line: token.line,
            col: token.column,
            message: message.into(),
        }
    }
}
