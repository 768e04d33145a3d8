// PyScan - A lexical scanner for a Python-like language
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Scanner helper methods for character navigation and token creation.
//!
//! This module provides utility methods for the scanner including:
//! - Character stream navigation (peek_next, advance, match_char)
//! - Position marks taken at the start of a token
//! - Token and error construction from a mark

use super::tokens::{Token, TokenKind};
use super::Scanner;
use crate::error::{ErrorCode, LexError, Span};

/// Scanner position captured at the first character of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Byte offset.
    pub offset: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
}

/// Trait for scanner helper operations.
pub trait LexerHelpers<'src> {
    /// Peek at the character after the current one without advancing.
    fn peek_next(&self) -> Option<char>;

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char>;

    /// Consume the current character only if it equals `expected`.
    fn match_char(&mut self, expected: char) -> bool;

    /// Advance while `predicate` holds for the current character.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool);

    /// Capture the current position.
    fn mark(&self) -> Mark;

    /// Create a span from a mark to the current position.
    fn span_from(&self, mark: Mark) -> Span;

    /// Create a token covering everything consumed since `mark`.
    fn token_from(&self, mark: Mark, kind: TokenKind) -> Token<'src>;

    /// Create an error covering everything consumed since `mark`.
    fn error_from(&self, mark: Mark, code: ErrorCode, message: String) -> LexError;
}

impl<'src> LexerHelpers<'src> for Scanner<'src> {
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.position..].chars();
        chars.next();
        chars.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance();
        }
    }

    fn mark(&self) -> Mark {
        Mark {
            offset: self.position,
            line: self.line,
            column: self.column,
        }
    }

    fn span_from(&self, mark: Mark) -> Span {
        Span::new(mark.offset, self.position)
    }

    fn token_from(&self, mark: Mark, kind: TokenKind) -> Token<'src> {
        let source: &'src str = self.source;
        Token::new(
            kind,
            &source[mark.offset..self.position],
            mark.line,
            mark.column,
            self.span_from(mark),
        )
    }

    fn error_from(&self, mark: Mark, code: ErrorCode, message: String) -> LexError {
        LexError::new(code, message, self.span_from(mark), mark.line, mark.column)
    }
}
