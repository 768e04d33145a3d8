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

//! Operator and punctuation scanning for the scanner.
//!
//! This module handles scanning of:
//! - Arithmetic operators (+, -, *, //, %)
//! - Comparison operators (==, !=, <, >, <=, >=)
//! - Assignment (=)
//! - Punctuation (parentheses, brackets, comma, colon, dot, arrow)
//!
//! Two-character operators are always tried before their one-character
//! prefix. Any character that starts no token is reported here.

use super::helpers::LexerHelpers;
use super::tokens::{Token, TokenKind};
use super::Scanner;
use crate::error::{ErrorCode, LexError};

/// Trait for operator scanning operations.
pub trait OperatorScanner<'src> {
    /// Scan an operator or punctuation.
    fn scan_operator_or_punctuation(&mut self) -> Result<Token<'src>, LexError>;
}

impl<'src> OperatorScanner<'src> for Scanner<'src> {
    fn scan_operator_or_punctuation(&mut self) -> Result<Token<'src>, LexError> {
        let mark = self.mark();
        let Some(c) = self.advance() else {
            return Ok(self.token_from(mark, TokenKind::Eof));
        };

        let kind = match c {
            '+' => TokenKind::Plus,
            '-' => {
                if self.match_char('>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Minus
                }
            }
            '*' => TokenKind::Star,
            '/' => {
                if self.match_char('/') {
                    TokenKind::DoubleSlash
                } else {
                    return Err(self
                        .error_from(mark, ErrorCode::LoneSlash, "Unexpected '/'".to_string())
                        .with_hint("use '//' for integer division"));
                }
            }
            '%' => TokenKind::Percent,
            '<' => {
                if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                }
            }
            '=' => {
                if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                }
            }
            '!' => {
                if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    return Err(self
                        .error_from(mark, ErrorCode::DanglingBang, "Unexpected '!'".to_string())
                        .with_hint("use 'not' for logical negation, or '!=' for comparison"));
                }
            }
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            _ => {
                return Err(self.error_from(
                    mark,
                    ErrorCode::UnexpectedCharacter,
                    format!("Unexpected character '{}'", c.escape_debug()),
                ));
            }
        };

        Ok(self.token_from(mark, kind))
    }
}
