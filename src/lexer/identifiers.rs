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

//! Identifier and keyword scanning for the scanner.

use super::helpers::LexerHelpers;
use super::tokens::{Token, TokenKind};
use super::Scanner;

/// Trait for identifier scanning operations.
pub trait IdentifierScanner<'src> {
    /// Scan an identifier or keyword.
    fn scan_identifier(&mut self) -> Token<'src>;
}

impl<'src> IdentifierScanner<'src> for Scanner<'src> {
    fn scan_identifier(&mut self) -> Token<'src> {
        let mark = self.mark();
        self.advance_while(is_identifier_char);

        let text = &self.source[mark.offset..self.position];
        let kind = TokenKind::keyword(text).unwrap_or(TokenKind::Identifier);
        self.token_from(mark, kind)
    }
}

/// Check if a character may start an identifier.
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Check if a character may continue an identifier.
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
