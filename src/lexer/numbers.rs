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

//! Number scanning for the scanner.
//!
//! Integers are a run of decimal digits, decimals add a `.` followed by at
//! least one digit. The token keeps the raw text; converting it to a value
//! is left to the consumer (see [`Token::number_value`]).

use super::helpers::LexerHelpers;
use super::identifiers::is_identifier_char;
use super::tokens::{Token, TokenKind};
use super::Scanner;
use crate::error::{ErrorCode, LexError};

/// Trait for number scanning operations.
pub trait NumberScanner<'src> {
    /// Scan an integer or decimal literal.
    fn scan_number(&mut self) -> Result<Token<'src>, LexError>;
}

impl<'src> NumberScanner<'src> for Scanner<'src> {
    fn scan_number(&mut self) -> Result<Token<'src>, LexError> {
        let mark = self.mark();
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') {
            if self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                self.advance(); // consume '.'
                self.advance_while(|c| c.is_ascii_digit());
            } else {
                self.advance(); // consume the dangling '.'
                let text = &self.source[mark.offset..self.position];
                return Err(self
                    .error_from(
                        mark,
                        ErrorCode::MalformedNumber,
                        format!("Malformed number literal '{}'", text),
                    )
                    .with_hint("a decimal point must be followed by at least one digit"));
            }
        }

        // Letters glued to a number, e.g. "123abc" or "1.5e3"
        if self.peek().is_some_and(is_identifier_char) {
            self.advance_while(is_identifier_char);
            let text = &self.source[mark.offset..self.position];
            return Err(self.error_from(
                mark,
                ErrorCode::MalformedNumber,
                format!("Invalid character in number literal '{}'", text),
            ));
        }

        Ok(self.token_from(mark, TokenKind::Number))
    }
}
