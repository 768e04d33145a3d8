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

//! String literal scanning for the scanner.
//!
//! Literals open with `"` or `'` and must close with the same quote on the
//! same line. The decoded contents borrow from the source until the first
//! escape sequence forces an owned buffer.

use std::borrow::Cow;

use super::helpers::LexerHelpers;
use super::tokens::{Token, TokenKind};
use super::Scanner;
use crate::error::{ErrorCode, LexError};

/// Trait for string scanning operations.
pub trait StringScanner<'src> {
    /// Scan a string literal.
    fn scan_string(&mut self) -> Result<Token<'src>, LexError>;
}

impl<'src> StringScanner<'src> for Scanner<'src> {
    fn scan_string(&mut self) -> Result<Token<'src>, LexError> {
        let source: &'src str = self.source;
        let mark = self.mark();
        let Some(quote) = self.advance() else {
            return Ok(self.token_from(mark, TokenKind::Eof));
        };

        let content_start = self.position;
        let mut decoded: Option<String> = None;
        let mut invalid_escape: Option<LexError> = None;

        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(self
                        .error_from(
                            mark,
                            ErrorCode::UnterminatedString,
                            "Unterminated string literal".to_string(),
                        )
                        .with_hint(format!("add a closing {} on the same line", quote)));
                }
                Some(c) if c == quote => break,
                Some('\\') => {
                    let escape = self.mark();
                    self.advance();

                    // A backslash at the end of the line leaves the string open
                    let next = match self.peek() {
                        None | Some('\n') => continue,
                        Some(c) => c,
                    };
                    self.advance();

                    let buffer = decoded
                        .get_or_insert_with(|| source[content_start..escape.offset].to_string());
                    match resolve_escape(next) {
                        Some(c) => buffer.push(c),
                        None if !self.config.strict_escapes => {
                            buffer.push('\\');
                            buffer.push(next);
                        }
                        None => {
                            if invalid_escape.is_none() {
                                invalid_escape = Some(
                                    self.error_from(
                                        escape,
                                        ErrorCode::InvalidEscape,
                                        format!("Invalid escape sequence '\\{}'", next.escape_debug()),
                                    )
                                    .with_hint("valid escapes are \\n \\t \\r \\\\ \\\" \\' \\0"),
                                );
                            }
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    if let Some(buffer) = decoded.as_mut() {
                        buffer.push(c);
                    }
                }
            }
        }

        let content_end = self.position;
        self.advance(); // consume closing quote

        if let Some(err) = invalid_escape {
            return Err(err);
        }

        let value = match decoded {
            Some(buffer) => Cow::Owned(buffer),
            None => Cow::Borrowed(&source[content_start..content_end]),
        };

        if let Some(max) = self.config.max_string_length {
            let length = value.chars().count();
            if length > max {
                return Err(self.error_from(
                    mark,
                    ErrorCode::StringTooLong,
                    format!(
                        "String literal has {} characters, exceeding the maximum of {}",
                        length, max
                    ),
                ));
            }
        }

        Ok(self.token_from(mark, TokenKind::String).with_value(value))
    }
}

/// Resolve the character following a backslash.
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        _ => None,
    }
}
