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

//! Scanner module for PyScan.
//!
//! This module turns source text into a stream of tokens on demand.
//! It handles:
//! - Keywords and identifiers
//! - Integer and decimal number literals
//! - String literals with escape sequences
//! - Operators and punctuation
//! - Whitespace and comments (starting with #), which produce no tokens
//!
//! Errors are recoverable: when [`Scanner::next_token`] returns an error the
//! offending text has already been consumed, so the next call continues
//! right after it.

mod helpers;
mod identifiers;
mod numbers;
mod operators;
mod strings;
mod tokens;
mod trivia;

pub use tokens::{Token, TokenKind, KEYWORDS};

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::error::{LexError, LexErrors, Span};
use identifiers::{is_identifier_start, IdentifierScanner};
use numbers::NumberScanner;
use operators::OperatorScanner;
use strings::StringScanner;
use trivia::TriviaSkipper;

/// Whether the scanner can still produce tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    Exhausted,
}

/// The scanner state for tokenizing source code.
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    /// The source code being tokenized.
    source: &'src str,
    /// Current byte position in the source.
    position: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed, in characters).
    column: usize,
    state: ScanState,
    config: ScanConfig,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner with the default configuration.
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    /// Create a new scanner with the given configuration.
    pub fn with_config(source: &'src str, config: ScanConfig) -> Self {
        debug!(len = source.len(), ?config, "creating scanner");
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
            state: ScanState::Scanning,
            config,
        }
    }

    /// Get the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the current line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Check if we've reached the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Peek at the current character without advancing.
    pub fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    /// The source being scanned.
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The configuration in use.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Get the next token from the source.
    ///
    /// After the end of input has been reached every further call returns
    /// another end-of-input token.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        if self.state == ScanState::Exhausted {
            return Ok(self.eof_token());
        }

        self.skip_trivia();

        let Some(c) = self.peek() else {
            self.state = ScanState::Exhausted;
            debug!(line = self.line, "reached end of input");
            return Ok(self.eof_token());
        };

        let result = if c == '"' || c == '\'' {
            self.scan_string()
        } else if c.is_ascii_digit() {
            self.scan_number()
        } else if is_identifier_start(c) {
            Ok(self.scan_identifier())
        } else {
            self.scan_operator_or_punctuation()
        };

        match &result {
            Ok(token) => trace!(
                kind = %token.kind(),
                lexeme = token.lexeme(),
                line = token.line(),
                column = token.column(),
                "scanned token"
            ),
            Err(err) => debug!(
                code = err.code_str(),
                line = err.line,
                column = err.column,
                "{}",
                err.message
            ),
        }

        result
    }

    fn eof_token(&self) -> Token<'src> {
        let end = self.source.len();
        Token::new(
            TokenKind::Eof,
            &self.source[end..],
            self.line,
            self.column,
            Span::new(end, end),
        )
    }
}

/// Yields every token and error up to, but not including, the end of input.
impl<'src> Iterator for Scanner<'src> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Tokenize source code into a vector of tokens ending with end of input.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, LexErrors> {
    tokenize_with(source, ScanConfig::default())
}

/// Tokenize source code with the given configuration.
///
/// Scanning continues past errors, so every error of the input is
/// reported at once.
pub fn tokenize_with(source: &str, config: ScanConfig) -> Result<Vec<Token<'_>>, LexErrors> {
    let mut scanner = Scanner::with_config(source, config);
    let mut tokens = Vec::new();
    let mut errors = LexErrors::new();

    loop {
        match scanner.next_token() {
            Ok(token) if token.is_eof() => {
                tokens.push(token);
                break;
            }
            Ok(token) => tokens.push(token),
            Err(err) => errors.push(err),
        }
    }

    if errors.is_empty() {
        Ok(tokens)
    } else {
        debug!(count = errors.len(), "tokenize failed");
        Err(errors)
    }
}
