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

//! Error types for the scanner.
//!
//! Every lexical error is recoverable: the scanner reports it, skips the
//! offending characters and keeps going. This module defines the error
//! value, its stable codes, a collection type for batch scanning and the
//! source-annotated rendering used for diagnostics.

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// Error codes for lexical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Character-level errors (E001-E009)
    UnexpectedCharacter,
    DanglingBang,
    LoneSlash,

    // String literal errors (E010-E019)
    UnterminatedString,
    InvalidEscape,
    StringTooLong,

    // Number literal errors (E020-E029)
    MalformedNumber,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the stable code string for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnexpectedCharacter => "E001",
            ErrorCode::DanglingBang => "E002",
            ErrorCode::LoneSlash => "E003",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::InvalidEscape => "E011",
            ErrorCode::StringTooLong => "E012",
            ErrorCode::MalformedNumber => "E020",
        }
    }
}

/// A lexical error with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct LexError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span of the offending text.
    pub span: Span,
    /// Line (1-indexed) where the offending text starts.
    pub line: usize,
    /// Column (1-indexed) where the offending text starts.
    pub column: usize,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl LexError {
    /// Create a new lexical error.
    pub fn new(
        code: ErrorCode,
        message: impl Into<String>,
        span: Span,
        line: usize,
        column: usize,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            line,
            column,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Render this error against its source as a plain-text diagnostic.
    pub fn report(&self, source: &str, filename: &str) -> String {
        let start = self.span.start.min(source.len());
        let end = self.span.end.clamp(start, source.len());

        let mut report = Report::build(ReportKind::Error, filename, start)
            .with_config(Config::default().with_color(false))
            .with_code(self.code_str())
            .with_message(&self.message)
            .with_label(
                Label::new((filename, start..end))
                    .with_message(&self.message)
                    .with_color(Color::Red),
            );

        if let Some(hint) = &self.hint {
            report = report.with_help(hint);
        }

        let mut output = Vec::new();
        match report
            .finish()
            .write((filename, Source::from(source)), &mut output)
        {
            Ok(()) => String::from_utf8_lossy(&output).into_owned(),
            Err(_) => format!("error{}\n", self),
        }
    }
}

/// Result type for scanner operations.
pub type Result<T> = std::result::Result<T, LexError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    ///
    /// Offsets past the end are clamped, and offsets inside a multi-byte
    /// character are moved back to the start of that character.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[line_start..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[line_start..line_end].to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// A collection of lexical errors from one scanning pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} lexical error(s)", .errors.len())]
pub struct LexErrors {
    errors: Vec<LexError>,
}

impl LexErrors {
    /// Create a new empty error collection.
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection.
    pub fn push(&mut self, error: LexError) {
        self.errors.push(error);
    }

    /// Get the number of errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the first error, in source order.
    pub fn first(&self) -> Option<&LexError> {
        self.errors.first()
    }

    /// Get an iterator over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &LexError> {
        self.errors.iter()
    }

    /// Convert into a vector of errors.
    pub fn into_vec(self) -> Vec<LexError> {
        self.errors
    }
}

impl IntoIterator for LexErrors {
    type Item = LexError;
    type IntoIter = std::vec::IntoIter<LexError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}
