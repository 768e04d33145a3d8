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

//! Scanner configuration.

/// Options that change how the scanner treats string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// Reject escape sequences outside `\n \t \r \\ \" \' \0`.
    /// When disabled, unknown escapes are kept verbatim.
    pub strict_escapes: bool,
    /// Maximum decoded length of a string literal, in characters.
    pub max_string_length: Option<usize>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            strict_escapes: true,
            max_string_length: None,
        }
    }
}

impl ScanConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether unknown escape sequences are errors.
    pub fn with_strict_escapes(mut self, strict: bool) -> Self {
        self.strict_escapes = strict;
        self
    }

    /// Limit the decoded length of string literals.
    pub fn with_max_string_length(mut self, max: usize) -> Self {
        self.max_string_length = Some(max);
        self
    }
}
