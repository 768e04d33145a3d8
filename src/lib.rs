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

//! PyScan Library
//!
//! This library turns source code of a small Python-like language into
//! tokens, one at a time, for a downstream parser.
//!
//! # Modules
//!
//! - [`lexer`] - The scanner and token definitions
//! - [`error`] - Error types and diagnostic rendering
//! - [`config`] - Scanner options
//!
//! # Example
//!
//! ```
//! use pyscan::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("def area(r) -> r * r  # square");
//! let mut kinds = Vec::new();
//! loop {
//!     let token = scanner.next_token().expect("valid input");
//!     if token.is_eof() {
//!         break;
//!     }
//!     kinds.push(token.kind());
//! }
//! assert_eq!(kinds[0], TokenKind::Def);
//! assert_eq!(kinds.len(), 9);
//! ```

pub mod config;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use config::ScanConfig;
pub use error::{ErrorCode, LexError, LexErrors, Result, SourceLocation, Span};
pub use lexer::{tokenize, tokenize_with, Scanner, Token, TokenKind};

/// The version of the scanner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the scanner.
pub const NAME: &str = "PyScan";
