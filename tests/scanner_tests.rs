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

//! Integration tests for the PyScan scanner.
//!
//! These tests drive the public API the way a parser would: pulling
//! tokens one at a time, reacting to errors and inspecting positions.
//! Set `RUST_LOG=pyscan=trace` to see every scanned token.

use pretty_assertions::assert_eq;
use pyscan::{
    tokenize, tokenize_with, ErrorCode, ScanConfig, Scanner, SourceLocation, Span, TokenKind,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collect (kind, lexeme) pairs, excluding the end token.
fn pairs(source: &str) -> Vec<(TokenKind, &str)> {
    Scanner::new(source)
        .map(|result| result.unwrap())
        .map(|token| (token.kind(), token.lexeme()))
        .collect()
}

// ============================================================================
// Pull Interface
// ============================================================================

#[test]
fn test_parser_style_pull_loop() {
    init_tracing();
    let mut scanner = Scanner::new("lambda x: x * 2");
    let mut kinds = Vec::new();
    loop {
        let token = scanner.next_token().unwrap();
        kinds.push(token.kind());
        if token.is_eof() {
            break;
        }
    }
    assert_eq!(
        kinds,
        vec![
            TokenKind::Lambda,
            TokenKind::Identifier,
            TokenKind::Colon,
            TokenKind::Identifier,
            TokenKind::Star,
            TokenKind::Number,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_end_of_input_repeats() {
    init_tracing();
    let mut scanner = Scanner::new("# only a comment");
    for _ in 0..5 {
        let token = scanner.next_token().unwrap();
        assert!(token.is_eof());
        assert_eq!(token.lexeme(), "");
        assert_eq!(token.span(), Span::new(16, 16));
    }
}

#[test]
fn test_class_definition() {
    init_tracing();
    let source = "class Point:\n    def norm(self) -> float:\n        return self.x * self.x\n";
    assert_eq!(
        pairs(source),
        vec![
            (TokenKind::Class, "class"),
            (TokenKind::Identifier, "Point"),
            (TokenKind::Colon, ":"),
            (TokenKind::Def, "def"),
            (TokenKind::Identifier, "norm"),
            (TokenKind::LeftParen, "("),
            (TokenKind::Identifier, "self"),
            (TokenKind::RightParen, ")"),
            (TokenKind::Arrow, "->"),
            (TokenKind::Identifier, "float"),
            (TokenKind::Colon, ":"),
            (TokenKind::Return, "return"),
            (TokenKind::Identifier, "self"),
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "x"),
            (TokenKind::Star, "*"),
            (TokenKind::Identifier, "self"),
            (TokenKind::Dot, "."),
            (TokenKind::Identifier, "x"),
        ]
    );
}

#[test]
fn test_import_and_exception_keywords() {
    let kinds: Vec<_> = pairs("from a import b as c\ntry: raise\nexcept: pass\nfinally: del d")
        .into_iter()
        .map(|(kind, _)| kind)
        .filter(|kind| kind.is_keyword())
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::From,
            TokenKind::Import,
            TokenKind::As,
            TokenKind::Try,
            TokenKind::Raise,
            TokenKind::Except,
            TokenKind::Pass,
            TokenKind::Finally,
            TokenKind::Del,
        ]
    );
}

// ============================================================================
// Positions
// ============================================================================

#[test]
fn test_positions_across_lines() {
    let source = "a = 1\n\n  # note\n\tb = a\r\n";
    let tokens = tokenize(source).unwrap();
    let positions: Vec<_> = tokens
        .iter()
        .map(|t| (t.lexeme(), t.line(), t.column()))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("a", 1, 1),
            ("=", 1, 3),
            ("1", 1, 5),
            ("b", 4, 2),
            ("=", 4, 4),
            ("a", 4, 6),
            ("", 5, 1),
        ]
    );
}

#[test]
fn test_source_location_matches_token() {
    let source = "x = 1\ny = 'text'";
    let tokens = tokenize(source).unwrap();
    let string = &tokens[5];
    assert_eq!(string.kind(), TokenKind::String);

    let location = SourceLocation::from_offset(source, string.span().start);
    assert_eq!(location.line, string.line());
    assert_eq!(location.column, string.column());
    assert_eq!(location.line_content, "y = 'text'");
}

#[test]
fn test_error_position_after_recovery() {
    let mut scanner = Scanner::new("ok\n  !");
    scanner.next_token().unwrap();
    let err = scanner.next_token().unwrap_err();
    assert_eq!((err.line, err.column), (2, 3));
    assert_eq!(err.span, Span::new(5, 6));
    assert!(scanner.next_token().unwrap().is_eof());
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn test_number_values() {
    let tokens = tokenize("0 7 10.25 007").unwrap();
    let values: Vec<_> = tokens.iter().filter_map(|t| t.number_value()).collect();
    assert_eq!(values, vec![0.0, 7.0, 10.25, 7.0]);
    assert_eq!(tokens[3].lexeme(), "007");
}

#[test]
fn test_string_text_and_display() {
    let tokens = tokenize("'a\\'b' \"plain\" ==").unwrap();
    assert_eq!(tokens[0].text(), "a'b");
    assert_eq!(tokens[0].to_string(), "'a\\'b'");
    assert_eq!(tokens[1].text(), "plain");
    assert_eq!(tokens[2].text(), "==");
    assert_eq!(tokens[2].value(), None);
}

#[test]
fn test_lenient_escapes() {
    let config = ScanConfig::new().with_strict_escapes(false);
    let tokens = tokenize_with(r"path = 'C:\temp\new'", config).unwrap();
    assert_eq!(tokens[2].value(), Some("C:\temp\new"));

    let tokens = tokenize_with(r"'\d+\.\d'", config).unwrap();
    assert_eq!(tokens[0].value(), Some(r"\d+\.\d"));
}

#[test]
fn test_max_string_length_allows_exact_limit() {
    let config = ScanConfig::new().with_max_string_length(5);
    assert!(tokenize_with("'12345'", config).is_ok());
    let errors = tokenize_with("'123456'", config).unwrap_err();
    assert_eq!(errors.first().unwrap().code, ErrorCode::StringTooLong);
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_iterator_yields_errors_inline() {
    init_tracing();
    let results: Vec<_> = Scanner::new("a ? b").collect();
    assert_eq!(results.len(), 3);
    assert!(results[0].is_ok());
    assert_eq!(
        results[1].as_ref().unwrap_err().code,
        ErrorCode::UnexpectedCharacter
    );
    assert!(results[2].is_ok());
}

#[test]
fn test_errors_into_iterator() {
    let errors = tokenize("? ?").unwrap_err();
    assert_eq!(errors.to_string(), "2 lexical error(s)");
    let columns: Vec<_> = errors.into_iter().map(|e| e.column).collect();
    assert_eq!(columns, vec![1, 3]);
}
