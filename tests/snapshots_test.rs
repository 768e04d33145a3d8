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

//! Snapshot tests for the PyScan scanner.
//!
//! These tests use the `insta` crate to capture and verify the token
//! stream and error output for representative inputs.

use pyscan::{tokenize, LexErrors, Token};

// ============================================================================
// Token Stream Snapshots
// ============================================================================

/// Format tokens for snapshot comparison.
fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            let value = match token.value() {
                Some(value) => format!(" => {:?}", value),
                None => String::new(),
            };
            format!(
                "{:?} {:?}{} @ {}:{}",
                token.kind(),
                token.lexeme(),
                value,
                token.line(),
                token.column()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format errors for snapshot comparison.
fn format_errors(errors: &LexErrors) -> String {
    errors
        .iter()
        .map(|err| format!("{} @ {}:{}", err, err.line, err.column))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_snapshot_function() {
    let source = include_str!("fixtures/valid/function.py");
    let tokens = tokenize(source).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r#"
Def "def" @ 1:1
Identifier "area" @ 1:5
LeftParen "(" @ 1:9
Identifier "width" @ 1:10
Comma "," @ 1:15
Identifier "height" @ 1:17
RightParen ")" @ 1:23
Arrow "->" @ 1:25
Identifier "int" @ 1:28
Colon ":" @ 1:31
Return "return" @ 3:5
Identifier "width" @ 3:12
Star "*" @ 3:18
Identifier "height" @ 3:20
Eof "" @ 4:1
"#);
}

#[test]
fn test_snapshot_control_flow() {
    let source = include_str!("fixtures/valid/control_flow.py");
    let tokens = tokenize(source).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r#"
While "while" @ 1:1
Identifier "count" @ 1:7
GreaterEqual ">=" @ 1:13
Number "0" @ 1:16
Colon ":" @ 1:17
If "if" @ 2:5
Not "not" @ 2:8
Identifier "done" @ 2:12
And "and" @ 2:17
Identifier "count" @ 2:21
Percent "%" @ 2:27
Number "2" @ 2:29
EqualEqual "==" @ 2:31
Number "0" @ 2:34
Colon ":" @ 2:35
Identifier "count" @ 3:9
Equal "=" @ 3:15
Identifier "count" @ 3:17
DoubleSlash "//" @ 3:23
Number "2" @ 3:26
Elif "elif" @ 4:5
Identifier "count" @ 4:10
BangEqual "!=" @ 4:16
Number "1" @ 4:19
Colon ":" @ 4:20
Pass "pass" @ 5:9
Eof "" @ 6:1
"#);
}

#[test]
fn test_snapshot_literals() {
    let tokens = tokenize(r#"x = [1, 2.5, 'a\tb', "", none]"#).unwrap();
    insta::assert_snapshot!(format_tokens(&tokens), @r#"
Identifier "x" @ 1:1
Equal "=" @ 1:3
LeftBracket "[" @ 1:5
Number "1" @ 1:6
Comma "," @ 1:7
Number "2.5" @ 1:9
Comma "," @ 1:12
String "'a\\tb'" => "a\tb" @ 1:14
Comma "," @ 1:20
String "\"\"" => "" @ 1:22
Comma "," @ 1:24
None "none" @ 1:26
RightBracket "]" @ 1:30
Eof "" @ 1:31
"#);
}

// ============================================================================
// Error Snapshots
// ============================================================================

#[test]
fn test_snapshot_errors() {
    let errors = tokenize("a ! b\n$ = 3.\nprint('\\q')").unwrap_err();
    insta::assert_snapshot!(format_errors(&errors), @r"
[E002] Unexpected '!' @ 1:3
[E001] Unexpected character '$' @ 2:1
[E020] Malformed number literal '3.' @ 2:5
[E011] Invalid escape sequence '\q' @ 3:8
");
}
