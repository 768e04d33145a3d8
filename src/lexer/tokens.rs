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

//! Token definitions for the scanner.

use std::borrow::Cow;
use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::Span;

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input.
    Eof,

    // Literals
    /// Identifier (variable or function name).
    Identifier,
    /// Numeric literal, kept as its raw text.
    Number,
    /// String literal.
    String,

    // Keywords
    /// `false`
    False,
    /// `none`
    None,
    /// `true`
    True,
    /// `and`
    And,
    /// `as`
    As,
    /// `assert`
    Assert,
    /// `async`
    Async,
    /// `await`
    Await,
    /// `break`
    Break,
    /// `class`
    Class,
    /// `continue`
    Continue,
    /// `def`
    Def,
    /// `del`
    Del,
    /// `elif`
    Elif,
    /// `else`
    Else,
    /// `except`
    Except,
    /// `finally`
    Finally,
    /// `for`
    For,
    /// `from`
    From,
    /// `global`
    Global,
    /// `if`
    If,
    /// `import`
    Import,
    /// `in`
    In,
    /// `is`
    Is,
    /// `lambda`
    Lambda,
    /// `nonlocal`
    Nonlocal,
    /// `not`
    Not,
    /// `or`
    Or,
    /// `pass`
    Pass,
    /// `raise`
    Raise,
    /// `return`
    Return,
    /// `try`
    Try,
    /// `while`
    While,
    /// `with`
    With,
    /// `yield`
    Yield,

    // Arithmetic operators
    /// `+` - addition.
    Plus,
    /// `-` - subtraction.
    Minus,
    /// `*` - multiplication.
    Star,
    /// `//` - integer division.
    DoubleSlash,
    /// `%` - modulo.
    Percent,

    // Comparison operators
    /// `<` - less than.
    Less,
    /// `<=` - less or equal.
    LessEqual,
    /// `>` - greater than.
    Greater,
    /// `>=` - greater or equal.
    GreaterEqual,
    /// `==` - equal.
    EqualEqual,
    /// `!=` - not equal.
    BangEqual,

    /// `=` - assignment.
    Equal,

    // Punctuation
    /// `->` - arrow (for return type).
    Arrow,
    /// `(` - left parenthesis.
    LeftParen,
    /// `)` - right parenthesis.
    RightParen,
    /// `[` - left bracket.
    LeftBracket,
    /// `]` - right bracket.
    RightBracket,
    /// `,` - comma.
    Comma,
    /// `:` - colon.
    Colon,
    /// `.` - attribute access.
    Dot,
}

/// Every keyword with its kind, in declaration order.
pub const KEYWORDS: [(&str, TokenKind); 35] = [
    ("false", TokenKind::False),
    ("none", TokenKind::None),
    ("true", TokenKind::True),
    ("and", TokenKind::And),
    ("as", TokenKind::As),
    ("assert", TokenKind::Assert),
    ("async", TokenKind::Async),
    ("await", TokenKind::Await),
    ("break", TokenKind::Break),
    ("class", TokenKind::Class),
    ("continue", TokenKind::Continue),
    ("def", TokenKind::Def),
    ("del", TokenKind::Del),
    ("elif", TokenKind::Elif),
    ("else", TokenKind::Else),
    ("except", TokenKind::Except),
    ("finally", TokenKind::Finally),
    ("for", TokenKind::For),
    ("from", TokenKind::From),
    ("global", TokenKind::Global),
    ("if", TokenKind::If),
    ("import", TokenKind::Import),
    ("in", TokenKind::In),
    ("is", TokenKind::Is),
    ("lambda", TokenKind::Lambda),
    ("nonlocal", TokenKind::Nonlocal),
    ("not", TokenKind::Not),
    ("or", TokenKind::Or),
    ("pass", TokenKind::Pass),
    ("raise", TokenKind::Raise),
    ("return", TokenKind::Return),
    ("try", TokenKind::Try),
    ("while", TokenKind::While),
    ("with", TokenKind::With),
    ("yield", TokenKind::Yield),
];

/// Keyword lookup shared by all scanners, built on first use.
static KEYWORD_TABLE: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

impl TokenKind {
    /// Look up a keyword by its exact, case-sensitive spelling.
    pub fn keyword(text: &str) -> Option<TokenKind> {
        KEYWORD_TABLE.get(text).copied()
    }

    /// Check if this kind is a keyword.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            TokenKind::False
                | TokenKind::None
                | TokenKind::True
                | TokenKind::And
                | TokenKind::As
                | TokenKind::Assert
                | TokenKind::Async
                | TokenKind::Await
                | TokenKind::Break
                | TokenKind::Class
                | TokenKind::Continue
                | TokenKind::Def
                | TokenKind::Del
                | TokenKind::Elif
                | TokenKind::Else
                | TokenKind::Except
                | TokenKind::Finally
                | TokenKind::For
                | TokenKind::From
                | TokenKind::Global
                | TokenKind::If
                | TokenKind::Import
                | TokenKind::In
                | TokenKind::Is
                | TokenKind::Lambda
                | TokenKind::Nonlocal
                | TokenKind::Not
                | TokenKind::Or
                | TokenKind::Pass
                | TokenKind::Raise
                | TokenKind::Return
                | TokenKind::Try
                | TokenKind::While
                | TokenKind::With
                | TokenKind::Yield
        )
    }

    /// Check if this kind is a literal (identifier, number or string).
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::Number | TokenKind::String
        )
    }

    /// Check if this kind is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            TokenKind::EqualEqual
                | TokenKind::BangEqual
                | TokenKind::Less
                | TokenKind::Greater
                | TokenKind::LessEqual
                | TokenKind::GreaterEqual
        )
    }

    /// Get a human-readable name for this token kind.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Eof => "end of input",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::String => "string",
            TokenKind::False => "'false'",
            TokenKind::None => "'none'",
            TokenKind::True => "'true'",
            TokenKind::And => "'and'",
            TokenKind::As => "'as'",
            TokenKind::Assert => "'assert'",
            TokenKind::Async => "'async'",
            TokenKind::Await => "'await'",
            TokenKind::Break => "'break'",
            TokenKind::Class => "'class'",
            TokenKind::Continue => "'continue'",
            TokenKind::Def => "'def'",
            TokenKind::Del => "'del'",
            TokenKind::Elif => "'elif'",
            TokenKind::Else => "'else'",
            TokenKind::Except => "'except'",
            TokenKind::Finally => "'finally'",
            TokenKind::For => "'for'",
            TokenKind::From => "'from'",
            TokenKind::Global => "'global'",
            TokenKind::If => "'if'",
            TokenKind::Import => "'import'",
            TokenKind::In => "'in'",
            TokenKind::Is => "'is'",
            TokenKind::Lambda => "'lambda'",
            TokenKind::Nonlocal => "'nonlocal'",
            TokenKind::Not => "'not'",
            TokenKind::Or => "'or'",
            TokenKind::Pass => "'pass'",
            TokenKind::Raise => "'raise'",
            TokenKind::Return => "'return'",
            TokenKind::Try => "'try'",
            TokenKind::While => "'while'",
            TokenKind::With => "'with'",
            TokenKind::Yield => "'yield'",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::DoubleSlash => "'//'",
            TokenKind::Percent => "'%'",
            TokenKind::Less => "'<'",
            TokenKind::LessEqual => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEqual => "'>='",
            TokenKind::EqualEqual => "'=='",
            TokenKind::BangEqual => "'!='",
            TokenKind::Equal => "'='",
            TokenKind::Arrow => "'->'",
            TokenKind::LeftParen => "'('",
            TokenKind::RightParen => "')'",
            TokenKind::LeftBracket => "'['",
            TokenKind::RightBracket => "']'",
            TokenKind::Comma => "','",
            TokenKind::Colon => "':'",
            TokenKind::Dot => "'.'",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A token produced by the scanner.
///
/// The lexeme always borrows the exact source text, so it is empty only for
/// the end-of-input token. String literals additionally carry their decoded
/// contents, borrowed from the source when no escape had to be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    kind: TokenKind,
    lexeme: &'src str,
    value: Option<Cow<'src, str>>,
    line: usize,
    column: usize,
    span: Span,
}

impl<'src> Token<'src> {
    pub(crate) fn new(
        kind: TokenKind,
        lexeme: &'src str,
        line: usize,
        column: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            lexeme,
            value: None,
            line,
            column,
            span,
        }
    }

    pub(crate) fn with_value(mut self, value: Cow<'src, str>) -> Self {
        self.value = Some(value);
        self
    }

    /// The kind of this token.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The exact source text of this token.
    pub fn lexeme(&self) -> &'src str {
        self.lexeme
    }

    /// The decoded contents of a string literal.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// The decoded contents for strings, the lexeme for everything else.
    pub fn text(&self) -> &str {
        self.value.as_deref().unwrap_or(self.lexeme)
    }

    /// Line (1-indexed) of the first character.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Column (1-indexed) of the first character.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Byte range of the lexeme in the source.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Check if this is the end-of-input token.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Parse a numeric literal. Returns `None` for every other kind.
    pub fn number_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Number => self.lexeme.parse().ok(),
            _ => None,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number | TokenKind::String => {
                f.write_str(self.lexeme)
            }
            _ => f.write_str(self.kind.name()),
        }
    }
}
