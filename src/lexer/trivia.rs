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

//! Whitespace and comment skipping.

use super::helpers::LexerHelpers;
use super::Scanner;

/// Trait for skipping trivia between tokens.
pub trait TriviaSkipper<'src> {
    /// Skip spaces, tabs, carriage returns, form feeds, newlines and comments.
    fn skip_trivia(&mut self);

    /// Skip a comment (from # to end of line, newline excluded).
    fn skip_comment(&mut self);
}

impl<'src> TriviaSkipper<'src> for Scanner<'src> {
    fn skip_trivia(&mut self) {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' | '\x0c' => {
                    self.advance();
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    fn skip_comment(&mut self) {
        self.advance_while(|c| c != '\n');
    }
}
