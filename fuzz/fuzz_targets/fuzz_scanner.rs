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

//! Fuzz target for the PyScan scanner.
//!
//! This fuzzer feeds random input to the scanner to find crashes,
//! panics, or broken span invariants.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_scanner
//!
//! Run for a specific duration:
//!   cargo +nightly fuzz run fuzz_scanner -- -max_total_time=60

#![no_main]

use libfuzzer_sys::fuzz_target;
use pyscan::{ScanConfig, Scanner};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input<'a> {
    source: &'a str,
    strict_escapes: bool,
    max_string_length: Option<u8>,
}

fuzz_target!(|input: Input<'_>| {
    let mut config = ScanConfig::new().with_strict_escapes(input.strict_escapes);
    if let Some(max) = input.max_string_length {
        config = config.with_max_string_length(usize::from(max));
    }

    let source = input.source;
    let mut scanner = Scanner::with_config(source, config);
    let mut last_end = 0;

    // Every call consumes input, so this bound is never reached
    for _ in 0..=source.len() + 1 {
        match scanner.next_token() {
            Ok(token) => {
                let span = token.span();
                assert!(span.start >= last_end);
                assert_eq!(&source[span.start..span.end], token.lexeme());
                if token.is_eof() {
                    return;
                }
                last_end = span.end;
            }
            Err(err) => {
                assert!(err.span.start >= last_end);
                assert!(err.span.end <= source.len());
                let _ = err.report(source, "fuzz.py");
                last_end = err.span.end;
            }
        }
    }

    panic!("scanner did not reach end of input");
});
