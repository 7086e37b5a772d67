#![allow(clippy::module_inception)]

use std::fmt::Write as _;

use crate::errors::errors::Error;

pub mod errors;
pub mod lexer;
pub mod parser;
pub mod symbols;

extern crate regex;

/// A location in the analysed source: 1-based line, 0-based column
/// measured from the start of that line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Renders an analysis error as the text shown to the end user.
///
/// When the originating source was available the offending line is quoted
/// together with its neighbours:
///
/// ```text
/// Error: UnexpectedToken (expected token type(s): Dot, found end of input)
///   at line 3, column 17
///
///      var a: integer;
///   >  begin a := a end
/// ```
pub fn render_diagnostic(error: &Error) -> String {
    let position = error.position();
    let mut out = format!(
        "Error: {} ({})\n  at line {}, column {}",
        error.name(),
        error,
        position.line,
        position.column
    );

    if let Some(context) = error.context() {
        out.push_str("\n\n");
        out.push_str(context);
    }

    out
}

/// Quotes up to three lines of source around `line` (1-based), marking the
/// line itself with `>`.
pub fn source_context(source: &str, line: u32) -> String {
    let lines: Vec<&str> = source.lines().collect();
    let index = line.saturating_sub(1) as usize;

    let mut out = String::new();
    if index > 0 {
        if let Some(before) = lines.get(index - 1) {
            let _ = writeln!(out, "   {}", before);
        }
    }
    let _ = writeln!(out, ">  {}", lines.get(index).copied().unwrap_or(""));
    if let Some(after) = lines.get(index + 1) {
        let _ = writeln!(out, "   {}", after);
    }

    out
}
