//! Brace-counting re-indentation of generated C++.
//!
//! This is a line heuristic, not a parser. It assumes the emission style of
//! the translator: an opening brace ends its line and a closing brace starts
//! its line. Given that, one pass with a depth counter is enough:
//!
//! - A line starting with `}` (after leading whitespace) closes a level
//!   *before* it is indented.
//! - Depth never drops below zero; surplus closing braces are absorbed.
//! - Preprocessor lines (`#` in the first column) are passed through
//!   untouched and do not change the depth.
//! - Every other line, blank ones included, has its leading whitespace
//!   replaced by `depth * INDENT_WIDTH` spaces.
//! - A line whose last character is `{` opens a level *after* it is emitted.

/// Spaces per indentation level.
pub const INDENT_WIDTH: usize = 4;

/// Re-indent `code` by brace depth.
///
/// Line structure is preserved, including a trailing newline.
pub fn reindent(code: &str) -> String {
    let mut out = String::with_capacity(code.len() + code.len() / 4);
    let mut depth: usize = 0;
    let mut clamped = 0usize;

    for (i, line) in code.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }

        if line.starts_with('#') {
            out.push_str(line);
            continue;
        }

        let content = line.trim_start();

        if content.starts_with('}') {
            if depth == 0 {
                clamped += 1;
            }
            depth = depth.saturating_sub(1);
        }

        push_indent(&mut out, depth);
        out.push_str(content);

        if content.ends_with('{') {
            depth += 1;
        }
    }

    if clamped > 0 {
        tracing::debug!(clamped, "unbalanced closing braces during reindent");
    }
    out
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth * INDENT_WIDTH {
        out.push(' ');
    }
}
