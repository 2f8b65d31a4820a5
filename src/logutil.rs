//! Keeps operator-typed text on a single log line.

use std::fmt::Write;

/// Default preview length for operator input in logs.
pub const MAX_PREVIEW: usize = 120;

/// Escape operator input for single-line logging, truncated to [`MAX_PREVIEW`].
///
/// `\n`, `\r`, `\t` and backslash are escaped C-style, other control
/// characters as `\xNN`.
pub fn escape_log(s: &str) -> String {
    escape_log_limited(s, MAX_PREVIEW)
}

pub fn escape_log_limited(s: &str, limit: usize) -> String {
    let mut out = String::with_capacity(s.len().min(limit) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= limit {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
