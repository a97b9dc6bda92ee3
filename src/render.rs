//! Plain-text line formatting for tree output.

use crate::tree::Counters;

/// Sanitize control characters to avoid terminal control-sequence injection.
pub fn sanitize_terminal_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                let code = c as u32;
                if code <= 0xFF {
                    out.push_str(&format!("\\x{:02X}", code));
                } else {
                    out.push_str(&format!("\\u{{{:X}}}", code));
                }
            }
            _ => out.push(c),
        }
    }
    out
}

/// Render one tree line (without the trailing newline).
///
/// `link_target` is the raw symlink target, appended after an arrow.
pub fn entry_line(prefix: &str, name: &str, link_target: Option<&str>) -> String {
    let mut line = String::with_capacity(prefix.len() + name.len());
    line.push_str(prefix);
    line.push_str(&sanitize_terminal_text(name));
    if let Some(target) = link_target {
        line.push_str(" -> ");
        line.push_str(&sanitize_terminal_text(target));
    }
    line
}

/// Render the closing report, e.g. `3 directories, 1 file`.
pub fn summary_line(counters: &Counters) -> String {
    let dirs = if counters.directories == 1 {
        "directory"
    } else {
        "directories"
    };
    let files = if counters.files == 1 { "file" } else { "files" };
    format!(
        "{} {}, {} {}",
        counters.directories, dirs, counters.files, files
    )
}
