//! Sanitizing pasted text before it is echoed back in error reports
//!
//! Transcript rows come from the user's clipboard and may carry ANSI escape sequences or other
//! control characters picked up from a terminal or a web page. Anything printed back from a
//! raw row goes through [`display_row`].

/// Longest raw row echoed in an error message, in characters
pub const MAX_DISPLAY_CHARS: usize = 120;

/// Remove ANSI CSI sequences (`ESC [ ... letter`) and control characters
///
/// Tab, newline and carriage return are kept.
///
/// ```
/// use transcript_importer::utils::terminal::strip_ansi_codes;
///
/// assert_eq!(strip_ansi_codes("\x1b[31m자료구조\x1b[0m"), "자료구조");
/// ```
pub fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if ch.is_control() && !matches!(ch, '\t' | '\n' | '\r') {
            continue;
        }
        result.push(ch);
    }

    result
}

/// One-line rendering of a raw transcript row for error output
///
/// Control sequences are removed, tab separators are shown as ` | ` so column boundaries stay
/// visible, and the result is cut at [`MAX_DISPLAY_CHARS`].
pub fn display_row(raw: &str) -> String {
    let cleaned = strip_ansi_codes(raw);
    let cells: Vec<&str> = cleaned.trim().split('\t').map(str::trim).collect();
    let joined = if cells.len() > 1 { cells.join(" | ") } else { cleaned.trim().to_string() };
    let single_line = joined.replace(['\r', '\n'], " ");

    if single_line.chars().count() > MAX_DISPLAY_CHARS {
        let truncated: String = single_line.chars().take(MAX_DISPLAY_CHARS).collect();
        format!("{}...", truncated)
    } else {
        single_line
    }
}
