//! Plain-text field sanitization
//!
//! The host platform treats all three footer image fields as plain text:
//! tags are stripped, control characters are dropped, and whitespace is
//! normalized. URL well-formedness is deliberately not checked.

/// Sanitizes a submitted value as a plain text field
///
/// Strips HTML tags (an unterminated trailing tag is dropped entirely),
/// converts tabs and line breaks to spaces, removes other control
/// characters, collapses whitespace runs, and trims the result.
pub fn sanitize_text_field(input: &str) -> String {
    let stripped = strip_tags(input);

    let mut out = String::with_capacity(stripped.len());
    let mut pending_space = false;
    for ch in stripped.chars() {
        let ch = match ch {
            '\t' | '\n' | '\r' => ' ',
            c if c.is_control() => continue,
            c => c,
        };
        if ch == ' ' {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(ch);
    }
    out
}

/// Removes `<...>` tag sequences from a string
///
/// Text after an unmatched `<` is treated as part of the tag and dropped.
fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
