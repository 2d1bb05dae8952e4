use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// quote-plus rules with `/` kept literal: alphanumerics and `_.-/` pass
// through, space becomes `+` after encoding, everything else is `%XX`
const PLUS_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'/')
    .remove(b' ');

/// Plus-for-space percent-encoding that leaves path slashes readable, for
/// values destined for URL text rather than form pairs.
#[must_use]
pub fn encode_plus(value: &str) -> String {
    utf8_percent_encode(value, PLUS_PATH)
        .to_string()
        .replace(' ', "+")
}

/// Append `'s`, or a bare `'` when the name already ends in `s`.
///
/// `possessive("Sally")` is `"Sally's"`; `possessive("Chris")` is `"Chris'"`.
#[must_use]
pub fn possessive(value: &str) -> String {
    let suffix = if value.trim_end().ends_with('s') {
        "'"
    } else {
        "'s"
    };
    format!("{value}{suffix}")
}

/// Split on `separator` and trim each piece:
/// `split_trim("Hey, there, dudes", ',')` is `["Hey", "there", "dudes"]`.
#[must_use]
pub fn split_trim(value: &str, separator: char) -> Vec<String> {
    value
        .split(separator)
        .map(|bit| bit.trim().to_string())
        .collect()
}

/// Break text into paragraphs: newline flavors are unified, horizontal
/// whitespace around line breaks is dropped, and runs of two or more breaks
/// separate paragraphs.
#[must_use]
pub fn paragraphs(value: &str) -> Vec<String> {
    split_paragraph_breaks(&normalize_newlines(value))
}

#[must_use]
pub const fn is_even(value: i64) -> bool {
    value % 2 == 0
}

#[must_use]
pub const fn is_odd(value: i64) -> bool {
    !is_even(value)
}

fn normalize_newlines(value: &str) -> String {
    let unified = value.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = unified.split('\n').collect();
    let last = lines.len() - 1;

    let mut out = String::with_capacity(unified.len());
    for (index, line) in lines.iter().enumerate() {
        let mut piece = *line;
        if index > 0 {
            piece = piece.trim_start_matches([' ', '\t']);
            out.push('\n');
        }
        if index < last {
            piece = piece.trim_end_matches([' ', '\t']);
        }
        out.push_str(piece);
    }
    out
}

fn split_paragraph_breaks(text: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut run = 0usize;

    for ch in text.chars() {
        if ch == '\n' {
            run += 1;
            continue;
        }
        if run == 1 {
            current.push('\n');
        } else if run >= 2 {
            out.push(std::mem::take(&mut current));
        }
        run = 0;
        current.push(ch);
    }

    if run == 1 {
        current.push('\n');
    } else if run >= 2 {
        out.push(std::mem::take(&mut current));
    }
    out.push(current);
    out
}
