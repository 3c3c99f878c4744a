//! Removes `//` line comments from JSON text, leaving string literals intact.

use super::utils::SourceReader;

const SP_QUOTE: &str = "\"";
const SP_REVERSE_SOLIDUS: &str = "\\";
const SP_LINE_FEED: &str = "\n";
const LC_OPEN: &str = "//";

enum State {
    Normal,
    InString,
}

/// Strips every `//` comment that sits outside a string literal.
///
/// A comment runs up to, but not including, the next line feed, so line
/// numbers survive. Inside a string a backslash always pairs with the
/// character after it, so `\"` never closes the string and `\\"` does.
///
/// This is a lexical pass only: an unterminated string is copied through to
/// the end of input and left for the JSON parser to reject.
pub fn strip_line_comments(source: &str) -> String {
    let document = SourceReader::new(source);
    let len = document.len();

    let mut out = String::with_capacity(source.len());
    let mut state = State::Normal;
    let mut i = 0;

    while i < len {
        let chr = document.look_ahead(i, 1);
        match state {
            State::Normal => {
                if chr == SP_QUOTE {
                    out.push_str(chr);
                    state = State::InString;
                    i += 1;
                } else if document.look_ahead(i, 2) == LC_OPEN {
                    while i < len && document.look_ahead(i, 1) != SP_LINE_FEED {
                        i += 1;
                    }
                } else {
                    out.push_str(chr);
                    i += 1;
                }
            }
            State::InString => {
                if chr == SP_REVERSE_SOLIDUS && i + 1 < len {
                    out.push_str(document.look_ahead(i, 2));
                    i += 2;
                } else if chr == SP_QUOTE {
                    out.push_str(chr);
                    state = State::Normal;
                    i += 1;
                } else {
                    out.push_str(chr);
                    i += 1;
                }
            }
        }
    }

    return out;
}
