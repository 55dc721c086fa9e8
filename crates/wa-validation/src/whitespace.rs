//! Whitespace as the browser's regex `\s` and `String.prototype.trim` see it
//!
//! Differs from Rust's `char::is_whitespace`: U+FEFF counts, U+0085 does not.

/// Body of a regex character class matching one whitespace character
pub const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\f\r \u{a0}\u{1680}\u{2000}-\u{200a}\u{2028}\u{2029}\u{202f}\u{205f}\u{3000}\u{feff}";

pub fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Strip leading and trailing whitespace
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_whitespace)
}
