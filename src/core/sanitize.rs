// src/core/sanitize.rs

/// The whitespace set the wiki's text is trimmed by. Narrower than
/// `char::is_whitespace`: a decoded `&nbsp;` survives trimming.
pub const ASCII_WS: [char; 5] = [' ', '\n', '\r', '\t', '\x0b'];

pub fn trim_ws(s: &str) -> &str {
    s.trim_matches(|c: char| ASCII_WS.contains(&c))
}
