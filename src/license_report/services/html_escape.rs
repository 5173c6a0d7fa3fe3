/// Characters rewritten before a license body is placed inside `<pre>`
const REPLACEMENTS: [(char, &str); 7] = [
    ('<', "&lt;"),
    ('>', "&gt;"),
    ('\t', " "),
    ('\u{0C}', ""),
    ('\u{0B}', ""),
    ('\u{A0}', ""),
    ('\u{85}', ""),
];

/// Escapes angle brackets and normalizes whitespace/control characters.
///
/// `&` is left alone, which keeps the function idempotent on its own output.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match REPLACEMENTS.iter().find(|(from, _)| *from == c) {
            Some((_, to)) => escaped.push_str(to),
            None => escaped.push(c),
        }
    }
    escaped
}
