/// Escape text for HTML content and shorten long rule runs.
///
/// Not idempotent: encoding `&amp;` again yields `&amp;amp;`.
pub fn encode(text: &str) -> String {
    let escaped = text
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    collapse_rules(&escaped)
}

/// Cut any run of three or more identical `-`, `_` or `=` down to three,
/// so a typed-out horizontal rule does not stretch the column.
fn collapse_rules(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run: Option<(char, usize)> = None;

    for ch in text.chars() {
        match run {
            Some((prev, count)) if prev == ch => {
                if count < 3 {
                    out.push(ch);
                }
                run = Some((ch, count + 1));
            }
            _ => {
                out.push(ch);
                run = matches!(ch, '-' | '_' | '=').then_some((ch, 1));
            }
        }
    }

    out
}
