/// A single source line after normalization.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// 1-based line number in the source file
    pub number: usize,
    /// Trimmed line text
    pub line: String,
    /// Colon separated tokens, each trimmed
    pub tokens: Vec<String>,
}

fn should_trim(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch.is_ascii_control()
}

/// Trim ASCII whitespace and control characters from both ends.
pub fn trim(text: &str) -> &str {
    text.trim_matches(should_trim)
}

/// Strip a leading byte-order mark and trim the line.
pub fn normalize(raw: &str) -> String {
    let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
    trim(raw).to_string()
}

/// Split `text` on `sep`, trimming every segment.
///
/// A delimiter directly at the start of the remaining text produces no
/// segment, and neither does an empty tail. A segment that only becomes
/// empty after trimming is still kept, so positional arguments stay put.
pub fn split_trimmed(text: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let pos = rest.find(sep).unwrap_or(rest.len());
        if pos >= 1 {
            parts.push(trim(&rest[..pos]).to_string());
        }
        if pos == rest.len() {
            break;
        }
        rest = &rest[pos + sep.len_utf8()..];
    }

    parts
}

/// Join `tokens[start..]` with single spaces.
pub fn join_to_end(tokens: &[String], start: usize) -> String {
    let mut result = String::new();
    for token in tokens.iter().skip(start) {
        if !result.is_empty() {
            result.push(' ');
        }
        result.push_str(token);
    }
    result
}

/// Normalize and tokenize every line of `source`.
pub fn read_lines(source: &str) -> Vec<Line> {
    source
        .split('\n')
        .enumerate()
        .map(|(i, raw)| {
            let line = normalize(raw);
            let tokens = split_trimmed(&line, ':');
            Line {
                number: i + 1,
                line,
                tokens,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn strips_bom_and_control_characters() {
        assert_eq!(normalize("\u{feff}sw_show\r\n"), "sw_show");
        assert_eq!(normalize("\t\x0b text \x07"), "text");
    }

    #[test]
    fn bom_only_stripped_at_start() {
        assert_eq!(normalize("a\u{feff}"), "a\u{feff}");
    }

    #[rstest]
    #[case("sw_checklist:c1:My List", &["sw_checklist", "c1", "My List"])]
    #[case("a: :b", &["a", "", "b"])]
    #[case(":a", &["a"])]
    #[case("a::b", &["a", "b"])]
    #[case("a:", &["a"])]
    #[case("x", &["x"])]
    #[case("", &[])]
    fn splits_on_colon(#[case] input: &str, #[case] expected: &[&str]) {
        assert_eq!(split_trimmed(input, ':'), expected);
    }

    #[test]
    fn splits_on_pipe() {
        assert_eq!(split_trimmed("Hello | OK", '|'), ["Hello", "OK"]);
        assert_eq!(split_trimmed("|OK", '|'), ["OK"]);
    }

    #[test]
    fn joins_remaining_tokens() {
        let tokens: Vec<String> = ["sw_itemvoid", "Time", "12", "00"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(join_to_end(&tokens, 1), "Time 12 00");
        assert_eq!(join_to_end(&tokens, 4), "");
    }

    #[test]
    fn join_skips_leading_space_for_empty_tokens() {
        let tokens = vec![String::new(), String::new(), "a".to_string()];
        assert_eq!(join_to_end(&tokens, 0), "a");
    }

    #[test]
    fn reads_numbered_lines() {
        let lines = read_lines("sw_show\r\n\n# note\n");
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].number, 1);
        assert_eq!(lines[0].tokens, ["sw_show"]);
        assert!(lines[1].tokens.is_empty());
        assert_eq!(lines[2].line, "# note");
    }
}
