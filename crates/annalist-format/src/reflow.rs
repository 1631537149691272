//! Message reflow: dedent, paragraph re-merge, and word wrapping.

/// Returns the leading whitespace of a line.
fn leading_whitespace(line: &str) -> &str {
    let trimmed = line.trim_start();
    &line[..line.len() - trimmed.len()]
}

/// Returns the longest prefix shared by both strings.
fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let mut end = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        end += ca.len_utf8();
    }
    &a[..end]
}

/// Strips the longest common leading-whitespace prefix shared by every
/// line that contains non-whitespace content.
pub(crate) fn dedent(text: &str) -> String {
    let margin = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(leading_whitespace)
        .reduce(common_prefix)
        .unwrap_or_default();

    if margin.is_empty() {
        return text.to_string();
    }

    text.lines()
        .map(|line| line.strip_prefix(margin).unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Re-merges logical paragraphs out of hard-wrapped source lines.
///
/// A line that starts with whitespace (or the very first line) begins a
/// new logical line; any other line is space-joined onto the previous
/// one. Intentionally indented blocks, bullet lists for instance, keep
/// their own lines.
pub(crate) fn merge_continuations(text: &str) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    for line in text.lines() {
        let starts_with_whitespace = line.chars().next().is_some_and(char::is_whitespace);
        match merged.last_mut() {
            Some(last) if !starts_with_whitespace => {
                last.push(' ');
                last.push_str(line);
            }
            _ => merged.push(line.to_string()),
        }
    }
    merged
}

/// Greedy word wrap to `width` columns.
///
/// The line's leading whitespace is kept on the first physical line only
/// and counts toward the width. A single word longer than the whole
/// width is broken at the width boundary, so no returned line ever
/// exceeds it. Whitespace-only input yields no lines at all.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let indent = leading_whitespace(text);
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::from(indent);
    let mut current_has_word = false;

    for word in text.split_whitespace() {
        let mut rest = word;
        loop {
            let candidate = current.chars().count()
                + usize::from(current_has_word)
                + rest.chars().count();
            if candidate <= width {
                if current_has_word {
                    current.push(' ');
                }
                current.push_str(rest);
                current_has_word = true;
                break;
            }
            if current_has_word {
                lines.push(std::mem::take(&mut current));
                current_has_word = false;
                continue;
            }
            if !current.is_empty() {
                // The indent alone leaves no room for the word;
                // continuation lines carry no indent at all.
                current.clear();
                continue;
            }
            // A single word wider than the whole line: hard break.
            let cut = rest
                .char_indices()
                .nth(width)
                .map_or(rest.len(), |(index, _)| index);
            lines.push(rest[..cut].to_string());
            rest = &rest[cut..];
        }
    }

    if current_has_word {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedent_uniform_indent() {
        assert_eq!(dedent("    one\n    two"), "one\ntwo");
    }

    #[test]
    fn test_dedent_mixed_depths_strip_common_part() {
        assert_eq!(dedent("    one\n      two"), "one\n  two");
    }

    #[test]
    fn test_dedent_no_common_prefix() {
        assert_eq!(dedent("one\n    two"), "one\n    two");
    }

    #[test]
    fn test_dedent_ignores_whitespace_only_lines_for_margin() {
        assert_eq!(dedent("    one\n  \n    two"), "one\n  \ntwo");
    }

    #[test]
    fn test_dedent_tabs_and_spaces_share_no_prefix() {
        assert_eq!(dedent("\tone\n    two"), "\tone\n    two");
    }

    #[test]
    fn test_dedent_empty() {
        assert_eq!(dedent(""), "");
    }

    #[test]
    fn test_merge_joins_plain_continuations() {
        let merged = merge_continuations("one\ntwo\nthree");
        assert_eq!(merged, vec!["one two three"]);
    }

    #[test]
    fn test_merge_keeps_indented_lines_separate() {
        let merged = merge_continuations("Fix:\n  - item one\n  - item two");
        assert_eq!(merged, vec!["Fix:", "  - item one", "  - item two"]);
    }

    #[test]
    fn test_merge_first_line_always_starts() {
        let merged = merge_continuations("plain first\nmerged in");
        assert_eq!(merged, vec!["plain first merged in"]);
    }

    #[test]
    fn test_wrap_short_line_untouched() {
        assert_eq!(wrap("short line", 70), vec!["short line"]);
    }

    #[test]
    fn test_wrap_exact_width_kept_on_one_line() {
        let text = "aaaa bbbb cccc";
        assert_eq!(text.len(), 14);
        assert_eq!(wrap(text, 14), vec!["aaaa bbbb cccc"]);
        assert_eq!(wrap(text, 13), vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_wrap_greedy_fill() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_never_exceeds_width() {
        let text = "lorem ipsum dolor sit amet consectetur adipiscing elit sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua";
        for line in wrap(text, 70) {
            assert!(line.chars().count() <= 70, "line too long: {line:?}");
        }
    }

    #[test]
    fn test_wrap_keeps_indent_on_first_line_only() {
        let wrapped = wrap("  - a bullet item that is long enough to spill over", 20);
        assert_eq!(wrapped[0], "  - a bullet item");
        assert!(wrapped[1..].iter().all(|line| !line.starts_with(' ')));
    }

    #[test]
    fn test_wrap_indent_counts_toward_width() {
        assert_eq!(wrap("  abc def", 8), vec!["  abc", "def"]);
    }

    #[test]
    fn test_wrap_breaks_overlong_word() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_overlong_word_after_short_word() {
        assert_eq!(wrap("ok abcdefghij", 4), vec!["ok", "abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_whitespace_only_yields_nothing() {
        assert!(wrap("   ", 70).is_empty());
        assert!(wrap("", 70).is_empty());
    }

    #[test]
    fn test_wrap_collapses_internal_runs_of_whitespace() {
        assert_eq!(wrap("one   two", 70), vec!["one two"]);
    }
}
