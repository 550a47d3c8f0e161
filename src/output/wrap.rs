// src/output/wrap.rs
// =============================================================================
// Greedy fixed-width line wrapping.
//
// Starting at the cursor, jump `max_width` characters ahead. If that lands
// inside the text, walk back to the nearest whitespace and break there; the
// whitespace character itself is dropped. If there is no whitespace between
// the cursor and the jump target (one "word" longer than a line), cut hard at
// `max_width` and resume exactly at the cut, so nothing is lost.
//
// Widths are counted in chars, not bytes, so multi-byte text is never split
// in the middle of a character.
// =============================================================================

use std::io::{self, Write};

/// Writes `text` to `sink` as lines of at most `max_width` characters,
/// each followed by a newline. A width of 0 is treated as 1.
pub fn write_wrapped<W: Write + ?Sized>(text: &str, max_width: usize, sink: &mut W) -> io::Result<()> {
    let width = max_width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut start = 0;

    while start < chars.len() {
        let tentative = start + width;

        let (end, resume) = if tentative >= chars.len() {
            (chars.len(), chars.len())
        } else {
            let mut end = tentative;
            while end > start && !chars[end].is_whitespace() {
                end -= 1;
            }

            if end == start {
                (tentative, tentative)
            } else {
                (end, end + 1)
            }
        };

        let line: String = chars[start..end].iter().collect();
        writeln!(sink, "{}", line)?;
        start = resume;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(text: &str, width: usize) -> String {
        let mut out = Vec::new();
        write_wrapped(text, width, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_short_text_is_one_line() {
        assert_eq!(wrap("hello world", 80), "hello world\n");
        assert_eq!(wrap("exactly10!", 10), "exactly10!\n");
    }

    #[test]
    fn test_empty_text_writes_nothing() {
        assert_eq!(wrap("", 80), "");
    }

    #[test]
    fn test_breaks_at_whitespace_and_drops_it() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            "the quick\nbrown fox\njumps\n"
        );
    }

    #[test]
    fn test_breaks_at_newlines_too() {
        assert_eq!(wrap("first\nsecond line", 8), "first\nsecond\nline\n");
    }

    #[test]
    fn test_long_word_is_hard_cut_without_losing_characters() {
        let text = "abcdefghijklmnopqrstuvwxy";
        let wrapped = wrap(text, 10);
        let lines: Vec<&str> = wrapped.lines().collect();

        // ceil(25 / 10) lines, and they rebuild the original exactly
        assert_eq!(lines, vec!["abcdefghij", "klmnopqrst", "uvwxy"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_hard_cut_then_word_break() {
        assert_eq!(wrap("abcdefgh ij", 4), "abcd\nefgh\nij\n");
    }

    #[test]
    fn test_whitespace_at_line_start_is_not_a_break_point() {
        // The only space sits at the cursor, so the line is cut hard
        assert_eq!(wrap(" abcdef", 3), " ab\ncde\nf\n");
    }

    #[test]
    fn test_multibyte_characters_count_as_one() {
        assert_eq!(wrap("héllo wörld", 6), "héllo\nwörld\n");
        assert_eq!(wrap("ééééé", 2), "éé\néé\né\n");
    }

    #[test]
    fn test_zero_width_does_not_loop_forever() {
        assert_eq!(wrap("abc", 0), "a\nb\nc\n");
    }

    #[test]
    fn test_lines_never_exceed_width() {
        let text = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
                    eiusmod tempor incididunt ut labore et dolore magna aliqua. \
                    Supercalifragilisticexpialidocious antidisestablishmentarianism.";
        for line in wrap(text, 20).lines() {
            assert!(line.chars().count() <= 20, "line too long: {:?}", line);
        }
    }
}
