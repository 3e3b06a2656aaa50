use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SPACE_RUNS: Regex = Regex::new(r"[^\S\n]+").unwrap();
    static ref NEWLINE_RUNS: Regex = Regex::new(r"\s*\n\s*").unwrap();
    static ref DISALLOWED: Regex = Regex::new(r"[^\w\s.,!?\-()]").unwrap();
}

/// Cleans and normalizes scraped page text before it is fed to the
/// prompt pipeline.
///
/// Runs of spaces and tabs collapse to a single space, runs of newlines
/// to a single newline, the ends are trimmed, and any character outside
/// word characters, whitespace and `. , ! ? - ( )` is removed.
pub fn clean_text(text: &str) -> String {
    let text = SPACE_RUNS.replace_all(text, " ");
    let text = NEWLINE_RUNS.replace_all(&text, "\n");
    let text = text.trim();
    DISALLOWED.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("   \n\n  "), "");
    }

    #[test]
    fn collapses_whitespace_and_newlines() {
        assert_eq!(clean_text("a   b\n\n\nc"), "a b\nc");
        assert_eq!(clean_text("a\t\t b"), "a b");
        assert_eq!(clean_text("a \n \n b"), "a\nb");
    }

    #[test]
    fn trims_ends() {
        assert_eq!(clean_text("  hello world  "), "hello world");
        assert_eq!(clean_text("\nhello\n"), "hello");
    }

    #[test]
    fn strips_disallowed_characters() {
        assert_eq!(clean_text("hi @#$ there!"), "hi  there!");
        assert_eq!(clean_text("keep. these, marks! ok? (yes) - done"), "keep. these, marks! ok? (yes) - done");
        assert_eq!(clean_text("50% of $100"), "50 of 100");
    }

    #[test]
    fn keeps_unicode_word_characters() {
        assert_eq!(clean_text("café número"), "café número");
    }

    #[test]
    fn idempotent_on_whitespace_normalization() {
        let inputs = [
            "a   b\n\n\nc",
            "  spaced   out\ttext  ",
            "already clean text.",
            "line one\n\nline two (with marks), ok?",
        ];
        for input in inputs {
            let once = clean_text(input);
            assert_eq!(clean_text(&once), once, "not idempotent for {:?}", input);
        }
    }
}
