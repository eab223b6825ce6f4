//! Text normalization for editor input.
//!
//! Replaces commonly used Windows-1252 characters that have no ASCII or
//! ISO-8859-1 equivalent (smart quotes, dashes, ellipsis, ...) with plain
//! cognates. Applied to editor fields before they are saved.

use once_cell::sync::Lazy;
use regex::Regex;

/// Substitution table, applied in order.
///
/// No replacement produces a character matched by any pattern, so the
/// order has no effect on the result and the whole pass is idempotent.
static SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        // smart single quotes and apostrophe
        ("[\u{2018}\u{2019}\u{201A}]", "'"),
        // smart double quotes
        ("[\u{201C}\u{201D}\u{201E}]", "\""),
        ("\u{2026}", "..."),
        // en and em dash
        ("[\u{2013}\u{2014}]", "-"),
        // modifier circumflex
        ("\u{02C6}", "^"),
        // single angle quotes
        ("\u{2039}", "<"),
        ("\u{203A}", ">"),
        // small tilde and no-break space
        ("[\u{02DC}\u{00A0}]", " "),
    ]
    .into_iter()
    .map(|(pattern, replacement)| {
        let re = Regex::new(pattern).expect("substitution pattern must compile");
        (re, replacement)
    })
    .collect()
});

/// Replace "bad" typographic characters with their plain equivalents.
///
/// ```
/// use songbook::util::replace_bad_chars;
///
/// assert_eq!(replace_bad_chars("\u{201C}Hello\u{201D} \u{2026}"), "\"Hello\" ...");
/// ```
pub fn replace_bad_chars(text: &str) -> String {
    let mut s = text.to_string();
    for (re, replacement) in SUBSTITUTIONS.iter() {
        s = re
            .replace_all(&s, regex::NoExpand(*replacement))
            .into_owned();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGETED: &[char] = &[
        '\u{2018}', '\u{2019}', '\u{201A}', '\u{201C}', '\u{201D}', '\u{201E}', '\u{2026}',
        '\u{2013}', '\u{2014}', '\u{02C6}', '\u{2039}', '\u{203A}', '\u{02DC}', '\u{00A0}',
    ];

    #[test]
    fn test_quotes_and_ellipsis() {
        assert_eq!(
            replace_bad_chars("\u{201C}Hello\u{201D} \u{2026}"),
            "\"Hello\" ..."
        );
        assert_eq!(
            replace_bad_chars("it\u{2019}s \u{2018}fine\u{201A}"),
            "it's 'fine'"
        );
        assert_eq!(replace_bad_chars("\u{201E}low\u{201C}"), "\"low\"");
    }

    #[test]
    fn test_dashes_circumflex_angles_spaces() {
        assert_eq!(replace_bad_chars("1\u{2013}2\u{2014}3"), "1-2-3");
        assert_eq!(replace_bad_chars("x\u{02C6}2"), "x^2");
        assert_eq!(replace_bad_chars("\u{2039}tag\u{203A}"), "<tag>");
        assert_eq!(replace_bad_chars("a\u{00A0}b\u{02DC}c"), "a b c");
    }

    #[test]
    fn test_plain_text_untouched() {
        let plain = "Plain ASCII -- with 'quotes' and ... dots; caf\u{00E9} stays.";
        assert_eq!(replace_bad_chars(plain), plain);
        assert_eq!(replace_bad_chars(""), "");
    }

    #[test]
    fn test_output_has_no_targeted_chars_and_is_idempotent() {
        let input: String = TARGETED.iter().collect::<String>() + " mixed \u{2014} text";
        let once = replace_bad_chars(&input);
        assert!(!once.chars().any(|c| TARGETED.contains(&c)));
        assert_eq!(replace_bad_chars(&once), once);
    }
}
