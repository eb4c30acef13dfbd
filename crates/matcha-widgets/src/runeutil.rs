//! Unicode-aware string width utilities.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> u16 {
    UnicodeWidthStr::width(s) as u16
}

/// Truncate a string to at most `max_width` terminal cells.
///
/// Never splits a double-width character: if the next character would
/// overflow the budget, truncation stops before it.
pub fn truncate_to_width(s: &str, max_width: u16) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used: u16 = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0) as u16;
        if used + w > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii() {
        assert_eq!(display_width("hello"), 5);
    }

    #[test]
    fn width_wide_chars() {
        assert_eq!(display_width("日本"), 4);
    }

    #[test]
    fn truncate_noop_when_fits() {
        assert_eq!(truncate_to_width("abc", 5), "abc");
        assert_eq!(truncate_to_width("abc", 3), "abc");
    }

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_to_width("abcdef", 4), "abcd");
    }

    #[test]
    fn truncate_does_not_split_wide_char() {
        // "日" is 2 cells; with a budget of 3, only one fits.
        assert_eq!(truncate_to_width("日本", 3), "日");
    }

    #[test]
    fn truncate_to_zero() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
