//! Name sanitizer: maps one raw path segment to its cleaned form.

use unicode_normalization::UnicodeNormalization;

const C_BOM: char = '\u{feff}';

/// Clean a single path segment.
///
/// Steps, in order:
/// 1. Drop every U+FEFF.
/// 2. Compose to NFC.
/// 3. Drop C0 control characters except `\n` and `\t`.
/// 4. Recompose if step 3 removed anything, since a dropped control
///    character may have separated a base character from its combining mark.
///
/// The result is always NFC and `clean_name(&clean_name(x)) == clean_name(x)`.
pub fn clean_name(name: &str) -> String {
    let name_composed: String = name.chars().filter(|&ch| ch != C_BOM).nfc().collect();

    let name_filtered: String = name_composed
        .chars()
        .filter(|&ch| is_allowed_char(ch))
        .collect();
    if name_filtered.len() == name_composed.len() {
        return name_filtered;
    }
    name_filtered.nfc().collect()
}

/// Whether `name` is already in cleaned form.
pub fn is_clean_name(name: &str) -> bool {
    clean_name(name) == name
}

fn is_allowed_char(ch: char) -> bool {
    u32::from(ch) >= 32 || ch == '\n' || ch == '\t'
}

#[cfg(test)]
mod tests {
    use super::{clean_name, is_clean_name};

    #[test]
    fn clean_name_removes_bom_anywhere() {
        assert_eq!(clean_name("report\u{feff}.txt"), "report.txt");
        assert_eq!(clean_name("\u{feff}a\u{feff}b\u{feff}"), "ab");
    }

    #[test]
    fn clean_name_composes_decomposed_accent() {
        let name = clean_name("cafe\u{301}");
        assert_eq!(name, "caf\u{e9}");
        assert_eq!(name.chars().count(), 4);
    }

    #[test]
    fn clean_name_keeps_newline_and_tab_only() {
        assert_eq!(clean_name("a\tb\nc"), "a\tb\nc");
        assert_eq!(clean_name("a\u{1}b\rc\u{1b}d\u{0}"), "abcd");
    }

    #[test]
    fn clean_name_passes_del_and_c1_through() {
        assert_eq!(clean_name("a\u{7f}\u{85}b"), "a\u{7f}\u{85}b");
    }

    #[test]
    fn clean_name_empty_and_all_control() {
        assert_eq!(clean_name(""), "");
        assert_eq!(clean_name("\u{1}"), "");
        assert_eq!(clean_name("\u{1}\u{2}\u{feff}\u{1f}"), "");
    }

    #[test]
    fn clean_name_recomposes_after_control_removal() {
        // Control char blocks composition until it is filtered out.
        let name = clean_name("e\u{1}\u{301}");
        assert_eq!(name, "\u{e9}");
        assert_eq!(clean_name(&name), name);
    }

    #[test]
    fn clean_name_bom_between_base_and_mark() {
        assert_eq!(clean_name("e\u{feff}\u{301}"), "\u{e9}");
    }

    #[test]
    fn is_clean_name_detects_noop() {
        assert!(is_clean_name("plain.txt"));
        assert!(is_clean_name("caf\u{e9}"));
        assert!(is_clean_name(""));
        assert!(!is_clean_name("cafe\u{301}"));
        assert!(!is_clean_name("x\u{7}"));
    }
}
