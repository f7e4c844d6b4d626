use cleanname_io_fs::{clean_name, is_clean_name};
use proptest::prelude::*;
use proptest::test_runner::Config;
use unicode_normalization::is_nfc;

const C_BOM: char = '\u{feff}';

fn name_strategy() -> impl Strategy<Value = String> {
    // Bias towards the characters the cleaner cares about.
    let ch = prop_oneof![
        3 => any::<char>(),
        2 => proptest::char::range('\u{0}', '\u{1f}'),
        1 => Just(C_BOM),
        2 => proptest::char::range('\u{300}', '\u{36f}'),
        2 => proptest::char::range('a', 'z'),
        1 => Just('\u{1100}'),
        1 => Just('\u{1161}'),
    ];
    proptest::collection::vec(ch, 0..24).prop_map(|l_chars| l_chars.into_iter().collect())
}

proptest! {
    #![proptest_config(Config::with_cases(512))]

    #[test]
    fn clean_name_is_idempotent(name in name_strategy()) {
        let once = clean_name(&name);
        prop_assert_eq!(clean_name(&once), once.clone());
        prop_assert!(is_clean_name(&once), "cleaned name is not reported clean");
    }

    #[test]
    fn clean_name_has_no_bom(name in name_strategy()) {
        prop_assert!(
            !clean_name(&name).contains(C_BOM),
            "cleaned name still contains a BOM"
        );
    }

    #[test]
    fn clean_name_drops_c0_controls_except_newline_tab(name in name_strategy()) {
        for ch in clean_name(&name).chars() {
            prop_assert!(
                u32::from(ch) >= 32 || ch == '\n' || ch == '\t',
                "control character {:?} survived cleaning",
                ch
            );
        }
    }

    #[test]
    fn clean_name_is_nfc(name in name_strategy()) {
        prop_assert!(is_nfc(&clean_name(&name)), "cleaned name is not NFC");
    }

    #[test]
    fn clean_name_keeps_newline_and_tab_count(name in name_strategy()) {
        let cleaned = clean_name(&name);
        let count = |s: &str, c: char| s.chars().filter(|&x| x == c).count();
        prop_assert_eq!(count(&cleaned, '\n'), count(&name, '\n'));
        prop_assert_eq!(count(&cleaned, '\t'), count(&name, '\t'));
    }
}
