use candor_core::models::humanize_label;
use proptest::prelude::*;

proptest! {
    #[test]
    fn label_never_contains_underscores(id in "[a-z_]{0,40}") {
        prop_assert!(!humanize_label(&id).contains('_'));
    }

    #[test]
    fn label_preserves_char_count(id in "[a-zA-Z0-9_]{0,40}") {
        prop_assert_eq!(humanize_label(&id).chars().count(), id.chars().count());
    }

    #[test]
    fn label_is_idempotent(id in "[a-z_]{0,40}") {
        let once = humanize_label(&id);
        prop_assert_eq!(humanize_label(&once), once.clone());
    }

    #[test]
    fn every_word_starts_upper_case(id in "[a-z]{1,8}(_[a-z]{1,8}){0,4}") {
        for word in humanize_label(&id).split(' ') {
            let first = word.chars().next().unwrap();
            prop_assert!(first.is_uppercase());
            prop_assert!(word.chars().skip(1).all(|c| c.is_lowercase()));
        }
    }
}
