//! Property-based tests for the password generator.
//!
//! These verify the length invariant, per-category coverage, and pool
//! membership for arbitrary lengths and category selections.

use proptest::prelude::*;
use webtools::services::password_generator::{
    PasswordGenerator, PasswordGeneratorTrait, LOWERCASE_CHARS, NUMBER_CHARS, SYMBOL_CHARS,
    UPPERCASE_CHARS,
};
use webtools::types::password::CharacterOptions;

fn arb_options() -> impl Strategy<Value = CharacterOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(lowercase, uppercase, numbers, symbols)| CharacterOptions {
            lowercase,
            uppercase,
            numbers,
            symbols,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // For any selection, the result has the requested length whenever the
    // length can accommodate one guaranteed character per category; an empty
    // selection always yields an empty string.
    #[test]
    fn generated_length_is_exact(length in 0usize..=40, options in arb_options()) {
        let mut generator = PasswordGenerator::new();
        let password = generator.generate(length, &options);
        let categories = options.selected_count();

        if categories == 0 {
            prop_assert_eq!(password, "");
        } else {
            prop_assert_eq!(password.len(), length.max(categories));
        }
    }

    // Every selected category contributes at least one character.
    #[test]
    fn every_selected_category_is_covered(length in 4usize..=40, options in arb_options()) {
        let mut generator = PasswordGenerator::new();
        let password = generator.generate(length, &options);

        if options.lowercase {
            prop_assert!(password.chars().any(|c| LOWERCASE_CHARS.contains(c)));
        }
        if options.uppercase {
            prop_assert!(password.chars().any(|c| UPPERCASE_CHARS.contains(c)));
        }
        if options.numbers {
            prop_assert!(password.chars().any(|c| NUMBER_CHARS.contains(c)));
        }
        if options.symbols {
            prop_assert!(password.chars().any(|c| SYMBOL_CHARS.contains(c)));
        }
    }

    // Every character belongs to a pool that was actually selected.
    #[test]
    fn characters_come_from_selected_pools_only(length in 0usize..=40, options in arb_options()) {
        let mut generator = PasswordGenerator::new();
        let password = generator.generate(length, &options);

        for c in password.chars() {
            let allowed = (options.lowercase && LOWERCASE_CHARS.contains(c))
                || (options.uppercase && UPPERCASE_CHARS.contains(c))
                || (options.numbers && NUMBER_CHARS.contains(c))
                || (options.symbols && SYMBOL_CHARS.contains(c));
            prop_assert!(allowed, "unexpected character {:?}", c);
        }
    }
}
