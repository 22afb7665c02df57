//! Password generation and strength scoring.
//!
//! Builds random passwords that satisfy length and character-category
//! constraints, guaranteeing at least one character per selected category,
//! and scores passwords with a length/diversity heuristic.

use crate::services::random_source::{RandomSource, SystemRandomSource};
use crate::types::password::{CharacterOptions, PasswordStrength};

/// Lowercase character pool.
pub const LOWERCASE_CHARS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Uppercase character pool.
pub const UPPERCASE_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Digit character pool.
pub const NUMBER_CHARS: &str = "0123456789";

/// Symbol character pool.
pub const SYMBOL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Trait defining password generation operations.
pub trait PasswordGeneratorTrait {
    /// Generates a random password of `length` characters drawn from the
    /// selected categories. Always returns a string; an empty selection
    /// yields an empty string.
    fn generate(&mut self, length: usize, options: &CharacterOptions) -> String;
}

/// Password generator over an injected random source.
pub struct PasswordGenerator<R: RandomSource> {
    rng: R,
}

impl PasswordGenerator<SystemRandomSource> {
    /// Creates a generator backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self {
            rng: SystemRandomSource::new(),
        }
    }
}

impl Default for PasswordGenerator<SystemRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> PasswordGenerator<R> {
    /// Creates a generator with a specific random source.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: RandomSource> PasswordGeneratorTrait for PasswordGenerator<R> {
    fn generate(&mut self, length: usize, options: &CharacterOptions) -> String {
        // Selected pools, in fixed category order.
        let mut selected: Vec<&[u8]> = Vec::with_capacity(4);
        if options.lowercase {
            selected.push(LOWERCASE_CHARS.as_bytes());
        }
        if options.uppercase {
            selected.push(UPPERCASE_CHARS.as_bytes());
        }
        if options.numbers {
            selected.push(NUMBER_CHARS.as_bytes());
        }
        if options.symbols {
            selected.push(SYMBOL_CHARS.as_bytes());
        }

        if selected.is_empty() {
            return String::new();
        }

        let pool: Vec<u8> = selected.concat();
        let mut chars: Vec<u8> = Vec::with_capacity(length.max(selected.len()));

        // One draw per selected category, so every category is represented.
        // When `length` is smaller than the category count the result runs
        // longer than requested.
        for set in &selected {
            let index = self.rng.next_below(set.len() as u32) as usize;
            chars.push(set[index]);
        }

        // Fill the remainder from the combined pool.
        while chars.len() < length {
            let index = self.rng.next_below(pool.len() as u32) as usize;
            chars.push(pool[index]);
        }

        // Fisher-Yates shuffle so the guaranteed characters are not
        // clustered at the front.
        for i in (1..chars.len()).rev() {
            let j = self.rng.next_below(i as u32 + 1) as usize;
            chars.swap(i, j);
        }

        String::from_utf8(chars).unwrap_or_default()
    }
}

/// Scores a password from its length and the number of selected categories.
///
/// This is a deliberate heuristic over length and category diversity, not an
/// entropy measurement; the password content itself is not re-inspected.
pub fn calculate_strength(password: &str, options: &CharacterOptions) -> PasswordStrength {
    let length = password.chars().count();
    let categories = options.selected_count();

    if length < 12 {
        return if categories >= 3 {
            PasswordStrength::Fair
        } else {
            PasswordStrength::Weak
        };
    }

    if categories >= 3 {
        if (length >= 16 && categories == 4) || length >= 20 {
            return PasswordStrength::Strong;
        }
        return PasswordStrength::Good;
    }

    if categories >= 2 {
        PasswordStrength::Fair
    } else {
        PasswordStrength::Weak
    }
}
