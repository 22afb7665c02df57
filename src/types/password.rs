use serde::{Deserialize, Serialize};
use std::fmt;

/// Character categories to include when generating a password.
///
/// The four toggles are independent; an all-false selection is legal and
/// makes the generator return an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub numbers: bool,
    pub symbols: bool,
}

impl CharacterOptions {
    /// Returns the number of enabled categories (0–4).
    pub fn selected_count(&self) -> usize {
        [self.lowercase, self.uppercase, self.numbers, self.symbols]
            .iter()
            .filter(|enabled| **enabled)
            .count()
    }

    /// All categories disabled.
    pub fn none() -> Self {
        Self {
            lowercase: false,
            uppercase: false,
            numbers: false,
            symbols: false,
        }
    }
}

impl Default for CharacterOptions {
    fn default() -> Self {
        Self {
            lowercase: true,
            uppercase: true,
            numbers: true,
            symbols: true,
        }
    }
}

/// Password strength levels, ordered weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PasswordStrength {
    Weak,
    Fair,
    Good,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PasswordStrength::Weak => write!(f, "Weak"),
            PasswordStrength::Fair => write!(f, "Fair"),
            PasswordStrength::Good => write!(f, "Good"),
            PasswordStrength::Strong => write!(f, "Strong"),
        }
    }
}
