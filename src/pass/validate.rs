//! Policy check for existing passwords.

/// Minimum requirements a password must meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirements {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_numbers: bool,
    pub require_symbols: bool,
}

impl Requirements {
    /// Every class required, plus `min_length`.
    pub fn strict(min_length: usize) -> Self {
        Self {
            min_length,
            require_uppercase: true,
            require_lowercase: true,
            require_numbers: true,
            require_symbols: true,
        }
    }
}

impl Default for Requirements {
    fn default() -> Self {
        Self {
            min_length: 8,
            require_uppercase: false,
            require_lowercase: false,
            require_numbers: false,
            require_symbols: false,
        }
    }
}

/// Returns true only if `password` meets every enabled requirement.
pub fn validate(password: &str, requirements: &Requirements) -> bool {
    if password.chars().count() < requirements.min_length {
        return false;
    }
    if requirements.require_uppercase && !password.chars().any(|c| c.is_ascii_uppercase()) {
        return false;
    }
    if requirements.require_lowercase && !password.chars().any(|c| c.is_ascii_lowercase()) {
        return false;
    }
    if requirements.require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    if requirements.require_symbols && password.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }

    true
}
