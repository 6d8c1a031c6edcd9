//! Password strength estimate.
//!
//! Coarse additive heuristic over length and character composition. Not an
//! entropy calculation.

const LONG: usize = 12;
const VERY_LONG: usize = 16;

/// Strength tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    None,
    Weak,
    Fair,
    Good,
    Strong,
}

impl Level {
    /// Map a non-empty password's score to its tier.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=40 => Level::Weak,
            41..=65 => Level::Fair,
            66..=85 => Level::Good,
            _ => Level::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::None => "None",
            Level::Weak => "Weak",
            Level::Fair => "Fair",
            Level::Good => "Good",
            Level::Strong => "Strong",
        }
    }

    /// Display color as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Level::None => "#64748b",
            Level::Weak => "#ef4444",
            Level::Fair => "#f59e0b",
            Level::Good => "#10b981",
            Level::Strong => "#06b6d4",
        }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.color()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub level: Level,
}

impl StrengthResult {
    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    pub fn color(&self) -> &'static str {
        self.level.color()
    }

    pub fn is_weak(&self) -> bool {
        self.score <= 40
    }
}

/// Score a password in `[0, 100]`.
pub fn score(password: &str) -> StrengthResult {
    if password.is_empty() {
        return StrengthResult {
            score: 0,
            level: Level::None,
        };
    }

    let length = password.chars().count();
    let mut score = 0u8;

    if length >= LONG {
        score += 20;
    }
    if length >= VERY_LONG {
        score += 10;
    }

    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 20;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 15;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 15;
    }

    StrengthResult {
        score,
        level: Level::from_score(score),
    }
}
