//! Generation settings.

mod file;

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::pass::CharClasses;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub length: usize,
    pub count: usize,
    pub uppercase: bool,
    pub lowercase: bool,
    pub numbers: bool,
    pub symbols: bool,
    pub to_clipboard: bool,
}

impl Settings {
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 64;

    /// Load from `path`, `$PASSFORGE_CONFIG` or the default location.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        file::load(&file::resolve(path))
    }

    pub fn classes(&self) -> CharClasses {
        CharClasses {
            uppercase: self.uppercase,
            lowercase: self.lowercase,
            numbers: self.numbers,
            symbols: self.symbols,
        }
    }

    /// Clamp `length` into `[MIN_LENGTH, MAX_LENGTH]`. Returns true if it changed.
    pub fn set_length(&mut self, length: usize) -> bool {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
        self.length != length
    }

    /// Raise `count` to at least 1. Returns true if it changed.
    pub fn set_count(&mut self, count: usize) -> bool {
        self.count = count.max(1);
        self.count != count
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 16,
            count: 1,
            uppercase: true,
            lowercase: true,
            numbers: true,
            symbols: true,
            to_clipboard: false,
        }
    }
}
