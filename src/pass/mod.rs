//! Password generation, strength scoring and policy checks.

pub mod charset;
mod generate;
mod strength;
mod validate;

pub use charset::{CharClass, CharClasses};
pub use generate::{generate, generate_batch, generate_with};
pub use strength::{Level, StrengthResult, score};
pub use validate::{Requirements, validate};
