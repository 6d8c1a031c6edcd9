//! Password generation with per-class inclusion guarantees, plus a coarse
//! strength meter and a policy validator.
//!
//! ```
//! use passforge::pass::{self, CharClasses, Requirements};
//!
//! let password = pass::generate(16, CharClasses::all());
//! assert_eq!(password.len(), 16);
//! assert_eq!(pass::score(&password).label(), "Strong");
//! assert!(pass::validate(&password, &Requirements::strict(16)));
//! ```

pub mod cli;
pub mod error;
pub mod exits;
pub mod pass;
pub mod rng;
pub mod settings;
pub mod terminal;

pub use error::{Error, Result};
