mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

use clap::Parser;

pub use context::Context;
pub use flags::{CheckArgs, CliFlags, Command};

/// Parse arguments and run. Errors are printed here.
pub fn run() -> ExitCode {
    let flags = CliFlags::parse();
    let outcome = Context::new(flags).and_then(|mut ctx| ctx.run());

    match outcome {
        Ok(code) => code,
        Err(e) => {
            prompts::error(&e.to_string());
            ExitCode::from(2)
        }
    }
}
