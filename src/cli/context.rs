//! CLI context - bundles settings, flags, and the random source.

use std::io::BufRead;
use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use inquire::{Password, PasswordDisplayMode};
use zeroize::Zeroize;

use super::{CheckArgs, CliFlags, Command, prompts, quiet};
use crate::error::{Error, Result};
use crate::pass;
use crate::rng::Source;
use crate::settings::Settings;
use crate::terminal;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
    rng: Source,
}

impl Context {
    /// Load settings and lay the flags over them.
    pub fn new(flags: CliFlags) -> Result<Self> {
        quiet::set(flags.quiet);

        let mut settings = Settings::load(flags.config.as_deref())?;
        flags.apply(&mut settings);

        let rng = Source::new(flags.seed);
        log::debug!("random source: {}", rng.name());
        if rng.is_seeded() {
            prompts::seeded_source();
        }

        Ok(Self {
            settings,
            flags,
            rng,
        })
    }

    pub fn run(&mut self) -> Result<ExitCode> {
        match self.flags.command.take() {
            Some(Command::Check(args)) => check(&args),
            None => {
                self.generate_output()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<()> {
        let classes = self.settings.classes();
        let count = self.settings.count;
        log::debug!(
            "generating {} password(s), length {}, classes {:?}",
            count,
            self.settings.length,
            classes.enabled().map(|c| c.name()).collect::<Vec<_>>()
        );

        let mut passwords =
            pass::generate_batch(count, self.settings.length, classes, &mut self.rng);

        let outcome = if self.settings.to_clipboard {
            to_clipboard(&passwords)
        } else {
            print_passwords(&passwords);
            Ok(())
        };

        for password in passwords.iter_mut() {
            password.zeroize();
        }
        outcome
    }
}

fn print_passwords(passwords: &[String]) {
    if let [password] = passwords
        && quiet::decorate()
    {
        terminal::show_password(password, &pass::score(password));
        return;
    }
    for password in passwords {
        println!("{password}");
    }
}

fn to_clipboard(passwords: &[String]) -> Result<()> {
    let mut ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
    let mut contents = passwords.join("\n");
    let result = ctx
        .set_contents(contents.clone())
        .map_err(|e| Error::Clipboard(e.to_string()));
    contents.zeroize();
    result?;

    if let [password] = passwords
        && quiet::decorate()
    {
        let strength = pass::score(password);
        terminal::box_top("Clipboard");
        terminal::strength_lines(&strength);
        terminal::box_bottom();
    }
    prompts::clipboard_copied(passwords.len());
    Ok(())
}

fn check(args: &CheckArgs) -> Result<ExitCode> {
    let mut password = match &args.password {
        Some(p) => p.clone(),
        None => read_password()?,
    };

    let strength = pass::score(&password);
    let passes = pass::validate(&password, &args.requirements());
    password.zeroize();

    if quiet::decorate() {
        terminal::show_check(&strength, passes);
    } else {
        println!(
            "{} {} {}",
            strength.score,
            strength.label(),
            if passes { "pass" } else { "fail" }
        );
    }

    Ok(if passes {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Hidden prompt on a terminal, plain line read when piped.
fn read_password() -> Result<String> {
    if quiet::stdin_is_tty() {
        let password = Password::new("Password:")
            .with_display_mode(PasswordDisplayMode::Hidden)
            .without_confirmation()
            .prompt()?;
        return Ok(password);
    }

    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']).to_string();
    line.zeroize();
    Ok(trimmed)
}
