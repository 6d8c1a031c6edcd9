use std::process::ExitCode;

use passforge::{cli, exits, terminal};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PASSFORGE_LOG", "warn")).init();
    exits::install_handlers();
    exits::harden();

    let code = cli::run();
    if cli::quiet::stdout_is_tty() {
        terminal::reset_terminal();
    }
    code
}
