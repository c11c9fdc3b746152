//! termdir - A full-screen terminal file browser

use std::process::ExitCode;

use termdir::app::Config;
use termdir::exit_code;

fn main() -> ExitCode {
    // Parse config first to return INVALID exit code for argument errors
    let config = match Config::from_args() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(exit_code::INVALID as u8);
        }
    };

    if let Err(e) = termdir::logging::init(config.log_file.as_deref()) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    match run_with_config(config) {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            tracing::error!(error = %e, "fatal");
            eprintln!("Error: {}", e);
            ExitCode::from(exit_code::ERROR as u8)
        }
    }
}

#[cfg(unix)]
fn run_with_config(config: Config) -> anyhow::Result<i32> {
    let mut session = termdir::app::TerminalSession::enter(config.mouse_enabled)?;
    let result = termdir::app::run_app(&mut session, &config);
    // Restore the terminal before anything is printed
    drop(session);
    result
}

#[cfg(not(unix))]
fn run_with_config(_config: Config) -> anyhow::Result<i32> {
    anyhow::bail!("td requires a Unix terminal")
}
