//! Main event loop for the application

use ratatui::widgets::Paragraph;

use crate::action::{Launcher, SystemLauncher};
use crate::app::{Config, TerminalSession};
use crate::core::AppState;
use crate::error::TermdirError;
use crate::exit_code;
use crate::handler::{dispatch, ActionContext, ActionResult};
use crate::input::{decode, InputSource, Wake};
use crate::render::{render_frame, Dimensions, HeaderLayout};

/// Run the browser until quit or a termination signal.
///
/// Returns the process exit code.
pub fn run_app(session: &mut TerminalSession, config: &Config) -> anyhow::Result<i32> {
    let mut state = AppState::new(config.path.clone(), config.show_hidden, config.icons_enabled);
    let mut launcher = SystemLauncher::new(config.opener.clone());
    let mut input = InputSource::open()
        .map_err(|e| TermdirError::terminal(format!("cannot read /dev/tty: {}", e)))?;

    tracing::info!(path = %config.path.display(), "browser started");

    loop {
        // The listing is re-read every iteration so external changes show up
        if let Err(e) = state.nav.reload() {
            state.set_message(e.short_message());
        }
        let header = draw(session, &mut state, config)?;

        let wake = input.wait(None)?;
        match wake {
            Wake::Input(bytes) => {
                for event in decode(&bytes) {
                    let result = {
                        let mut context = ActionContext {
                            top_bar: &config.top_bar,
                            launcher: &mut launcher,
                        };
                        dispatch(&event, &mut state, &header, &mut context)
                    };
                    match result {
                        ActionResult::Continue => {}
                        ActionResult::Quit(code) => {
                            tracing::info!(code, "quit");
                            return Ok(code);
                        }
                        ActionResult::Redraw => session.terminal().clear()?,
                        ActionResult::Shell(dir) => {
                            run_shell(session, &mut launcher, &mut state, &dir)?;
                            input.discard_pending_signals();
                        }
                    }
                }
            }
            Wake::Resize => session.terminal().clear()?,
            Wake::Terminate => {
                tracing::info!("terminated by signal");
                return Ok(exit_code::SUCCESS);
            }
            Wake::Timeout => {}
        }
    }
}

/// Render one frame and return the header layout it was drawn with
fn draw(
    session: &mut TerminalSession,
    state: &mut AppState,
    config: &Config,
) -> anyhow::Result<HeaderLayout> {
    let terminal = session.terminal();
    let size = terminal.size()?;
    state.nav.set_list_rows(usize::from(size.height.saturating_sub(1)));

    let frame = render_frame(
        state,
        &config.top_bar,
        Dimensions {
            rows: size.height,
            columns: size.width,
        },
    );
    let cursor = frame.cursor;
    let lines = frame.lines;

    terminal.draw(|f| {
        f.render_widget(Paragraph::new(lines), f.area());
        if let Some(position) = cursor {
            f.set_cursor_position(position);
        }
    })?;
    Ok(frame.header)
}

/// Hand the terminal to an interactive shell and take it back afterwards
fn run_shell(
    session: &mut TerminalSession,
    launcher: &mut dyn Launcher,
    state: &mut AppState,
    dir: &std::path::Path,
) -> anyhow::Result<()> {
    session.suspend()?;
    tracing::info!(dir = %dir.display(), "shell started");
    if let Err(e) = launcher.spawn_interactive_shell(dir) {
        tracing::warn!(error = %e, "shell failed");
        state.set_message(e.short_message());
    }
    session.resume()?;
    tracing::info!("shell finished");
    Ok(())
}
