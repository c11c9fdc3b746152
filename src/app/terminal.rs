//! Terminal session lifecycle
//!
//! [`TerminalSession`] puts the terminal into raw mode on the alternate
//! screen and restores it on drop, on suspend, and from the panic hook.

use std::io::{self, Stdout, Write};
use std::sync::OnceLock;

use crossterm::{
    cursor,
    event::{DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::{Result, TermdirError};

/// Owns the ratatui terminal while the browser is on screen
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    mouse: bool,
    active: bool,
}

impl TerminalSession {
    /// Enter raw mode and the alternate screen
    pub fn enter(mouse: bool) -> Result<Self> {
        install_panic_hook();
        setup(mouse).map_err(|e| TermdirError::terminal(e.to_string()))?;
        let terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .map_err(|e| TermdirError::terminal(e.to_string()))?;
        tracing::info!(mouse, "terminal session started");
        Ok(Self {
            terminal,
            mouse,
            active: true,
        })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Hand the terminal back to a child process
    pub fn suspend(&mut self) -> io::Result<()> {
        if self.active {
            self.active = false;
            restore(self.mouse)?;
        }
        Ok(())
    }

    /// Take the terminal back after [`suspend`](Self::suspend)
    pub fn resume(&mut self) -> io::Result<()> {
        if !self.active {
            setup(self.mouse)?;
            self.active = true;
            self.terminal.clear()?;
        }
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if self.active {
            let _ = restore(self.mouse);
            tracing::info!("terminal session restored");
        }
    }
}

fn setup(mouse: bool) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide, EnableBracketedPaste)?;
    if mouse {
        execute!(stdout, EnableMouseCapture)?;
    }
    Ok(())
}

fn restore(mouse: bool) -> io::Result<()> {
    let mut stdout = io::stdout();
    if mouse {
        execute!(stdout, DisableMouseCapture)?;
    }
    execute!(
        stdout,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;
    stdout.flush()
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            best_effort_cleanup();
            previous(info);
        }));
    });
}

fn best_effort_cleanup() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture);
    let _ = execute!(stdout, DisableBracketedPaste);
    let _ = execute!(stdout, cursor::Show);
    let _ = execute!(stdout, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
    let _ = stdout.flush();
}
