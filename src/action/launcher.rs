//! External process launching (open, shell, top-bar commands)

use std::path::Path;
use std::process::{Child, Command, Stdio};

use crate::error::{Result, TermdirError};

/// Starts external programs on behalf of the browser
pub trait Launcher {
    /// Open a file with the desktop's default handler
    fn open_with_default_handler(&mut self, path: &Path) -> Result<()>;

    /// Run the user's shell in `cwd` and wait for it to exit.
    ///
    /// The caller must have released the terminal first.
    fn spawn_interactive_shell(&mut self, cwd: &Path) -> Result<()>;

    /// Start `command` in `cwd` without waiting for it
    fn spawn_detached(&mut self, command: &str, args: &[String], cwd: &Path) -> Result<()>;
}

/// Launcher backed by `std::process`
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    opener: String,
}

impl SystemLauncher {
    pub fn new(opener: impl Into<String>) -> Self {
        Self {
            opener: opener.into(),
        }
    }
}

impl Launcher for SystemLauncher {
    fn open_with_default_handler(&mut self, path: &Path) -> Result<()> {
        let cwd = path.parent().unwrap_or(Path::new("/"));
        let child = detached(&self.opener, cwd)
            .arg(path)
            .spawn()
            .map_err(|e| TermdirError::launch(&self.opener, e))?;
        reap(child);
        Ok(())
    }

    fn spawn_interactive_shell(&mut self, cwd: &Path) -> Result<()> {
        let shell = std::env::var("SHELL").unwrap_or_else(|_| "/bin/sh".to_string());
        tracing::info!(shell = %shell, cwd = %cwd.display(), "spawning shell");
        let status = Command::new(&shell)
            .current_dir(cwd)
            .status()
            .map_err(|e| TermdirError::launch(&shell, e))?;
        tracing::debug!(?status, "shell exited");
        Ok(())
    }

    fn spawn_detached(&mut self, command: &str, args: &[String], cwd: &Path) -> Result<()> {
        let child = detached(command, cwd)
            .args(args)
            .spawn()
            .map_err(|e| TermdirError::launch(command, e))?;
        reap(child);
        Ok(())
    }
}

/// A command that cannot touch the terminal we are drawing on
fn detached(program: &str, cwd: &Path) -> Command {
    let mut command = Command::new(program);
    command
        .current_dir(cwd)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    command
}

/// Wait for the child off the loop thread so it does not linger as a zombie
fn reap(mut child: Child) {
    std::thread::spawn(move || {
        let _ = child.wait();
    });
}
