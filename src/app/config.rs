//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;

use super::config_file::ConfigFile;
use crate::core::TopBarAction;
use crate::exit_code;

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Directory to open
    pub path: PathBuf,
    /// List dotfiles
    pub show_hidden: bool,
    /// Draw Nerd Font icons next to names
    pub icons_enabled: bool,
    /// Enable mouse reporting (from config file)
    pub mouse_enabled: bool,
    /// Default handler command for files (from config file)
    pub opener: String,
    /// Header buttons (from config file)
    pub top_bar: Vec<TopBarAction>,
    /// Log destination when TERMDIR_LOG is set
    pub log_file: Option<PathBuf>,
}

impl Config {
    pub fn from_args() -> anyhow::Result<Self> {
        // Load config file first (provides defaults)
        Self::parse(env::args().skip(1), ConfigFile::load())
    }

    /// Merge command-line arguments over a loaded config file
    pub fn parse<I>(args: I, config_file: ConfigFile) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut path: Option<PathBuf> = None;
        let mut show_hidden: Option<bool> = None;
        let mut icons_enabled: Option<bool> = None;
        let mut log_file: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-hidden" => show_hidden = Some(false),
                "--icons" | "-i" => icons_enabled = Some(true),
                "--no-icons" => icons_enabled = Some(false),
                "--log-file" => {
                    if let Some(file) = args.next() {
                        log_file = Some(PathBuf::from(file));
                    } else {
                        anyhow::bail!("--log-file requires a file path");
                    }
                }
                "--help" | "-h" => {
                    print_help();
                    std::process::exit(exit_code::SUCCESS);
                }
                "--version" | "-V" => {
                    println!("td {}", env!("CARGO_PKG_VERSION"));
                    std::process::exit(exit_code::SUCCESS);
                }
                p if !p.starts_with('-') => {
                    let p = PathBuf::from(p);
                    if p.is_dir() {
                        path = Some(p.canonicalize()?);
                    } else if p.exists() {
                        anyhow::bail!("Not a directory: {}", p.display());
                    } else {
                        anyhow::bail!("Path does not exist: {}", p.display());
                    }
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let path = match path {
            Some(p) => p,
            None => default_start_dir()?,
        };

        // CLI arguments take precedence over config file
        Ok(Self {
            path,
            show_hidden: show_hidden.unwrap_or(config_file.general.show_hidden),
            icons_enabled: icons_enabled.unwrap_or(config_file.general.icons),
            mouse_enabled: config_file.general.mouse,
            top_bar: config_file.top_bar_actions(),
            opener: config_file.general.opener,
            log_file,
        })
    }
}

/// `$HOME` when it is a directory, otherwise the working directory
fn default_start_dir() -> anyhow::Result<PathBuf> {
    match dirs::home_dir().filter(|home| home.is_dir()) {
        Some(home) => Ok(home),
        None => Ok(env::current_dir()?),
    }
}

fn print_help() {
    println!(
        r#"td - termdir: a full-screen terminal file browser

USAGE:
    td [OPTIONS] [PATH]

OPTIONS:
    -a, --hidden        Show hidden files (default)
    --no-hidden         Hide hidden files
    -i, --icons         Enable Nerd Fonts icons (default)
    --no-icons          Disable icons
    --log-file FILE     Write logs to FILE (requires TERMDIR_LOG)
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/termdir/config.toml    Main configuration file

ENVIRONMENT:
    TERMDIR_LOG=debug           Enable logging with the given filter

KEYBINDINGS:
    ↑/↓, wheel      Move cursor
    Home/End        Go to first / last entry
    PgUp/PgDn       Move by a screenful
    →/Enter/click   Open directory or file
    ←/BS            Go to parent directory
    Space           Toggle mark
    Ctrl+A          Mark all / clear marks
    Esc             Clear marks
    Del/Ctrl+D      Delete (with confirmation)
    F2/Ctrl+R       Rename
    Ctrl+N          New folder
    Ctrl+Y          Yank marked entries
    Ctrl+V          Paste yanked entries here
    Ctrl+K          Copy paths to system clipboard
    Ctrl+T          Open a shell in the current directory
    Ctrl+L          Redraw
    a-z...          Jump to the next name with that prefix
    Ctrl+Q/Ctrl+C   Quit

EXIT CODES:
    0           Success
    2           Error (runtime error)
    3           Invalid arguments (unknown option or invalid value)
"#
    );
}
