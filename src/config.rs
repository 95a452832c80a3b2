//! Command-line configuration and logging setup.
//!
//! Nothing is read from or written to disk apart from the log file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::WrapErr;

pub const DEFAULT_LOG_FILE: &str = "bridgit.log";

#[derive(Parser, Debug, Clone)]
#[command(name = "bridgit")]
#[command(about = "Terminal onboarding for Bridgit", version)]
pub struct Cli {
    /// Language highlighted when the picker opens
    #[arg(long, value_name = "NAME")]
    pub language: Option<String>,

    /// Where log output goes; the terminal belongs to the UI
    #[arg(long, value_name = "PATH", default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Print the committed session as JSON on exit
    #[arg(long)]
    pub summary: bool,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            language: None,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            summary: false,
        }
    }
}

/// Routes the `log` facade to `path`, truncating it first.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_logging(path: &Path) -> color_eyre::Result<()> {
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .try_init()
        .wrap_err("logger already initialized")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["bridgit"]);
        assert_eq!(cli.language, None);
        assert_eq!(cli.log_file, PathBuf::from("bridgit.log"));
        assert!(!cli.summary);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "bridgit",
            "--language",
            "Spanish",
            "--log-file",
            "/tmp/b.log",
            "--summary",
        ]);
        assert_eq!(cli.language.as_deref(), Some("Spanish"));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/b.log"));
        assert!(cli.summary);
    }
}
