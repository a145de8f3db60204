//! Configuration resolution from CLI args and environment

use crate::cli::Args;
use crate::error::CliError;
use std::path::{Path, PathBuf};
use zeroize::Zeroizing;

/// Environment variable holding the adventofcode.com session cookie
pub const SESSION_ENV: &str = "AOC_SESSION";

/// Resolved runtime configuration
pub struct Config {
    /// Event year to run
    pub year: u16,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags that every selected solver must carry
    pub tags: Vec<String>,
    /// Cache directory path, `~` already expanded
    pub cache_dir: PathBuf,
    /// Explicit input file overriding the cache
    pub input_file: Option<PathBuf>,
    /// Session key (zeroized on drop)
    pub session: Option<Zeroizing<String>>,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args, reading the session from `AOC_SESSION`
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        let session = std::env::var(SESSION_ENV).ok().map(Zeroizing::new);
        Self::resolve(args, session)
    }

    /// Build config from CLI args and an already-read session value
    pub fn resolve(args: Args, session: Option<Zeroizing<String>>) -> Result<Self, CliError> {
        if args.input.is_some() && args.day.is_none() {
            return Err(CliError::Config("--input requires --day".to_string()));
        }

        Ok(Config {
            year: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            cache_dir: expand_tilde(&args.cache_dir),
            input_file: args.input,
            session: session.filter(|s| !s.trim().is_empty()),
            quiet: args.quiet,
        })
    }
}

/// Expand a leading `~` to the home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn test_expand_tilde() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        assert_eq!(expand_tilde(Path::new("~/.cache/advent2022")), home.join(".cache/advent2022"));
        assert_eq!(expand_tilde(Path::new("~")), home);
        assert_eq!(expand_tilde(Path::new("/tmp/inputs")), PathBuf::from("/tmp/inputs"));
        assert_eq!(expand_tilde(Path::new("~other/x")), PathBuf::from("~other/x"));
    }

    #[test]
    fn test_input_requires_day() {
        let result = Config::resolve(args(&["--input", "day12.txt"]), None);
        assert!(matches!(result, Err(CliError::Config(_))));

        let config = Config::resolve(args(&["--input", "day12.txt", "--day", "12"]), None).unwrap();
        assert_eq!(config.input_file, Some(PathBuf::from("day12.txt")));
        assert_eq!(config.day_filter, Some(12));
    }

    #[test]
    fn test_blank_session_is_ignored() {
        let config = Config::resolve(args(&[]), Some(Zeroizing::new("  ".to_string()))).unwrap();
        assert!(config.session.is_none());

        let config = Config::resolve(args(&[]), Some(Zeroizing::new("abc".to_string()))).unwrap();
        assert_eq!(config.session.as_deref().map(String::as_str), Some("abc"));
    }
}
