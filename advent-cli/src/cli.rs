//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code 2022 solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code 2022 solvers", version)]
pub struct Args {
    /// Event year to run
    #[arg(short, long, default_value_t = 2022)]
    pub year: u16,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Cache directory for puzzle inputs
    #[arg(long, default_value = "~/.cache/advent2022")]
    pub cache_dir: PathBuf,

    /// Read the puzzle input from this file instead of the cache (needs --day)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.year, 2022);
        assert_eq!(args.day, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.cache_dir, PathBuf::from("~/.cache/advent2022"));
        assert!(!args.quiet);
    }

    #[test]
    fn test_filters_and_tags() {
        let args = Args::try_parse_from(["advent", "-d", "12", "-p", "2", "--tags", "grid,search"]).unwrap();
        assert_eq!(args.day, Some(12));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["grid", "search"]);
    }

    #[test]
    fn test_out_of_range_values_rejected() {
        assert!(Args::try_parse_from(["advent", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "--part", "3"]).is_err());
    }
}
