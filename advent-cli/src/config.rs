//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::error::CliError;
use advent_solver::{BASE_YEAR, Event, MAX_YEARS};
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug)]
pub struct Config {
    /// Event filter (None = all events)
    pub event_filter: Option<Event>,
    /// Year filter (None = all years)
    pub year_filter: Option<u16>,
    /// Day filter (None = all days)
    pub day_filter: Option<u8>,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// Tags to filter solvers
    pub tags: Vec<String>,
    /// Input directory, `~` expanded
    pub input_dir: PathBuf,
    /// Run everything and collect failures instead of stopping at the first
    pub keep_going: bool,
    /// Quiet mode
    pub quiet: bool,
}

impl Config {
    /// Build config from CLI args
    pub fn from_args(args: Args) -> Result<Self, CliError> {
        if let Some(year) = args.year
            && !(BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year)
        {
            return Err(CliError::Config(format!(
                "year {} is outside {}..{}",
                year,
                BASE_YEAR,
                BASE_YEAR + MAX_YEARS
            )));
        }

        Ok(Config {
            event_filter: args.event.map(Event::from),
            year_filter: args.year,
            day_filter: args.day,
            part_filter: args.part,
            tags: args.tags,
            input_dir: expand_tilde(&args.input_dir),
            keep_going: args.keep_going,
            quiet: args.quiet,
        })
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.get(2..).unwrap_or_default());
    }
    path.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(argv: &[&str]) -> Result<Config, CliError> {
        let args = Args::try_parse_from(std::iter::once("advent").chain(argv.iter().copied()))
            .unwrap();
        Config::from_args(args)
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config.input_dir, PathBuf::from("input"));
        assert_eq!(config.event_filter, None);
        assert!(!config.keep_going);
    }

    #[test]
    fn test_event_conversion() {
        let config = config(&["--event", "aoc", "--keep-going"]).unwrap();
        assert_eq!(config.event_filter, Some(Event::AdventOfCode));
        assert!(config.keep_going);
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(config(&["--year", "2014"]), Err(CliError::Config(_))));
        assert!(matches!(config(&["--year", "2035"]), Err(CliError::Config(_))));
        assert!(config(&["--year", "2034"]).is_ok());
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde(Path::new("input")), PathBuf::from("input"));
        assert_eq!(expand_tilde(Path::new("/tmp/x")), PathBuf::from("/tmp/x"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde(Path::new("~/puzzles")), home.join("puzzles"));
            assert_eq!(expand_tilde(Path::new("~")), home);
        }
    }
}
