//! the args for running the zanzi reader

use clap::{value_parser, ArgAction, ArgGroup};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Reads Zanzibar-style schema definitions")]
#[clap(group = ArgGroup::new("input").required(true).multiple(false))]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// The schema text, passed inline
    #[clap(short, long, value_name = "SCHEMA", group = "input")]
    schema: Option<String>,

    /// Path to a file containing the schema
    #[clap(short, long, value_name = "FILE", group = "input", value_hint = clap::ValueHint::FilePath)]
    file: Option<PathBuf>,
}

impl Args {
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            -2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            2 => LevelFilter::TRACE,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_inline_schema() {
        let args = Args::try_parse_from(["zanzi", "--schema", "definition user { }"])
            .expect("could not parse test args");
        assert_eq!(args.schema(), Some("definition user { }"));
        assert!(args.file().is_none());
    }

    #[test]
    fn test_file_schema() {
        let args =
            Args::try_parse_from(["zanzi", "--file", "schema.zanzi"]).expect("could not parse");
        assert_eq!(args.file(), Some(Path::new("schema.zanzi")));
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["zanzi"]).is_err());
    }

    #[test]
    fn test_inline_and_file_conflict() {
        assert!(Args::try_parse_from(["zanzi", "-s", "definition a { }", "-f", "b.zanzi"]).is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = Args::try_parse_from(["zanzi", "-vv", "-s", "x"]).unwrap();
        assert_eq!(args.logging().log_level_filter(), LevelFilter::TRACE);
        let args = Args::try_parse_from(["zanzi", "-q", "-s", "x"]).unwrap();
        assert_eq!(args.logging().log_level_filter(), LevelFilter::ERROR);
    }
}
