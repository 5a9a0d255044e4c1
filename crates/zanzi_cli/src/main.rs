use crate::args::Args;
use clap::Parser;
use eyre::{eyre, WrapErr};
use std::fs;
use std::process::ExitCode;
use tracing::level_filters::LevelFilter;
use tracing::{debug, trace};
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::Registry;

mod args;

fn main() -> eyre::Result<ExitCode> {
    color_eyre::install()?;
    let args = Args::parse();
    init_logging(args.logging().log_level_filter())?;
    trace!("starting zanzi with args: {args:?}");
    debug!("zanzi version: {}", env!("CARGO_PKG_VERSION"));

    let input = read_input(&args)?;
    match zanzi_parsing::parse(&input) {
        Ok(schema) => {
            println!("{schema}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("syntax error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_input(args: &Args) -> eyre::Result<String> {
    if let Some(schema) = args.schema() {
        Ok(schema.to_owned())
    } else if let Some(file) = args.file() {
        fs::read_to_string(file).wrap_err_with(|| eyre!("could not read {}", file.display()))
    } else {
        unreachable!("clap enforces that exactly one input source is present")
    }
}

fn init_logging(level_filter: LevelFilter) -> eyre::Result<()> {
    let registry = Registry::default()
        .with(tracing_subscriber::fmt::layer().with_filter(level_filter))
        .with(ErrorLayer::default());

    tracing::subscriber::set_global_default(registry)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_inline_input() {
        let args = Args::try_parse_from(["zanzi", "-s", "definition user { }"]).unwrap();
        assert_eq!(read_input(&args).unwrap(), "definition user { }");
    }

    #[test]
    fn test_read_file_input() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "definition user {{ }}").expect("could not write");
        let path = temp_file.path().to_string_lossy().to_string();
        let args = Args::try_parse_from(["zanzi", "--file", &path]).unwrap();
        let input = read_input(&args).unwrap();
        assert!(zanzi_parsing::parse(&input).is_ok());
    }

    #[test]
    fn test_read_missing_file_is_an_error() {
        let args = Args::try_parse_from(["zanzi", "--file", "/no/such/file.zanzi"]).unwrap();
        assert!(read_input(&args).is_err());
    }
}
