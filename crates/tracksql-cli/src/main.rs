use anyhow::Result;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use tracksql_etl::Config;

mod commands;
mod logging;

const USAGE: &str = "Usage: tracksql <playlist.xml> <output_script.sql>";

/// Convert a playlist library export into a SQL script.
///
/// Reads the `Tracks` collection of a property-list export and writes a
/// `CREATE TABLE` statement for the `Song` table followed by one `INSERT`
/// per track, in document order.
#[derive(Debug, Parser)]
#[command(
    name = "tracksql",
    about,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Property-list library export to read
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// SQL script to create or overwrite
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,
}

/// Parse the raw process arguments, program name included.
///
/// Exactly two arguments are required and both are always taken as paths,
/// even when they look like flags (`-lib.xml`, `--`).
fn parse_args(args: Vec<OsString>) -> Option<Cli> {
    let [program, input, output]: [OsString; 3] = args.try_into().ok()?;
    Cli::try_parse_from([program, OsString::from("--"), input, output]).ok()
}

fn main() -> Result<()> {
    let Some(cli) = parse_args(std::env::args_os().collect()) else {
        println!("{USAGE}");
        std::process::exit(1);
    };

    let config = Config::default();
    logging::init(&config.logging)?;

    commands::run_convert(cli.input, cli.output, &config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_two_arguments_parse() {
        let cli = parse_args(args(&["tracksql", "Library.xml", "songs.sql"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("Library.xml"));
        assert_eq!(cli.output, PathBuf::from("songs.sql"));
    }

    #[test]
    fn test_hyphenated_arguments_are_paths() {
        let cli = parse_args(args(&["tracksql", "-lib.xml", "--"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("-lib.xml"));
        assert_eq!(cli.output, PathBuf::from("--"));

        let cli = parse_args(args(&["tracksql", "--", "out.sql"])).unwrap();
        assert_eq!(cli.input, PathBuf::from("--"));
        assert_eq!(cli.output, PathBuf::from("out.sql"));
    }

    #[test]
    fn test_wrong_argument_count_is_rejected() {
        assert!(parse_args(args(&["tracksql"])).is_none());
        assert!(parse_args(args(&["tracksql", "--help"])).is_none());
        assert!(parse_args(args(&["tracksql", "a.xml", "b.sql", "c"])).is_none());
    }
}
