use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use taqvim::time::CalendarKind;

/// Persian, Gregorian, and Islamic calendar tool.
#[derive(Parser)]
#[command(
    name = "taqvim",
    version,
    about = "Persian, Gregorian, and Islamic calendar conversion"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to a TOML file with holiday overrides.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every day of a Persian year with its three dates.
    Year(YearArgs),
    /// Convert one date into all three calendars.
    Convert(ConvertArgs),
    /// Print the Persian months of a year with their Gregorian and Islamic spans.
    Months(MonthsArgs),
}

/// Output layout for the `year` subcommand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned columns for reading.
    Text,
    /// Comma-separated values with a header row.
    Csv,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Persian year; defaults to the current one.
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Output layout.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Only print holidays.
    #[arg(long)]
    pub holidays_only: bool,
}

/// Arguments for the `convert` subcommand.
#[derive(clap::Args)]
pub struct ConvertArgs {
    /// Calendar of the input date (persian, gregorian, islamic, or an alias).
    pub calendar: CalendarKind,

    /// Date as YYYY-MM-DD; a leading '-' marks a year before the epoch.
    #[arg(allow_hyphen_values = true)]
    pub date: String,
}

/// Arguments for the `months` subcommand.
#[derive(clap::Args)]
pub struct MonthsArgs {
    /// Persian year; defaults to the current one.
    #[arg(allow_negative_numbers = true)]
    pub year: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_year_with_flags() {
        let cli = Cli::parse_from([
            "taqvim",
            "-vv",
            "year",
            "1403",
            "--format",
            "csv",
            "--holidays-only",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Year(args) => {
                assert_eq!(args.year, Some(1403));
                assert_eq!(args.format, Format::Csv);
                assert!(args.holidays_only);
            }
            _ => panic!("expected year subcommand"),
        }
    }

    #[test]
    fn parses_negative_year() {
        let cli = Cli::parse_from(["taqvim", "months", "-5"]);
        match cli.command {
            Command::Months(args) => assert_eq!(args.year, Some(-5)),
            _ => panic!("expected months subcommand"),
        }
    }

    #[test]
    fn parses_calendar_alias() {
        let cli = Cli::parse_from(["taqvim", "convert", "hijri", "1445-09-10"]);
        match cli.command {
            Command::Convert(args) => {
                assert_eq!(args.calendar, CalendarKind::Islamic);
                assert_eq!(args.date, "1445-09-10");
            }
            _ => panic!("expected convert subcommand"),
        }
    }

    #[test]
    fn rejects_unknown_calendar() {
        assert!(Cli::try_parse_from(["taqvim", "convert", "mayan", "1-1-1"]).is_err());
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["taqvim", "year", "--config", "holidays.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("holidays.toml")));
    }
}
