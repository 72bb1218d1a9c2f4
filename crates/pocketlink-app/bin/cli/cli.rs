use clap::{Parser, Subcommand, ValueEnum};
use pocketlink_app::config::DEFAULT_BASE_URL;
use pocketlink_app::telemetry::LogFormat;
use pocketlink_shortener::DEFAULT_VALIDITY_MINUTES;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DATA_DIR_ENV: &str = "POCKETLINK_DATA_DIR";
pub const STORAGE_BACKEND_ENV: &str = "POCKETLINK_STORAGE";
pub const BASE_URL_ENV: &str = "POCKETLINK_BASE_URL";
pub const DEFAULT_VALIDITY_ENV: &str = "POCKETLINK_DEFAULT_VALIDITY";
pub const LOG_FORMAT_ENV: &str = "POCKETLINK_LOG_FORMAT";

pub const DEFAULT_DATA_DIR: &str = ".pocketlink";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    #[value(name = "file")]
    File,
    #[value(name = "in-memory")]
    InMemory,
}

impl Display for StorageBackendArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackendArg::File => write!(f, "file"),
            StorageBackendArg::InMemory => write!(f, "in-memory"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pocketlink", about = "Shorten URLs and resolve short links")]
pub struct CLI {
    /// Directory the link list is stored in.
    #[arg(long, env = DATA_DIR_ENV, default_value = DEFAULT_DATA_DIR, global = true)]
    pub data_dir: PathBuf,

    #[arg(
        long,
        env = STORAGE_BACKEND_ENV,
        value_enum,
        default_value_t = StorageBackendArg::File,
        global = true
    )]
    pub storage: StorageBackendArg,

    /// Origin short links are rendered against.
    #[arg(long, env = BASE_URL_ENV, default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Validity in minutes used when none (or a non-positive one) is given.
    #[arg(
        long,
        env = DEFAULT_VALIDITY_ENV,
        default_value_t = DEFAULT_VALIDITY_MINUTES,
        value_parser = clap::value_parser!(i64).range(1..),
        global = true
    )]
    pub default_validity: i64,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty,
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Print the journal as JSON lines after the command.
    #[arg(long, global = true)]
    pub show_journal: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a short link.
    Shorten {
        /// The long URL, including its scheme.
        url: String,
        /// Custom shortcode, 3-16 alphanumeric characters.
        #[arg(long)]
        code: Option<String>,
        /// Validity in minutes.
        #[arg(long, allow_hyphen_values = true)]
        validity: Option<String>,
    },
    /// Resolve a visit path such as `/abc123`.
    Visit { path: String },
    /// List every short link, newest first.
    List,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        CLI::command().debug_assert();
    }

    #[test]
    fn default_validity_defaults_to_thirty() {
        let cli = CLI::try_parse_from(["pocketlink", "list"]).unwrap();
        assert_eq!(cli.default_validity, DEFAULT_VALIDITY_MINUTES);
    }

    #[test]
    fn non_positive_default_validity_is_rejected() {
        for value in ["0", "-5"] {
            let parsed = CLI::try_parse_from([
                "pocketlink",
                "--default-validity",
                value,
                "list",
            ]);
            assert!(parsed.is_err(), "{value}");
        }

        let cli =
            CLI::try_parse_from(["pocketlink", "--default-validity", "1", "list"]).unwrap();
        assert_eq!(cli.default_validity, 1);
    }
}
