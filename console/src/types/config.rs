use std::path::PathBuf;

use super::console_error::ConsoleError;
use super::{DEFAULT_LOG_DIR, DEFAULT_SESSION};

pub const USAGE: &str =
    "Usage: booking [--log-dir <dir>] [--session <name>] [--echo-logs] [--empty]";

/// Settings of a console session, taken from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_dir: PathBuf,
    pub session: String,
    pub echo_logs: bool,
    pub seed: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            session: DEFAULT_SESSION.to_string(),
            echo_logs: false,
            seed: true,
        }
    }
}

impl Config {
    /// Builds a `Config` from the arguments that follow the program name.
    ///
    /// # Errors
    /// - `ConsoleError::InvalidArgument` - On an unknown flag or a flag missing its value.
    pub fn from_args<I>(args: I) -> Result<Self, ConsoleError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--log-dir" => config.log_dir = PathBuf::from(value_of(&arg, args.next())?),
                "--session" => config.session = value_of(&arg, args.next())?,
                "--echo-logs" => config.echo_logs = true,
                "--empty" => config.seed = false,
                other => {
                    return Err(ConsoleError::InvalidArgument(format!(
                        "unknown argument '{}'",
                        other
                    )))
                }
            }
        }

        Ok(config)
    }
}

fn value_of(flag: &str, value: Option<String>) -> Result<String, ConsoleError> {
    match value {
        Some(value) if !value.starts_with("--") => Ok(value),
        _ => Err(ConsoleError::InvalidArgument(format!(
            "{} expects a value",
            flag
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_args(args(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert!(config.seed);
        assert!(!config.echo_logs);
    }

    #[test]
    fn test_all_flags() {
        let config = Config::from_args(args(&[
            "--log-dir",
            "/tmp/booking",
            "--session",
            "desk-2",
            "--echo-logs",
            "--empty",
        ]))
        .unwrap();

        assert_eq!(config.log_dir, PathBuf::from("/tmp/booking"));
        assert_eq!(config.session, "desk-2");
        assert!(config.echo_logs);
        assert!(!config.seed);
    }

    #[test]
    fn test_missing_value() {
        assert!(matches!(
            Config::from_args(args(&["--session"])),
            Err(ConsoleError::InvalidArgument(_))
        ));
        assert!(matches!(
            Config::from_args(args(&["--log-dir", "--empty"])),
            Err(ConsoleError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_unknown_argument() {
        let result = Config::from_args(args(&["--verbose"]));
        assert!(
            matches!(result, Err(ConsoleError::InvalidArgument(msg)) if msg.contains("--verbose"))
        );
    }
}
