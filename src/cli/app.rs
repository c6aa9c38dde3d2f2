use super::commands::query::QueryCommands;
use clap::Parser;
use std::path::PathBuf;

const EXAMPLES: &str = "\
Examples:
  suiteql -query \"SELECT * FROM transaction\"
  suiteql -file query.sql -limit 100
  echo \"SELECT * FROM transaction\" | suiteql";

/// Long options that may also be written with a single dash (`-query`, `-limit=10`)
const LONG_OPTIONS: &[&str] = &[
    "query", "file", "limit", "offset", "help", "version", "no-color", "compact", "env-file",
    "config", "timeout",
];

#[derive(Parser, Debug)]
#[command(name = "suiteql", version)]
#[command(about = "A CLI tool for executing SuiteQL queries against NetSuite")]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    #[command(flatten)]
    pub query: QueryCommands,

    /// Load credentials from this env file instead of ./.env
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Settings file (defaults to the user config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

/// Rewrite single-dash long options into the `--long` form clap expects.
///
/// Anything after a bare `--` is left untouched, as are short flags and
/// negative numbers.
pub fn normalize_args<I, S>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen_terminator = false;

    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(i, arg)| {
            if i == 0 || seen_terminator {
                return arg;
            }
            if arg == "--" {
                seen_terminator = true;
                return arg;
            }
            match arg.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split('=').next().unwrap_or_default();
                    if LONG_OPTIONS.contains(&name) {
                        format!("-{}", arg)
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
