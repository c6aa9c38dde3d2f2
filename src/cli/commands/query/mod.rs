pub mod handler;
pub mod input;

use clap::Args;
use std::path::PathBuf;

pub use handler::{execute_and_render, handle_query_command};
pub use input::{InputError, QuerySource, read_query};

#[derive(Args, Debug, Default)]
pub struct QueryCommands {
    /// The SuiteQL query to execute
    #[arg(short, long, value_name = "SQL")]
    pub query: Option<String>,

    /// File containing the SuiteQL query to execute (takes precedence over --query)
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Number of results to return (zero or negative uses the server default)
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Number of results to skip (zero or negative uses the server default)
    #[arg(long, allow_negative_numbers = true)]
    pub offset: Option<i64>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Print the result on a single line
    #[arg(long)]
    pub compact: bool,
}
