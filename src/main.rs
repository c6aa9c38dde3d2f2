use clap::{CommandFactory, Parser};
use clap::error::ErrorKind;
use log::{debug, info};
use std::process::ExitCode;

use suiteql_cli::cli::commands::query::InputError;
use suiteql_cli::cli::{Cli, normalize_args};
use suiteql_cli::cli::commands::handle_query_command;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results and errors
    env_logger::Builder::from_default_env().init();

    let args = normalize_args(std::env::args());
    debug!("Normalized arguments: {:?}", args);

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => return report_parse_error(err),
    };
    info!("Starting suiteql");

    match handle_query_command(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error: {:#}", err);
            if matches!(err.downcast_ref::<InputError>(), Some(InputError::NoQuery)) {
                println!();
                println!("{}", Cli::command().render_usage());
            }
            ExitCode::FAILURE
        }
    }
}

fn report_parse_error(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let message = err.to_string();
            println!(
                "Error: {}",
                message.trim_start_matches("error: ").trim_end()
            );
            ExitCode::FAILURE
        }
    }
}
