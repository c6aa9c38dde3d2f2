//! Query command handler: input → credentials → signed request → rendered output

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::info;
use std::io;

use super::read_query;
use crate::api::{QueryRequest, SuiteQlClient};
use crate::auth::Credentials;
use crate::cli::Cli;
use crate::config::Settings;
use crate::ui::{RenderOptions, render};

/// Run one query end to end and print the rendered result to stdout
pub async fn handle_query_command(args: Cli) -> Result<()> {
    let stdin = io::stdin();
    let stdin_is_terminal = stdin.is_terminal();
    let query_text = read_query(&args.query, stdin.lock(), stdin_is_terminal)?;

    let request = QueryRequest::new(&query_text, args.query.limit, args.query.offset)?;
    info!(
        "Prepared query ({} chars, limit {:?}, offset {:?})",
        request.query.len(),
        request.limit,
        request.offset
    );

    let settings = Settings::load(args.config.as_deref())
        .context("failed to initialize client")?
        .with_timeout_secs(args.timeout);

    let credentials = match &args.env_file {
        Some(path) => Credentials::from_env_file(path),
        None => Credentials::from_env(),
    }
    .context("failed to initialize client")?;

    let client =
        SuiteQlClient::new(credentials, &settings).context("failed to initialize client")?;

    if args.query.no_color {
        colored::control::set_override(false);
    }
    let options = RenderOptions {
        color: !args.query.no_color,
        compact: args.query.compact,
        ..RenderOptions::default()
    };

    let output = execute_and_render(&client, &request, &options).await?;
    println!("{}", output);

    info!("Query executed successfully");
    Ok(())
}

/// Execute a prepared request and render the response document
pub async fn execute_and_render(
    client: &SuiteQlClient,
    request: &QueryRequest,
    options: &RenderOptions,
) -> Result<String> {
    let document = client
        .execute(request)
        .await
        .context("failed to execute query")?;

    Ok(render(&document, options))
}
