//! Argument parsing through request construction, without the network

use clap::Parser;
use std::io::{Cursor, Write};
use suiteql_cli::api::QueryRequest;
use suiteql_cli::cli::commands::query::{InputError, read_query};
use suiteql_cli::cli::{Cli, normalize_args};

const BASE: &str = "https://tstdrv1.suitetalk.api.netsuite.com";

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(normalize_args(args.iter().copied())).unwrap()
}

fn build(cli: &Cli, stdin: &str, stdin_is_terminal: bool) -> anyhow::Result<QueryRequest> {
    let text = read_query(&cli.query, Cursor::new(stdin.as_bytes()), stdin_is_terminal)?;
    Ok(QueryRequest::new(text, cli.query.limit, cli.query.offset)?)
}

#[test]
fn test_query_flag_with_pagination() {
    let cli = parse(&["suiteql", "-query", "SELECT id FROM customer", "-limit", "25", "-offset", "50"]);
    let request = build(&cli, "", true).unwrap();
    let url = request.url(BASE).unwrap();

    assert_eq!(url.path(), "/services/rest/query/v1/suiteql");
    assert_eq!(url.query(), Some("limit=25&offset=50"));
}

#[test]
fn test_zero_limit_and_offset_dropped() {
    let cli = parse(&["suiteql", "-query", "SELECT 1", "-limit", "0", "-offset", "0"]);
    let url = build(&cli, "", true).unwrap().url(BASE).unwrap();

    assert_eq!(url.query(), None);
}

#[test]
fn test_file_used_exclusively_over_query() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "  SELECT id FROM transaction  ").unwrap();
    let path = file.path().to_str().unwrap();

    let cli = parse(&["suiteql", "-query", "SELECT id FROM customer", "-file", path]);
    let request = build(&cli, "SELECT id FROM vendor", false).unwrap();

    assert_eq!(request.query, "SELECT id FROM transaction");
}

#[test]
fn test_piped_stdin_trimmed() {
    let cli = parse(&["suiteql", "-limit", "3"]);
    let request = build(&cli, "\n   SELECT id FROM item\n\n", false).unwrap();

    assert_eq!(request.query, "SELECT id FROM item");
    assert_eq!(request.limit, Some(3));
    assert_eq!(request.body().unwrap(), r#"{"q":"SELECT id FROM item"}"#);
}

#[test]
fn test_whitespace_only_stdin_is_empty_query() {
    let cli = parse(&["suiteql"]);
    let err = build(&cli, " \n\t ", false).unwrap_err();

    assert_eq!(err.to_string(), "Empty query provided");
}

#[test]
fn test_no_source_on_terminal() {
    let cli = parse(&["suiteql"]);
    let err = build(&cli, "", true).unwrap_err();

    assert!(matches!(err.downcast_ref::<InputError>(), Some(InputError::NoQuery)));
}
