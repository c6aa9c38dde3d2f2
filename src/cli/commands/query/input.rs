//! Query text sources, in precedence order: file, inline flag, piped stdin

use log::debug;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::QueryCommands;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("No query provided. Use -query, -file, or pipe input via stdin")]
    NoQuery,

    #[error("failed to open file '{}': {source}", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read file '{}': {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from stdin: {0}")]
    Stdin(#[source] io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuerySource<'a> {
    File(&'a Path),
    Inline(&'a str),
    Stdin,
}

impl QuerySource<'_> {
    /// All configured sources, highest precedence first.
    ///
    /// Empty flag values count as not given; stdin only counts when it is
    /// not an interactive terminal.
    pub fn candidates(args: &QueryCommands, stdin_is_terminal: bool) -> Vec<QuerySource<'_>> {
        [
            args.file
                .as_deref()
                .filter(|path| !path.as_os_str().is_empty())
                .map(QuerySource::File),
            args.query
                .as_deref()
                .filter(|query| !query.is_empty())
                .map(QuerySource::Inline),
            (!stdin_is_terminal).then_some(QuerySource::Stdin),
        ]
        .into_iter()
        .flatten()
        .collect()
    }

    fn read<R: Read>(&self, mut stdin: R) -> Result<String, InputError> {
        match self {
            QuerySource::File(path) => {
                let mut file = File::open(path).map_err(|source| InputError::OpenFile {
                    path: path.to_path_buf(),
                    source,
                })?;
                let mut content = String::new();
                file.read_to_string(&mut content)
                    .map_err(|source| InputError::ReadFile {
                        path: path.to_path_buf(),
                        source,
                    })?;
                debug!("Read {} bytes from {}", content.len(), path.display());
                Ok(content)
            }
            QuerySource::Inline(query) => Ok(query.to_string()),
            QuerySource::Stdin => {
                let mut content = String::new();
                stdin
                    .read_to_string(&mut content)
                    .map_err(InputError::Stdin)?;
                debug!("Read {} bytes from stdin", content.len());
                Ok(content)
            }
        }
    }
}

/// Read the query text from the highest-precedence source, trimmed.
///
/// Only that one source is consulted; an empty result is left for the
/// request builder to reject.
pub fn read_query<R: Read>(
    args: &QueryCommands,
    stdin: R,
    stdin_is_terminal: bool,
) -> Result<String, InputError> {
    let source = QuerySource::candidates(args, stdin_is_terminal)
        .into_iter()
        .next()
        .ok_or(InputError::NoQuery)?;
    debug!("Reading query from {:?}", source);

    Ok(source.read(stdin)?.trim().to_string())
}
