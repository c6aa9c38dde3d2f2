pub mod query;

pub use query::{QueryCommands, handle_query_command};
