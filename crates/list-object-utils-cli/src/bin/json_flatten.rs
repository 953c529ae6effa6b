//! `json-flatten`: flatten a JSON document into dotted paths.
//!
//! Usage:
//!   json-flatten [prefix]
//!
//! The document is read from stdin. The optional prefix is prepended to every
//! path as-is.

use list_object_utils_cli::{flatten, init_logging, read_stdin, CliError};

fn run() -> Result<String, CliError> {
    let prefix = std::env::args().nth(1).unwrap_or_default();
    let doc = read_stdin()?;
    flatten(&doc, &prefix)
}

fn main() {
    init_logging();
    match run() {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
