//! `json-list`: apply an immutable edit to a JSON array.
//!
//! Usage:
//!   json-list swap <i> <j>
//!   json-list remove <i>
//!   json-list push '<item-json>'
//!   json-list set <i> '<item-json>'
//!   json-list unique
//!   json-list sort | sort-desc
//!
//! The array is read from stdin. `unique` prints `true` or `false`; every
//! other operation prints the resulting array.

use list_object_utils_cli::{init_logging, list, read_stdin, CliError, ListOp};

fn run() -> Result<String, CliError> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let op = ListOp::parse(&args)?;
    let doc = read_stdin()?;
    list(&doc, &op)
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
