//! `json-equal`: deep equality of two JSON documents.
//!
//! Usage:
//!   json-equal '<a-json>' ['<b-json>']
//!
//! When only one document is given the second is read from stdin. Prints
//! `true` or `false`.

use list_object_utils_cli::{equal, init_logging, read_stdin, CliError};

fn run() -> Result<bool, CliError> {
    let args: Vec<String> = std::env::args().collect();
    let a = args
        .get(1)
        .ok_or_else(|| CliError::Usage("First argument must be a JSON document.".into()))?;
    let b = match args.get(2) {
        Some(b) => b.clone(),
        None => read_stdin()?,
    };
    equal(a, &b)
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
