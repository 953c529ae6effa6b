//! `json-diff`: print what changed from a baseline document to a target.
//!
//! Usage:
//!   json-diff '<baseline-json>'
//!
//! The target document is read from stdin. An array baseline is compared as
//! a sequence; anything else as a mapping. Removed mapping keys are not
//! reported; an index missing from a shorter array is reported as `null`.

use list_object_utils_cli::{diff, init_logging, read_stdin, CliError};

fn run() -> Result<String, CliError> {
    let baseline = std::env::args()
        .nth(1)
        .ok_or_else(|| CliError::Usage("First argument must be the baseline JSON document.".into()))?;
    let target = read_stdin()?;
    diff(&baseline, &target)
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
