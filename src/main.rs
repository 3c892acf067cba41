//! domgeom - Command-line tool for DOMMatrixInit records and CSS transform lists

use std::process::ExitCode;

use domgeom::cli;

fn main() -> ExitCode {
    cli::run()
}
