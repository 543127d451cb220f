use std::process::exit;

use contact_book::cli;

fn main() {
    if let Err(e) = cli::run_app() {
        eprintln!("{}", e);
        exit(1);
    }
}
