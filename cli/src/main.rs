mod args;
mod error;
mod images;
mod run;

use std::process;

fn main() {
    let args = args::Args::parse();
    if let Err(e) = run::run(&args) {
        eprintln!("{e}");
        process::exit(1);
    }
}
