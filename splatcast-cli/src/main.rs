//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = splatcast_cli::run() {
        eprintln!("splatcast: {err}");
        std::process::exit(1);
    }
}
