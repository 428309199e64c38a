//! Bench Bot CLI entry point.

fn main() {
    if let Err(e) = benchbot_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
