//! `glossary-rs` binary: reads a glossary text file and writes its HTML pages.

#[cfg(feature = "cli")]
mod cli;

#[cfg(feature = "cli")]
fn main() {
    if let Err(err) = cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("glossary-rs was built without its command line; enable the `cli` feature.");
}
