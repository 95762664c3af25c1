#![allow(clippy::multiple_crate_versions)]

//! Curator - mood-themed photo slideshow for the terminal.
//!
//! Every invocation runs a CLI subcommand; `curator play` starts the
//! interactive session.

#[tokio::main(flavor = "current_thread")]
async fn main() {
    curator_lib::init_logging();

    if let Err(err) = curator_lib::cli::run().await {
        eprintln!("curator: {err}");
        std::process::exit(1);
    }
}
