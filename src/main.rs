//! Console complaint management tool.
//!
//! Running the binary enters the interactive three-level menu; see
//! `cdesk --help` for flags.

mod cli;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
