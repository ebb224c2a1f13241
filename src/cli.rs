//! Interactive console menus.
//!
//! A three-level numeric menu: role selection at the top, role-specific
//! actions below it, and a third level for the admin sub-menus. Each leaf
//! action is one blocking prompt/read/mutate/print interaction. The loop
//! terminates only via the explicit Exit option, with a success status.

use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

mod admin;
mod customer;
mod employee;
mod prompt;
mod terminal;

use anyhow::Context;
use clap::ArgAction;
use desk::{Desk, domain::Config};
use prompt::Console;

/// Name of the optional configuration file in the working directory.
const CONFIG_FILE: &str = "desk.toml";

/// Command-line interface for the complaint desk.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Path of the complaint data file (overrides desk.toml)
    #[arg(short, long)]
    file: Option<PathBuf>,
}

impl Cli {
    /// Loads the queue and enters the interactive menu.
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let data_file = self.file.unwrap_or_else(|| load_config().data_file);
        let mut desk = Desk::load(&data_file).with_context(|| {
            format!("failed to load complaint data from {}", data_file.display())
        })?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(stdin.lock(), stdout.lock());
        run_menu(&mut console, &mut desk, &data_file)?;
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

fn load_config() -> Config {
    let path = Path::new(CONFIG_FILE);
    if !path.exists() {
        return Config::default();
    }
    Config::load(path).unwrap_or_else(|error| {
        tracing::warn!("{error}; falling back to defaults");
        Config::default()
    })
}

/// Top-level role selection loop.
fn run_menu<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    desk: &mut Desk,
    data_file: &Path,
) -> io::Result<()> {
    loop {
        console.line("")?;
        console.line("============================================")?;
        console.line("        Complaint Management System")?;
        console.line("============================================")?;
        console.line("")?;
        console.line("1. Customer")?;
        console.line("2. Employee")?;
        console.line("3. Admin")?;
        console.line("0. Exit")?;
        let Some(choice) = console.prompt_number("Option: ")? else {
            return Ok(());
        };
        match choice {
            1 => customer::run(console, desk, data_file)?,
            2 => employee::run(console, desk)?,
            3 => admin::run(console, desk)?,
            0 => {
                console.line("Thank you, goodbye!")?;
                return Ok(());
            }
            _ => console.line("Invalid option.")?,
        }
    }
}

/// Renders a flag the way the menus phrase it.
pub(crate) const fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
