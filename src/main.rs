//! NetLab - an interactive TUI for learning TCP/IP and network scanning
//!
//! This is the binary entry point. All logic lives in the library crates.

use clap::Parser;
use netlab_app::state::Page;
use netlab_core::prelude::*;

/// NetLab - an interactive TUI for learning TCP/IP and network scanning
#[derive(Parser, Debug)]
#[command(name = "netlab")]
#[command(about = "An interactive TUI for learning TCP/IP and network scanning", long_about = None)]
struct Args {
    /// Page to open at startup (handshake, scan, quiz, calculator, charts, campus)
    #[arg(long, value_name = "PAGE")]
    page: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Resolve the start page before touching the terminal so a typo
    // produces a plain error message instead of a broken TUI session.
    let start_page = match args.page {
        Some(name) => match Page::from_name(&name) {
            Some(page) => Some(page),
            None => {
                eprintln!("Unknown page: {name}");
                eprintln!();
                eprintln!("Valid pages:");
                for page in Page::ALL {
                    eprintln!("  {}", page.name());
                }
                std::process::exit(2);
            }
        },
        None => None,
    };

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    netlab_core::logging::init()?;

    if let Some(page) = start_page {
        info!("Start page: {}", page.name());
    }

    let result = netlab_tui::run(start_page).await;

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("NetLab exiting");
    result
}
