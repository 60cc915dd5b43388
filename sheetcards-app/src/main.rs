mod cli;
mod config;
mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::sync::Arc;
use tokio::runtime::Runtime;

use cli::commands::{open_table, run_cli};
use cli::opts::{Cli, Command};
use tui::app::TuiApp;

fn main() -> Result<()> {
    // .env first so clap's env fallbacks see it
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    config::init_logging(args.verbose);

    match &args.cmd {
        // TUI drives the runtime with block_on from its own event loop
        Command::Study => {
            let rt = Arc::new(Runtime::new()?);
            let table = rt.block_on(open_table(&args))?;
            let mut app = TuiApp::new(table, rt);
            app.run()
        }
        _ => {
            let rt = Runtime::new()?;
            rt.block_on(run_cli(args))
        }
    }
}
