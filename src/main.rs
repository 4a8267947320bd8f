use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use trove::core::config::{load_config, resolve};
use trove::tui;

#[derive(Parser)]
#[command(name = "trove", about = "Treasure Hunter: explore countries and hunt hidden gems")]
struct Args {
    /// Country to select on startup (skips the manual search)
    #[arg(long)]
    country: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to trove.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    if let Ok(log_file) = File::create("trove.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            std::process::exit(2);
        }
    };
    let resolved = resolve(&config, args.country.as_deref());

    log::info!("Trove starting up");

    tui::run(resolved)
}
