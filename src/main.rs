mod booking;
mod catalog;
mod cli;
mod config;
mod contact;
mod cost;
mod credentials;
mod logging;
mod model;
mod storage;

use std::process;

use clap::Parser;

use catalog::Catalog;
use cli::Cli;
use config::Config;
use storage::Storage;

fn main() {
    logging::init();
    let cli = Cli::parse();

    if let Err(e) = start(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn start(cli: Cli) -> Result<(), String> {
    let config = Config::load().map_err(|e| e.to_string())?;

    let root = config
        .resolve_data_dir(cli.data_dir.as_deref())
        .map_err(|e| e.to_string())?;
    let storage =
        Storage::new(&root).map_err(|e| format!("failed to initialize storage: {e}"))?;
    tracing::debug!(root = %storage.root().display(), "storage ready");

    let catalog = match &config.catalog_file {
        Some(path) => Catalog::from_file(path)
            .map_err(|e| format!("failed to load catalog {}: {e}", path.display()))?,
        None => Catalog::default(),
    };

    cli::run(cli.command, &config, &storage, &catalog)
}
