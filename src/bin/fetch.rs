//! Download the published roms.json and merge it into the local catalog.

use clap::Parser;
use rom_catalog::{app, Config, RemoteDocumentSource};

/// Update roms.json from the catalog published in the ROM collection repository
#[derive(Parser, Debug)]
#[command(name = "rom-catalog-fetch")]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    app::init_logging();
    let _args = Args::parse();
    let config = Config::from_env();

    log::info!("ROM Collection JSON Downloader");

    let source = RemoteDocumentSource::new(config.document_url);
    app::finish(app::run(&source, &config.output));
}
