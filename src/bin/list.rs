//! Walk the collection through the directory listing API and merge the result.

use clap::Parser;
use rom_catalog::{app, Config, RemoteListingSource};

/// Build roms.json by listing the ROM collection repository through its API
#[derive(Parser, Debug)]
#[command(name = "rom-catalog-list")]
#[command(version, about, long_about = None)]
struct Args {}

fn main() {
    app::init_logging();
    let _args = Args::parse();
    let config = Config::from_env();

    log::info!("ROM Collection Repository Lister");
    if config.api_token.is_none() {
        log::debug!("No API token set; unauthenticated requests are rate limited");
    }

    let source = RemoteListingSource::new(config.api_url, config.api_token);
    app::finish(app::run(&source, &config.output));
}
