//! Scan a local ROM directory and merge the result into the catalog.

use clap::Parser;
use rom_catalog::{app, Config, LocalScanSource};
use std::path::PathBuf;

/// Build roms.json from a directory of system folders containing ROM files
#[derive(Parser, Debug)]
#[command(name = "rom-catalog-scan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Root directory holding one folder per system
    #[arg(default_value = ".")]
    root: PathBuf,
}

fn main() {
    app::init_logging();
    let args = Args::parse();
    let config = Config::from_env();

    log::info!("ROM Collection Directory Scanner");

    let source = LocalScanSource::new(args.root);
    app::finish(app::run(&source, &config.output));
}
