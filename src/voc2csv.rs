use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use orebalance::{update_index, IndexArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = IndexArgs::parse();

    let images_dir = PathBuf::from(&args.images_dir);
    if !images_dir.exists() {
        error!(
            "The specified images_dir does not exist: {}",
            args.images_dir
        );
        return;
    }

    info!("Indexing VOC annotations from {}...", images_dir.display());

    let csv_path = PathBuf::from(&args.csv_path);
    match update_index(&images_dir, &csv_path) {
        Ok(0) => info!("No new entries to add"),
        Ok(added) => info!("{} new row(s) appended to {}", added, csv_path.display()),
        Err(e) => error!("Failed to update the CSV index: {}", e),
    }
}
