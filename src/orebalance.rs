use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use orebalance::{analyze_dataset, render_report, AnalyzeArgs};

fn main() {
    // Initialize the logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = AnalyzeArgs::parse();

    let images_dir = PathBuf::from(&args.images_dir);
    if !images_dir.exists() {
        error!(
            "The specified images_dir does not exist: {}",
            args.images_dir
        );
        return;
    }

    info!("Analyzing dataset in {}...", images_dir.display());

    match analyze_dataset(&images_dir) {
        Ok(stats) => print!("{}", render_report(&stats)),
        Err(e) => error!("Failed to scan the dataset directory: {}", e),
    }
}
