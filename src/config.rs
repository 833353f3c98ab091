use clap::Parser;

/// Command-line arguments for the dataset balance analyzer.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct AnalyzeArgs {
    /// Directory containing the labeled screenshot images
    #[arg(short = 'd', long = "images_dir", default_value = "dataset/images")]
    pub images_dir: String,
}

/// Command-line arguments for the Pascal VOC to CSV indexer.
#[derive(Parser, Debug, Clone)]
#[command(version, long_about = None)]
pub struct IndexArgs {
    /// Directory containing the images and their VOC annotation files
    #[arg(short = 'd', long = "images_dir", default_value = "dataset/images")]
    pub images_dir: String,

    /// Path of the CSV index to create or extend
    #[arg(long = "csv", default_value = "dataset/index.csv")]
    pub csv_path: String,
}
