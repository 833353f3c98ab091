//! Curation utilities for a labeled ore/biome screenshot dataset
//!
//! This library backs two small offline tools: `orebalance`, which decodes the
//! dataset's filename nomenclature and reports how well ores and biomes are
//! balanced, and `voc2csv`, which flattens Pascal VOC annotation sidecars into
//! a CSV index for a training pipeline.

pub mod config;
pub mod dataset;
pub mod filename;
pub mod io;
pub mod report;
pub mod types;
pub mod voc;

// Re-export commonly used types and functions
pub use config::{AnalyzeArgs, IndexArgs};
pub use dataset::analyze_dataset;
pub use filename::parse_filename;
pub use io::{load_index, update_index, IndexRow};
pub use report::render_report;
pub use types::{ore_display_name, DatasetStats, ImageKind, ParsedFilename, NO_ORE};
pub use voc::{read_and_parse_voc, VocObject};
