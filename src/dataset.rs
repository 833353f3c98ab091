use std::fs;
use std::io;
use std::path::Path;

use crate::filename::parse_filename;
use crate::types::{DatasetStats, ImageKind, NO_ORE};

/// Scan `images_dir` (non-recursive) and accumulate per-ore and per-biome
/// counts.
///
/// Hidden entries and `.xml` annotation sidecars are skipped outright; every
/// other entry either parses into the counters or lands in the invalid list.
/// Only a missing or unreadable directory is an error.
pub fn analyze_dataset(images_dir: &Path) -> io::Result<DatasetStats> {
    let mut entries: Vec<String> = fs::read_dir(images_dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .collect();
    // Scan in name order so repeated runs report identically
    entries.sort();

    let mut stats = DatasetStats::new();

    for filename in entries {
        if filename.starts_with('.') {
            continue;
        }
        if Path::new(&filename)
            .extension()
            .is_some_and(|ext| ext == "xml")
        {
            continue;
        }

        let Some(parsed) = parse_filename(&filename) else {
            stats.invalid.push(filename);
            continue;
        };

        let biome = parsed.biome.clone();
        *stats.biome_counts.entry(biome.clone()).or_insert(0) += 1;

        match parsed.kind {
            ImageKind::WithoutOre => {
                *stats.ore_counts.entry(NO_ORE.to_string()).or_insert(0) += 1;
                *stats
                    .ores_per_biome
                    .entry(biome)
                    .or_default()
                    .entry(NO_ORE.to_string())
                    .or_insert(0) += 1;
                stats.without_ore.push(parsed);
            }
            ImageKind::WithOre => {
                // A code repeated in one filename counts once per occurrence
                for code in &parsed.ore_codes {
                    let key = code.to_string();
                    *stats.ore_counts.entry(key.clone()).or_insert(0) += 1;
                    *stats
                        .ores_per_biome
                        .entry(biome.clone())
                        .or_default()
                        .entry(key.clone())
                        .or_insert(0) += 1;
                    *stats
                        .biomes_per_ore
                        .entry(key)
                        .or_default()
                        .entry(biome.clone())
                        .or_insert(0) += 1;
                }
                stats.with_ore.push(parsed);
            }
        }
    }

    Ok(stats)
}
