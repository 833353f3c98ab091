use regex::Regex;
use std::sync::OnceLock;

use crate::types::{ore_name_table, ImageKind, ParsedFilename};

// Nomenclature: {index}_{a<codes>|s}_{biome}.{ext}, with '_' or '-' as
// separator and an optional separator between the marker and the ore codes.
static FILENAME_PATTERN: OnceLock<Regex> = OnceLock::new();

fn filename_pattern() -> &'static Regex {
    FILENAME_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^(\d+)[_-](a|s)[_-]?([a-z]*)[_-]([a-z]+)\.(png|jpeg|jpg)$")
            .expect("filename pattern must compile")
    })
}

/// Decode a dataset filename, or return `None` when it does not follow the
/// nomenclature (annotation sidecars, stray assets, hand-named files).
///
/// Matching is case-insensitive; the decoded marker, ore codes, and biome are
/// lowercased. Ore letters not present in the code table are silently dropped.
/// When the marker is `s` (no ore), any ore-codes segment is ignored entirely.
pub fn parse_filename(filename: &str) -> Option<ParsedFilename> {
    let caps = filename_pattern().captures(filename)?;

    let index: u64 = caps[1].parse().ok()?;
    let kind = match caps[2].to_ascii_lowercase().as_str() {
        "s" => ImageKind::WithoutOre,
        _ => ImageKind::WithOre,
    };
    let biome = caps[4].to_ascii_lowercase();

    let mut ore_codes = Vec::new();
    if kind == ImageKind::WithOre {
        for c in caps[3].chars() {
            let code = c.to_ascii_lowercase();
            if ore_name_table().contains_key(&code) {
                ore_codes.push(code);
            }
        }
    }

    Some(ParsedFilename {
        index,
        kind,
        ore_codes,
        biome,
        filename: filename.to_string(),
    })
}
