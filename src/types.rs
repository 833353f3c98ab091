use indexmap::IndexMap;
use std::collections::HashMap;
use std::sync::OnceLock;

// Ore codes as they appear in filenames, with their display names
pub const ORE_CODES: &[(char, &str)] = &[
    ('c', "charbon"),
    ('f', "fer"),
    ('u', "cuivre"),
    ('o', "or"),
    ('d', "diamant"),
    ('e', "émeraude"),
    ('l', "lapis"),
    ('r', "redstone"),
    ('q', "quartz"),
    ('a', "ancient debris"),
    ('n', "or nether"),
];

/// Counter key for images that carry no ore at all.
pub const NO_ORE: &str = "(none)";

// Precomputed lookup map built from ORE_CODES
pub static ORE_NAME_TABLE: OnceLock<HashMap<char, &'static str>> = OnceLock::new();

/// Get the ore code lookup table
pub fn ore_name_table() -> &'static HashMap<char, &'static str> {
    ORE_NAME_TABLE.get_or_init(|| ORE_CODES.iter().copied().collect())
}

/// Resolve an ore code to its display name. Codes outside the table keep the
/// code itself as their name rather than failing.
pub fn ore_display_name(code: &str) -> &str {
    code.chars()
        .next()
        .and_then(|c| ore_name_table().get(&c).copied())
        .unwrap_or(code)
}

// Whether a filename was marked as containing ore ('a') or not ('s')
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    WithOre,
    WithoutOre,
}

/// Decoded form of one dataset filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    pub index: u64,
    pub kind: ImageKind,
    /// Recognized ore codes, in filename order. Empty for `WithoutOre`.
    pub ore_codes: Vec<char>,
    pub biome: String,
    pub filename: String,
}

/// Accumulated counts for one dataset scan.
///
/// Maps are insertion-ordered so that later sort-by-count steps break ties in
/// first-encountered order.
#[derive(Debug, Default, Clone)]
pub struct DatasetStats {
    /// Count per ore code, plus the [`NO_ORE`] bucket for ore-free images.
    pub ore_counts: IndexMap<String, usize>,
    pub biome_counts: IndexMap<String, usize>,
    /// biome -> ore code -> count (includes the [`NO_ORE`] bucket)
    pub ores_per_biome: IndexMap<String, IndexMap<String, usize>>,
    /// ore code -> biome -> count
    pub biomes_per_ore: IndexMap<String, IndexMap<String, usize>>,
    pub with_ore: Vec<ParsedFilename>,
    pub without_ore: Vec<ParsedFilename>,
    /// Filenames that did not match the nomenclature, in scan order.
    pub invalid: Vec<String>,
}

impl DatasetStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of valid images seen, invalid entries excluded.
    pub fn total(&self) -> usize {
        self.with_ore.len() + self.without_ore.len()
    }
}
