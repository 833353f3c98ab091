use indexmap::IndexMap;

use crate::types::{ore_display_name, DatasetStats, NO_ORE};

const BAR_WIDTH: usize = 30;

// Proportional bar, floor-scaled against the column maximum
fn bar(count: usize, max_count: usize) -> String {
    "█".repeat(BAR_WIDTH * count / max_count.max(1))
}

// Entries sorted by descending count. The sort is stable, so ties keep the
// map's insertion (first-encountered) order.
fn sorted_by_count(counts: &IndexMap<String, usize>) -> Vec<(&str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts
        .iter()
        .map(|(key, &count)| (key.as_str(), count))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Render the balance report for one dataset scan.
pub fn render_report(stats: &DatasetStats) -> String {
    let heavy = "=".repeat(60);
    let light = "-".repeat(60);
    let mut out = String::new();

    out.push_str(&format!("{}\nDATASET ANALYSIS\n{}\n", heavy, heavy));

    out.push_str(&format!("\nTotal valid images: {}\n", stats.total()));
    out.push_str(&format!("  - images WITH ore: {}\n", stats.with_ore.len()));
    out.push_str(&format!(
        "  - images WITHOUT ore: {}\n",
        stats.without_ore.len()
    ));

    if !stats.invalid.is_empty() {
        out.push_str(&format!(
            "  - ignored files (invalid name): {}\n",
            stats.invalid.len()
        ));
        for filename in &stats.invalid {
            out.push_str(&format!("      • {}\n", filename));
        }
    }

    // Per-ore table, the synthetic no-ore bucket listed apart
    out.push_str(&format!("\n{}\nBREAKDOWN BY ORE\n{}\n", light, light));

    let mut ore_entries = sorted_by_count(&stats.ore_counts);
    ore_entries.retain(|&(code, _)| code != NO_ORE);
    let max_ore = ore_entries.iter().map(|&(_, c)| c).max().unwrap_or(1);

    out.push_str(&format!(
        "\n{:<6} {:<15} {:<10} {}\n",
        "Code", "Ore", "Count", "Bar"
    ));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for &(code, count) in &ore_entries {
        out.push_str(&format!(
            "{:<6} {:<15} {:<10} {}\n",
            code,
            ore_display_name(code),
            count,
            bar(count, max_ore)
        ));
    }

    let none_count = stats.ore_counts.get(NO_ORE).copied().unwrap_or(0);
    out.push_str(&format!(
        "\n{:<6} {:<15} {:<10}\n",
        "(s)", "(no ore)", none_count
    ));

    out.push_str(&format!("\n{}\nBREAKDOWN BY BIOME\n{}\n", light, light));

    let biome_entries = sorted_by_count(&stats.biome_counts);
    let max_biome = biome_entries.iter().map(|&(_, c)| c).max().unwrap_or(1);

    out.push_str(&format!("\n{:<15} {:<10} {}\n", "Biome", "Count", "Bar"));
    out.push_str(&format!("{}\n", "-".repeat(50)));
    for &(biome, count) in &biome_entries {
        out.push_str(&format!(
            "{:<15} {:<10} {}\n",
            biome,
            count,
            bar(count, max_biome)
        ));
    }

    out.push_str(&format!("\n{}\nDETAIL BY ORE AND BIOME\n{}\n", light, light));

    for &(code, count) in &ore_entries {
        let biomes = stats
            .biomes_per_ore
            .get(code)
            .map(sorted_by_count)
            .unwrap_or_default();
        let detail: Vec<String> = biomes
            .iter()
            .map(|&(biome, biome_count)| format!("{}({})", biome, biome_count))
            .collect();
        out.push_str(&format!(
            "\n{} ({} total):\n  {}\n",
            ore_display_name(code).to_uppercase(),
            count,
            detail.join(", ")
        ));
    }

    out.push_str(&format!("\n{}\nBALANCE RECOMMENDATIONS\n{}\n", heavy, heavy));

    if let Some(&(_, max_count)) = ore_entries.first() {
        out.push_str("\nUnder-represented ores (add more):\n");
        for &(code, count) in &ore_entries {
            // Less than 50% of the best-covered ore
            if (count as f64) < max_count as f64 * 0.5 {
                let needed = max_count - count;
                out.push_str(&format!(
                    "  • {}: {} images (add ~{} to balance)\n",
                    ore_display_name(code),
                    count,
                    needed
                ));
            }
        }
    }

    if let Some(&(_, max_count)) = biome_entries.first() {
        out.push_str("\nUnder-represented biomes:\n");
        for &(biome, count) in &biome_entries {
            // Less than 30% of the best-covered biome
            if (count as f64) < max_count as f64 * 0.3 {
                out.push_str(&format!("  • {}: only {} images\n", biome, count));
            }
        }
    }

    out
}
