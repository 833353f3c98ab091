use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::voc::{read_and_parse_voc, VocObject};

/// One row of the CSV index consumed by the training pipeline.
///
/// Every field is a string: rows are carried through verbatim, including ones
/// written by other tools, and only `id` is ever interpreted (leniently).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexRow {
    pub id: String,
    pub data: String,
    pub path: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub width: String,
    pub height: String,
    pub xmin: String,
    pub ymin: String,
    pub xmax: String,
    pub ymax: String,
    pub meta: String,
}

// One bounding box is identified by where it is, not by its row id
type DedupKey = (String, String, String, String, String, String);

impl IndexRow {
    fn dedup_key(&self) -> DedupKey {
        (
            self.path.clone(),
            self.class_name.clone(),
            self.xmin.clone(),
            self.ymin.clone(),
            self.xmax.clone(),
            self.ymax.clone(),
        )
    }
}

/// Read the existing CSV index. A missing file is an empty index.
pub fn load_index(csv_path: &Path) -> Result<Vec<IndexRow>, Box<dyn Error>> {
    if !csv_path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(csv_path)?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row?);
    }
    Ok(rows)
}

/// Create a progress bar with the given length and label
fn create_progress_bar(len: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(&format!(
                "{{spinner:.green}} [{}] [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] {{pos}}/{{len}} ({{eta}})",
                label
            ))
            .expect("progress template must parse")
            .progress_chars("#>-"),
    );
    pb
}

/// Collect the VOC annotation files directly under `images_dir`, parsed in
/// parallel and returned in sorted path order.
pub fn scan_annotations(images_dir: &Path) -> Result<Vec<(PathBuf, Option<Vec<VocObject>>)>, Box<dyn Error>> {
    let pattern = images_dir.join("*.xml");
    let mut xml_files: Vec<PathBuf> = glob(&pattern.to_string_lossy())?
        .filter_map(|entry| entry.ok())
        .collect();
    xml_files.sort();

    let pb = create_progress_bar(xml_files.len() as u64, "Annotations");
    let annotations: Vec<(PathBuf, Option<Vec<VocObject>>)> = xml_files
        .par_iter()
        .map(|xml_path| {
            let objects = read_and_parse_voc(xml_path);
            pb.inc(1);
            (xml_path.clone(), objects)
        })
        .collect();
    pb.finish_with_message("Annotation scan complete");

    Ok(annotations)
}

/// Fold the VOC annotations under `images_dir` into the CSV index at
/// `csv_path`, returning how many rows were appended.
///
/// Boxes already present (same path, class, and corners) are skipped; new rows
/// continue the id sequence from the highest existing numeric id. The file is
/// only rewritten when at least one row is new.
pub fn update_index(images_dir: &Path, csv_path: &Path) -> Result<usize, Box<dyn Error>> {
    let existing = load_index(csv_path)?;
    let mut seen: HashSet<DedupKey> = existing.iter().map(IndexRow::dedup_key).collect();
    let mut max_id = existing
        .iter()
        .filter_map(|row| row.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0);

    let annotations = scan_annotations(images_dir)?;

    let mut new_rows = Vec::new();
    for (xml_path, objects) in annotations {
        let Some(stem) = xml_path.file_stem() else {
            continue;
        };
        let relative_path = format!("images/{}.png", stem.to_string_lossy());

        for object in objects.unwrap_or_default() {
            let key = (
                relative_path.clone(),
                object.class_name.clone(),
                object.xmin.clone(),
                object.ymin.clone(),
                object.xmax.clone(),
                object.ymax.clone(),
            );
            if seen.contains(&key) {
                continue;
            }

            max_id += 1;
            info!(
                "+ {}: {} bbox=({},{})-({},{})",
                relative_path, object.class_name, object.xmin, object.ymin, object.xmax, object.ymax
            );
            new_rows.push(IndexRow {
                id: max_id.to_string(),
                data: "TRAIN".to_string(),
                path: relative_path.clone(),
                class_name: object.class_name,
                width: object.width,
                height: object.height,
                xmin: object.xmin,
                ymin: object.ymin,
                xmax: object.xmax,
                ymax: object.ymax,
                meta: String::new(),
            });
            seen.insert(key);
        }
    }

    if new_rows.is_empty() {
        return Ok(0);
    }

    let mut writer = csv::Writer::from_path(csv_path)?;
    for row in existing.iter().chain(new_rows.iter()) {
        writer.serialize(row)?;
    }
    writer.flush()?;

    Ok(new_rows.len())
}
