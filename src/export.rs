// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use csv::Writer;
use serde::Serialize;
use std::fs::File;

use crate::layout::{Block, Layout};

#[derive(Debug, Serialize)]
pub struct BlockCsvRecord {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Label")]
    pub label: String,
    #[serde(rename = "Type")]
    pub kind: String,
    #[serde(rename = "X")]
    pub x: f64,
    #[serde(rename = "Y")]
    pub y: f64,
    #[serde(rename = "Width")]
    pub width: f64,
    #[serde(rename = "Height")]
    pub height: f64,
    #[serde(rename = "Area")]
    pub area: f64,
}

/// Convert a placed block to a CSV record. Area is in square micrometers.
fn block_to_csv_record(block: &Block) -> BlockCsvRecord {
    BlockCsvRecord {
        id: block.id.clone(),
        label: block.label.clone(),
        kind: block.kind.to_string(),
        x: block.x,
        y: block.y,
        width: block.width,
        height: block.height,
        area: block.width * block.height,
    }
}

/// Export the synthesized block list to a CSV file.
pub fn export_blocks_to_csv(
    layout: &Layout,
    file_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(file_path)?;
    let mut writer = Writer::from_writer(file);

    for block in &layout.blocks {
        let record = block_to_csv_record(block);
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}
