// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use floorplan_viewer::export::export_blocks_to_csv;
use floorplan_viewer::layout::synthesize;
use floorplan_viewer::spec::ChipSpec;
use std::fs;

#[test]
fn test_csv_export_contains_all_blocks() {
    let layout = synthesize(&ChipSpec {
        num_npu_clusters: 2,
        ..ChipSpec::default()
    });

    let temp_file = "/tmp/test_floorplan_blocks.csv";
    export_blocks_to_csv(&layout, temp_file).unwrap();

    let content = fs::read_to_string(temp_file).unwrap();
    let lines: Vec<&str> = content.lines().collect();

    // Header plus one row per block.
    assert_eq!(lines.len(), layout.blocks.len() + 1);
    assert_eq!(lines[0], "Id,Label,Type,X,Y,Width,Height,Area");

    assert!(content.contains("npu_0,NPU Cluster 0,Compute"));
    assert!(content.contains("npu_1,NPU Cluster 1,Compute"));
    assert!(content.contains("pcie_phy,"));

    fs::remove_file(temp_file).unwrap();
}

#[test]
fn test_csv_export_block_area() {
    let layout = synthesize(&ChipSpec::default());

    let temp_file = "/tmp/test_floorplan_area.csv";
    export_blocks_to_csv(&layout, temp_file).unwrap();

    let content = fs::read_to_string(temp_file).unwrap();

    // A 400x400 cluster has an area of 160000 square micrometers.
    let npu_row = content
        .lines()
        .find(|line| line.starts_with("npu_0,"))
        .expect("npu_0 row present");
    assert!(npu_row.ends_with("160000.0"));

    fs::remove_file(temp_file).unwrap();
}
