// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use floorplan_viewer::layout::synthesize;
use floorplan_viewer::spec::ChipSpec;
use floorplan_viewer::view::selection::SelectionController;

fn spec_with_clusters(n: u32) -> ChipSpec {
    ChipSpec {
        num_npu_clusters: n,
        ..ChipSpec::default()
    }
}

#[test]
fn test_selection_is_single_valued() {
    let mut selection = SelectionController::new();
    assert!(selection.selected().is_none());

    selection.select("npu_0");
    assert_eq!(selection.selected(), Some("npu_0"));
    assert!(selection.is_selected("npu_0"));

    // Selecting another block implicitly clears the previous one.
    selection.select("pcie_phy");
    assert_eq!(selection.selected(), Some("pcie_phy"));
    assert!(!selection.is_selected("npu_0"));

    selection.clear();
    assert!(selection.selected().is_none());
}

#[test]
fn test_stale_selection_cleared_after_resynthesis() {
    // Select the last cluster of a 4-cluster layout, then shrink to a
    // single cluster; npu_3 no longer exists and must not dangle.
    let large = synthesize(&spec_with_clusters(4));
    let mut selection = SelectionController::new();
    selection.select("npu_3");
    selection.retain_valid(&large);
    assert_eq!(selection.selected(), Some("npu_3"));

    let small = synthesize(&spec_with_clusters(1));
    selection.retain_valid(&small);
    assert!(selection.selected().is_none());
}

#[test]
fn test_surviving_selection_kept() {
    let mut selection = SelectionController::new();
    selection.select("npu_0");

    // npu_0 exists in every layout; a re-synthesis that keeps the block
    // does not invalidate the reference.
    let layout = synthesize(&spec_with_clusters(2));
    selection.retain_valid(&layout);
    assert_eq!(selection.selected(), Some("npu_0"));
}
