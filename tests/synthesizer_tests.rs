// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use floorplan_viewer::layout::synthesizer::cluster_grid;
use floorplan_viewer::layout::{
    synthesize, synthesize_with_tuning, BlockKind, Congestion, LayoutTuning,
};
use floorplan_viewer::spec::ChipSpec;

fn spec_with_clusters(n: u32) -> ChipSpec {
    ChipSpec {
        num_npu_clusters: n,
        ..ChipSpec::default()
    }
}

#[test]
fn test_cluster_grid_near_square() {
    for n in 1..=32u32 {
        let (cols, rows) = cluster_grid(n);
        assert!(cols * rows >= n, "grid too small for {n} clusters");
        assert!(
            cols == rows || cols == rows + 1,
            "grid not near-square for {n}: {cols}x{rows}"
        );
    }
}

#[test]
fn test_one_route_per_cluster() {
    for n in [1u32, 2, 3, 4, 7, 9, 16, 32] {
        let layout = synthesize(&spec_with_clusters(n));
        assert_eq!(layout.routes.len(), n as usize);
        let compute = layout
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Compute)
            .count();
        assert_eq!(compute, n as usize);
    }
}

#[test]
fn test_blocks_stay_inside_die() {
    for n in [1u32, 4, 9, 32] {
        let layout = synthesize(&spec_with_clusters(n));
        for block in &layout.blocks {
            assert!(block.x >= 0.0 && block.y >= 0.0, "{} off-die", block.id);
            assert!(
                block.x + block.width <= layout.width,
                "{} overflows die width",
                block.id
            );
            assert!(
                block.y + block.height <= layout.height,
                "{} overflows die height",
                block.id
            );
        }
    }
}

#[test]
fn test_die_strictly_larger_than_core() {
    // IO ring plus spacing margin on every side; the die must exceed the
    // cluster grid extent strictly.
    let layout = synthesize(&spec_with_clusters(4));
    let max_x = layout
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Compute)
        .map(|b| b.x + b.width)
        .fold(0.0f64, f64::max);
    let max_y = layout
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Compute)
        .map(|b| b.y + b.height)
        .fold(0.0f64, f64::max);
    assert!(layout.width > max_x);
    assert!(layout.height > max_y);
}

#[test]
fn test_synthesis_is_deterministic() {
    let spec = ChipSpec {
        num_npu_clusters: 6,
        axi_width: 128,
        ddr_width: 256,
        pcie_gen: "Gen5".to_string(),
        process_node: "7nm".to_string(),
        multi_die_partitioning: true,
    };
    let a = serde_json::to_string(&synthesize(&spec)).unwrap();
    let b = serde_json::to_string(&synthesize(&spec)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_zero_clusters_coerced_to_one() {
    let layout = synthesize(&spec_with_clusters(0));
    let compute: Vec<_> = layout
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Compute)
        .collect();
    assert_eq!(compute.len(), 1);
    assert_eq!(compute[0].id, "npu_0");
    assert_eq!(layout.routes.len(), 1);
}

#[test]
fn test_large_cluster_counts_grow_the_die() {
    // No upper clamp in the synthesizer itself.
    let small = synthesize(&spec_with_clusters(4));
    let large = synthesize(&spec_with_clusters(64));
    assert!(large.width > small.width);
    assert!(large.height > small.height);
    assert_eq!(
        large
            .blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Compute)
            .count(),
        64
    );
}

#[test]
fn test_scenario_four_clusters_two_by_two() {
    let layout = synthesize(&spec_with_clusters(4));

    // cols = rows = 2; cells are 400um with 40um spacing, offset by the
    // 140um core origin (io ring + spacing).
    let npu_0 = layout.block_by_id("npu_0").unwrap();
    let npu_1 = layout.block_by_id("npu_1").unwrap();
    let npu_2 = layout.block_by_id("npu_2").unwrap();
    let npu_3 = layout.block_by_id("npu_3").unwrap();

    assert_eq!((npu_0.x, npu_0.y), (140.0, 140.0));
    assert_eq!((npu_1.x, npu_1.y), (580.0, 140.0));
    assert_eq!((npu_2.x, npu_2.y), (140.0, 580.0));
    assert_eq!((npu_3.x, npu_3.y), (580.0, 580.0));

    assert_eq!(layout.routes.len(), 4);
}

#[test]
fn test_scenario_ddr_256_gives_four_controllers() {
    let spec = ChipSpec {
        ddr_width: 256,
        ..ChipSpec::default()
    };
    let layout = synthesize(&spec);

    let top: Vec<_> = layout
        .blocks
        .iter()
        .filter(|b| b.id.starts_with("ddr_top_"))
        .collect();
    let bottom: Vec<_> = layout
        .blocks
        .iter()
        .filter(|b| b.id.starts_with("ddr_bot_"))
        .collect();

    assert_eq!(top.len(), 2);
    assert_eq!(bottom.len(), 2);
    for block in top.iter().chain(bottom.iter()) {
        assert_eq!(block.kind, BlockKind::Memory);
    }
}

#[test]
fn test_memory_controller_count_clamped() {
    // ddr_width 64 -> scale 0.5 -> ceil(1) -> clamped up to 2.
    let narrow = synthesize(&ChipSpec {
        ddr_width: 64,
        ..ChipSpec::default()
    });
    let mem = narrow
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Memory)
        .count();
    assert_eq!(mem, 2);

    // ddr_width 1024 -> scale 8 -> ceil(16) -> clamped down to 8.
    let wide = synthesize(&ChipSpec {
        ddr_width: 1024,
        ..ChipSpec::default()
    });
    let mem = wide
        .blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Memory)
        .count();
    assert_eq!(mem, 8);
}

#[test]
fn test_scenario_partitioning_lowers_power() {
    let flat = synthesize(&ChipSpec {
        multi_die_partitioning: false,
        ..ChipSpec::default()
    });
    let partitioned = synthesize(&ChipSpec {
        multi_die_partitioning: true,
        ..ChipSpec::default()
    });

    assert!(partitioned.stats.power_w < flat.stats.power_w);
    assert_eq!(partitioned.stats.congestion, Congestion::Low);
    assert_eq!(flat.stats.congestion, Congestion::High);
    // Geometry is independent of the partitioning flag.
    assert_eq!(partitioned.width, flat.width);
    assert_eq!(partitioned.blocks.len(), flat.blocks.len());
}

#[test]
fn test_routes_alternate_rails_and_scale_with_axi() {
    let layout = synthesize(&ChipSpec {
        num_npu_clusters: 4,
        axi_width: 128,
        ..ChipSpec::default()
    });

    for (i, route) in layout.routes.iter().enumerate() {
        assert_eq!(route.id, format!("route_{i}"));
        // Vertical drop to the rail: same x, alternating top/bottom.
        assert_eq!(route.from.x, route.to.x);
        if i % 2 == 0 {
            assert_eq!(route.to.y, 60.0);
        } else {
            assert_eq!(route.to.y, layout.height - 60.0);
        }
        // axi_width / 64 * 2
        assert_eq!(route.width, 4.0);
    }
}

#[test]
fn test_pcie_block_labeled_with_generation() {
    let layout = synthesize(&ChipSpec {
        pcie_gen: "Gen5".to_string(),
        ..ChipSpec::default()
    });
    let pcie = layout.block_by_id("pcie_phy").unwrap();
    assert_eq!(pcie.kind, BlockKind::Io);
    assert_eq!(pcie.label, "PCIe Gen5 PHY");
    assert_eq!(pcie.height, 300.0);
}

#[test]
fn test_tuning_constants_are_configurable() {
    let tuning = LayoutTuning {
        cluster_size: 200.0,
        utilization: 0.7,
        ..LayoutTuning::default()
    };
    let layout = synthesize_with_tuning(&spec_with_clusters(1), &tuning);

    let npu = layout.block_by_id("npu_0").unwrap();
    assert_eq!(npu.width, 200.0);
    assert_eq!(layout.stats.utilization, 0.7);

    // Smaller cells shrink the whole die.
    let default_layout = synthesize(&spec_with_clusters(1));
    assert!(layout.width < default_layout.width);
}

#[test]
fn test_area_matches_die_dimensions() {
    let layout = synthesize(&spec_with_clusters(4));
    let expected = layout.width * layout.height / 1.0e6;
    assert!((layout.stats.area_mm2 - expected).abs() < 1e-9);
    assert_eq!(layout.stats.utilization, 0.85);
}
