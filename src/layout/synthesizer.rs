// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use crate::spec::ChipSpec;

use super::{Block, BlockKind, Congestion, Layout, LayoutStats, Point, Route};

/// Geometry and heuristic constants for the synthesizer.
///
/// The values are illustrative placeholders rather than physically
/// derived, so they are kept configurable. The default set matches the
/// reference floorplan dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutTuning {
    /// NPU cluster cell size in micrometers (square cells).
    pub cluster_size: f64,
    /// IO ring thickness around the core.
    pub io_ring: f64,
    /// Spacing between cluster cells, and core margin.
    pub spacing: f64,
    /// Horizontal gap carved out of each memory controller slot.
    pub mem_gutter: f64,
    pub mem_height: f64,
    pub io_width: f64,
    pub io_height: f64,
    /// Distance of the memory routing rails from the die edge.
    pub rail_inset: f64,
    pub utilization: f64,
    pub power_partitioned_w: f64,
    pub power_flat_w: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            cluster_size: 400.0,
            io_ring: 100.0,
            spacing: 40.0,
            mem_gutter: 20.0,
            mem_height: 60.0,
            io_width: 60.0,
            io_height: 300.0,
            rail_inset: 60.0,
            utilization: 0.85,
            power_partitioned_w: 0.62,
            power_flat_w: 1.2,
        }
    }
}

/// Near-square grid for `n` cells: `cols = ceil(sqrt(n))`,
/// `rows = ceil(n / cols)`. Guarantees `cols * rows >= n` and
/// `cols - rows` in {0, 1}.
pub fn cluster_grid(n: u32) -> (u32, u32) {
    let n = n.max(1);
    let cols = (n as f64).sqrt().ceil() as u32;
    let rows = n.div_ceil(cols);
    (cols, rows)
}

/// Synthesize a floorplan from a chip spec with the default tuning.
///
/// Total, deterministic and side-effect free: the same spec always
/// yields a structurally identical layout.
pub fn synthesize(spec: &ChipSpec) -> Layout {
    synthesize_with_tuning(spec, &LayoutTuning::default())
}

pub fn synthesize_with_tuning(spec: &ChipSpec, tuning: &LayoutTuning) -> Layout {
    let spec = spec.normalized();

    let axi_scale = spec.axi_width as f64 / 64.0;
    let ddr_scale = spec.ddr_width as f64 / 128.0;

    // Cluster grid, square-ish aspect ratio.
    let n = spec.num_npu_clusters;
    let (cols, rows) = cluster_grid(n);

    let core_origin = tuning.io_ring + tuning.spacing;
    let cell = tuning.cluster_size;

    let mut blocks = Vec::new();

    for i in 0..n {
        let row = i / cols;
        let col = i % cols;
        blocks.push(Block {
            id: format!("npu_{i}"),
            label: format!("NPU Cluster {i}"),
            kind: BlockKind::Compute,
            x: core_origin + col as f64 * (cell + tuning.spacing),
            y: core_origin + row as f64 * (cell + tuning.spacing),
            width: cell,
            height: cell,
            stats: vec![
                ("tops".to_string(), "100".to_string()),
                ("power".to_string(), "2.5 W".to_string()),
            ],
        });
    }

    // Core bounding box: grid plus one spacing unit of margin per side.
    let core_width = cols as f64 * cell + (cols - 1) as f64 * tuning.spacing + tuning.spacing * 2.0;
    let core_height = rows as f64 * cell + (rows - 1) as f64 * tuning.spacing + tuning.spacing * 2.0;

    // Memory controllers: total count from the DDR width, split evenly
    // across the top and bottom edges (top edge takes the odd one).
    let mem_count = ((ddr_scale * 2.0).ceil() as u32).clamp(2, 8);
    let top_count = mem_count.div_ceil(2);
    let bot_count = mem_count / 2;
    let mem_width = core_width / mem_count as f64 - tuning.mem_gutter;
    let bot_y = core_height + tuning.io_ring + tuning.spacing + 20.0;

    for i in 0..top_count {
        blocks.push(Block {
            id: format!("ddr_top_{i}"),
            label: format!("DDR Ctrl {i}"),
            kind: BlockKind::Memory,
            x: core_origin + i as f64 * (mem_width + tuning.mem_gutter),
            y: 10.0,
            width: mem_width,
            height: tuning.mem_height,
            stats: vec![("bandwidth".to_string(), "25.6 GB/s".to_string())],
        });
    }
    for i in 0..bot_count {
        blocks.push(Block {
            id: format!("ddr_bot_{i}"),
            label: format!("DDR Ctrl {}", top_count + i),
            kind: BlockKind::Memory,
            x: core_origin + i as f64 * (mem_width + tuning.mem_gutter),
            y: bot_y,
            width: mem_width,
            height: tuning.mem_height,
            stats: vec![("bandwidth".to_string(), "25.6 GB/s".to_string())],
        });
    }

    // PCIe PHY on the left edge, vertically centered on the core.
    blocks.push(Block {
        id: "pcie_phy".to_string(),
        label: format!("PCIe {} PHY", spec.pcie_gen),
        kind: BlockKind::Io,
        x: 10.0,
        y: core_height / 2.0 + tuning.io_ring - tuning.io_height / 2.0,
        width: tuning.io_width,
        height: tuning.io_height,
        stats: vec![("lanes".to_string(), "16".to_string())],
    });

    // Die bounds: uniform IO ring plus spacing margin on all sides.
    let die_width = core_width + tuning.io_ring * 2.0 + tuning.spacing * 2.0;
    let die_height = core_height + tuning.io_ring * 2.0 + tuning.spacing * 2.0;

    // One route per cluster to the nearest memory rail, alternating
    // top/bottom by cluster index parity.
    let mut routes = Vec::new();
    for (i, cluster) in blocks
        .iter()
        .filter(|b| b.kind == BlockKind::Compute)
        .enumerate()
    {
        let target_y = if i % 2 == 0 {
            tuning.rail_inset
        } else {
            die_height - tuning.rail_inset
        };
        let center = cluster.center();
        routes.push(Route {
            id: format!("route_{i}"),
            from: center,
            to: Point {
                x: center.x,
                y: target_y,
            },
            width: axi_scale * 2.0,
            color: "#06b6d4".to_string(),
        });
    }

    let stats = LayoutStats {
        area_mm2: die_width * die_height / 1.0e6,
        utilization: tuning.utilization,
        power_w: if spec.multi_die_partitioning {
            tuning.power_partitioned_w
        } else {
            tuning.power_flat_w
        },
        congestion: if spec.multi_die_partitioning {
            Congestion::Low
        } else {
            Congestion::High
        },
    };

    Layout {
        width: die_width,
        height: die_height,
        blocks,
        routes,
        stats,
    }
}
