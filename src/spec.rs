// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const DEFAULT_NUM_NPU_CLUSTERS: u32 = 1;
pub const DEFAULT_AXI_WIDTH: u32 = 64;
pub const DEFAULT_DDR_WIDTH: u32 = 128;
pub const DEFAULT_PCIE_GEN: &str = "Gen4";
pub const DEFAULT_PROCESS_NODE: &str = "28nm";

fn default_num_npu_clusters() -> u32 {
    DEFAULT_NUM_NPU_CLUSTERS
}

fn default_axi_width() -> u32 {
    DEFAULT_AXI_WIDTH
}

fn default_ddr_width() -> u32 {
    DEFAULT_DDR_WIDTH
}

/// Coerce a JSON value to a positive integer field. Negative, zero,
/// fractional or non-numeric input falls back to the field default so a
/// malformed spec never fails to load.
fn coerce_positive_int(value: &serde_json::Value, default: u32) -> u32 {
    match value.as_f64() {
        Some(v) if v >= 1.0 && v.fract() == 0.0 && v <= u32::MAX as f64 => v as u32,
        _ => default,
    }
}

fn de_num_npu_clusters<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_positive_int(&value, DEFAULT_NUM_NPU_CLUSTERS))
}

fn de_axi_width<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_positive_int(&value, DEFAULT_AXI_WIDTH))
}

fn de_ddr_width<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_positive_int(&value, DEFAULT_DDR_WIDTH))
}

fn default_pcie_gen() -> String {
    DEFAULT_PCIE_GEN.to_string()
}

fn default_process_node() -> String {
    DEFAULT_PROCESS_NODE.to_string()
}

/// Typed chip specification consumed by the layout synthesizer.
///
/// Every field carries a serde default so a partial JSON object
/// deserializes into a fully populated spec. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChipSpec {
    #[serde(
        default = "default_num_npu_clusters",
        deserialize_with = "de_num_npu_clusters"
    )]
    pub num_npu_clusters: u32,
    /// AXI bus width in bits. Drives route thickness.
    #[serde(default = "default_axi_width", deserialize_with = "de_axi_width")]
    pub axi_width: u32,
    /// DDR bus width in bits. Drives memory controller count.
    #[serde(default = "default_ddr_width", deserialize_with = "de_ddr_width")]
    pub ddr_width: u32,
    #[serde(default = "default_pcie_gen")]
    pub pcie_gen: String,
    #[serde(default = "default_process_node")]
    pub process_node: String,
    #[serde(default)]
    pub multi_die_partitioning: bool,
}

impl Default for ChipSpec {
    fn default() -> Self {
        Self {
            num_npu_clusters: DEFAULT_NUM_NPU_CLUSTERS,
            axi_width: DEFAULT_AXI_WIDTH,
            ddr_width: DEFAULT_DDR_WIDTH,
            pcie_gen: DEFAULT_PCIE_GEN.to_string(),
            process_node: DEFAULT_PROCESS_NODE.to_string(),
            multi_die_partitioning: false,
        }
    }
}

impl ChipSpec {
    /// Coerce degenerate field values to the documented minimums so the
    /// synthesizer never sees a zero-size grid or a zero-width bus.
    pub fn normalized(&self) -> ChipSpec {
        let mut spec = self.clone();
        if spec.num_npu_clusters == 0 {
            spec.num_npu_clusters = DEFAULT_NUM_NPU_CLUSTERS;
        }
        if spec.axi_width == 0 {
            spec.axi_width = DEFAULT_AXI_WIDTH;
        }
        if spec.ddr_width == 0 {
            spec.ddr_width = DEFAULT_DDR_WIDTH;
        }
        if spec.pcie_gen.is_empty() {
            spec.pcie_gen = DEFAULT_PCIE_GEN.to_string();
        }
        if spec.process_node.is_empty() {
            spec.process_node = DEFAULT_PROCESS_NODE.to_string();
        }
        spec
    }
}

/// On-disk spec document: the chip spec fields at the top level plus an
/// optional bottleneck annotation produced by an external analysis pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpecFile {
    #[serde(flatten)]
    pub spec: ChipSpec,
    /// Route ids flagged as congested by the external analyzer.
    #[serde(default)]
    pub bottleneck_routes: Vec<String>,
}

pub struct SpecReader;

impl SpecReader {
    pub fn new() -> Self {
        Self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<SpecFile, Box<dyn std::error::Error>> {
        let path_str = path.as_ref().display().to_string();
        log::info!("Loading spec file: {path_str}");

        let content = fs::read_to_string(path)?;
        let file: SpecFile = serde_json::from_str(&content)?;

        log::info!(
            "Spec loaded: {} clusters, AXI {} bits, DDR {} bits, {} bottleneck annotations",
            file.spec.num_npu_clusters,
            file.spec.axi_width,
            file.spec.ddr_width,
            file.bottleneck_routes.len()
        );

        Ok(file)
    }
}

impl Default for SpecReader {
    fn default() -> Self {
        Self::new()
    }
}
