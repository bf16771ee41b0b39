// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    Compute,
    Memory,
    Io,
    Other,
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Compute => write!(f, "Compute"),
            BlockKind::Memory => write!(f, "Memory"),
            BlockKind::Io => write!(f, "IO"),
            BlockKind::Other => write!(f, "Other"),
        }
    }
}

/// A placed functional block. Coordinates and sizes are in micrometers,
/// relative to the die origin (top-left).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub label: String,
    pub kind: BlockKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Ordered key/value pairs shown verbatim by the inspector.
    pub stats: Vec<(String, String)>,
}

impl Block {
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A virtual interconnect from a compute cluster to a memory rail.
/// Drawn as an axis-aligned three-segment polyline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    pub id: String,
    pub from: Point,
    pub to: Point,
    pub width: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Congestion {
    Low,
    High,
}

impl fmt::Display for Congestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Congestion::Low => write!(f, "Low"),
            Congestion::High => write!(f, "High"),
        }
    }
}

/// Derived die-level metrics. Power and congestion come from the
/// partitioning heuristic, not from a physical model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutStats {
    pub area_mm2: f64,
    pub utilization: f64,
    pub power_w: f64,
    pub congestion: Congestion,
}

/// A synthesized floorplan. Produced fresh on every spec change and
/// never mutated in place; viewers hold it immutably.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub width: f64,
    pub height: f64,
    pub blocks: Vec<Block>,
    pub routes: Vec<Route>,
    pub stats: LayoutStats,
}

impl Layout {
    pub fn block_by_id(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

pub mod synthesizer;

pub use synthesizer::{synthesize, synthesize_with_tuning, LayoutTuning};
