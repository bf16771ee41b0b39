// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use crate::layout::{Block, BlockKind, Layout};

/// Per-layer visibility flags. Independent of any particular layout and
/// persists across layout changes.
///
/// `grid` and `routes` gate the grid overlay / ruler and the route
/// drawing respectively; the remaining flags filter blocks by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerVisibility {
    pub grid: bool,
    pub routes: bool,
    pub compute: bool,
    pub memory: bool,
    pub io: bool,
}

impl Default for LayerVisibility {
    fn default() -> Self {
        Self {
            grid: true,
            routes: true,
            compute: true,
            memory: true,
            io: true,
        }
    }
}

impl LayerVisibility {
    pub fn shows(&self, kind: BlockKind) -> bool {
        match kind {
            BlockKind::Compute => self.compute,
            BlockKind::Memory => self.memory,
            BlockKind::Io => self.io,
            BlockKind::Other => true,
        }
    }
}

/// Pure filter over a layout's blocks. Never mutates the layout.
pub fn visible_blocks<'a>(layout: &'a Layout, layers: &LayerVisibility) -> Vec<&'a Block> {
    layout
        .blocks
        .iter()
        .filter(|b| layers.shows(b.kind))
        .collect()
}
