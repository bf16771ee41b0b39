// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use crate::layout::Layout;

/// Single-valued block selection. Selecting a new block implicitly
/// replaces the previous one; a layout replacement clears it.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, block_id: &str) {
        self.selected = Some(block_id.to_string());
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, block_id: &str) -> bool {
        self.selected.as_deref() == Some(block_id)
    }

    /// Drop a selection whose block no longer exists in `layout`. Keeps
    /// the stale-selection invariant after a re-synthesis.
    pub fn retain_valid(&mut self, layout: &Layout) {
        if let Some(id) = &self.selected {
            if layout.block_by_id(id).is_none() {
                self.selected = None;
            }
        }
    }
}
