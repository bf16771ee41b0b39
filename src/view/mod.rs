// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

pub mod layers;
pub mod metrics;
pub mod selection;
pub mod viewport;

pub use layers::{visible_blocks, LayerVisibility};
pub use metrics::{MetricsDelta, StatsHistory};
pub use selection::SelectionController;
pub use viewport::ViewState;
