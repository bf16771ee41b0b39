//! Floorplan Viewer Library
//!
//! This library synthesizes a chip floorplan from a typed specification
//! and provides the viewport, layer, selection and metrics state used by
//! the interactive viewer.

pub mod export;
pub mod layout;
pub mod spec;
pub mod view;

// Re-export commonly used types
pub use layout::{synthesize, Block, BlockKind, Congestion, Layout, LayoutStats, Point, Route};
pub use spec::{ChipSpec, SpecFile, SpecReader};
pub use view::{
    visible_blocks, LayerVisibility, MetricsDelta, SelectionController, StatsHistory, ViewState,
};
