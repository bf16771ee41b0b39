// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use crate::layout::LayoutStats;

/// Comparison of the current stats against the previous snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricsDelta {
    /// `(1 - current.power / previous.power) * 100`. Negative when the
    /// new layout draws more power.
    pub power_savings_percent: f64,
    pub congestion_changed: bool,
}

/// One-slot stats history for before/after comparison.
///
/// Holds the stats in effect immediately before the latest spec change;
/// [`StatsHistory::record`] replaces the slot atomically. Not a log.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsHistory {
    previous: Option<LayoutStats>,
}

impl StatsHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: LayoutStats) {
        self.previous = Some(stats);
    }

    pub fn previous(&self) -> Option<&LayoutStats> {
        self.previous.as_ref()
    }

    /// Delta against the recorded baseline, or `None` before the first
    /// baseline exists (nothing to compare on the first synthesis).
    pub fn delta(&self, current: &LayoutStats) -> Option<MetricsDelta> {
        let previous = self.previous.as_ref()?;
        if previous.power_w <= 0.0 {
            return None;
        }
        Some(MetricsDelta {
            power_savings_percent: (1.0 - current.power_w / previous.power_w) * 100.0,
            congestion_changed: previous.congestion != current.congestion,
        })
    }
}
