// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

/// Scale range for the canvas.
pub const MIN_SCALE: f32 = 0.1;
pub const MAX_SCALE: f32 = 5.0;

/// Auto-fit never zooms past this, even into a huge container.
pub const MAX_FIT_SCALE: f32 = 1.2;

/// Pixels of total padding (both sides combined) left around the die
/// when fitting to the container.
pub const FIT_PADDING: f32 = 100.0;

/// Wheel delta to scale conversion factor.
pub const ZOOM_SENSITIVITY: f32 = 0.001;

/// Step applied by the zoom in/out buttons.
pub const ZOOM_BUTTON_STEP: f32 = 1.2;

/// Pan offset and scale of the floorplan canvas.
///
/// Screen position of a world point is `pan + world * k`. The state is
/// recomputed by [`ViewState::auto_fit`] whenever the layout or the
/// container changes, then mutated transiently by drag and wheel
/// gestures until the next layout replaces it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub x: f32,
    pub y: f32,
    pub k: f32,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            k: 1.0,
        }
    }
}

impl ViewState {
    /// Scale and center `layout` dimensions into a container, leaving
    /// [`FIT_PADDING`] pixels of margin. Returns `None` while the
    /// container has no measured size yet; callers defer the fit until
    /// a real measurement arrives.
    pub fn auto_fit(
        layout_width: f64,
        layout_height: f64,
        container_width: f32,
        container_height: f32,
    ) -> Option<ViewState> {
        if container_width <= 0.0 || container_height <= 0.0 {
            return None;
        }
        if layout_width <= 0.0 || layout_height <= 0.0 {
            return None;
        }

        let lw = layout_width as f32;
        let lh = layout_height as f32;
        let scale_x = (container_width - FIT_PADDING) / lw;
        let scale_y = (container_height - FIT_PADDING) / lh;
        let k = scale_x.min(scale_y).min(MAX_FIT_SCALE).clamp(MIN_SCALE, MAX_SCALE);

        Some(ViewState {
            x: (container_width - lw * k) / 2.0,
            y: (container_height - lh * k) / 2.0,
            k,
        })
    }

    /// Apply a wheel delta. Zoom is anchored at the current pan offset,
    /// not at the cursor; a deliberate simplification.
    pub fn apply_wheel(&mut self, delta_y: f32) {
        self.k = (self.k - delta_y * ZOOM_SENSITIVITY).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_in(&mut self) {
        self.k = (self.k * ZOOM_BUTTON_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    pub fn zoom_out(&mut self) {
        self.k = (self.k / ZOOM_BUTTON_STEP).clamp(MIN_SCALE, MAX_SCALE);
    }

    /// Reset the pan offset. Keeps the scale.
    pub fn reset_pan(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }
}

/// Drag gesture state for the canvas.
///
/// The origin is the pointer position minus the pan at gesture start,
/// so dragging sets the pan to pointer minus origin. Must be ended on
/// pointer-up and on pointer-leave, otherwise the drag sticks when the
/// pointer exits the canvas mid-gesture.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    origin: Option<(f32, f32)>,
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    pub fn begin(&mut self, pointer_x: f32, pointer_y: f32, view: &ViewState) {
        self.origin = Some((pointer_x - view.x, pointer_y - view.y));
    }

    pub fn drag_to(&self, pointer_x: f32, pointer_y: f32, view: &mut ViewState) {
        if let Some((ox, oy)) = self.origin {
            view.x = pointer_x - ox;
            view.y = pointer_y - oy;
        }
    }

    pub fn end(&mut self) {
        self.origin = None;
    }
}
