// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 floorplan-viewer contributors

use eframe::egui;
use rfd::FileDialog;

use crate::export;
use crate::layout::{synthesize, BlockKind, Congestion, Layout, Point};
use crate::spec::{ChipSpec, SpecReader};
use crate::view::layers::{visible_blocks, LayerVisibility};
use crate::view::metrics::StatsHistory;
use crate::view::selection::SelectionController;
use crate::view::viewport::{DragState, ViewState, MAX_SCALE, MIN_SCALE};

use std::collections::HashSet;

/// World-unit step between ruler ticks along the top die edge.
const RULER_STEP: f64 = 200.0;

/// World-unit spacing of the viewport grid overlay.
const GRID_SPACING: f32 = 40.0;

/// Routes thinner than this render dashed to connote lower bandwidth.
const THIN_ROUTE_WIDTH: f64 = 2.0;

/// Labels smaller than this many pixels are skipped entirely.
const MIN_LABEL_PX: f32 = 4.0;

const CANVAS_BG: egui::Color32 = egui::Color32::from_rgb(0x0b, 0x0f, 0x19);
const DIE_BACKDROP: egui::Color32 = egui::Color32::from_rgb(0x03, 0x07, 0x12);
const DIE_FILL: egui::Color32 = egui::Color32::from_rgb(0x11, 0x18, 0x27);
const DIE_STROKE: egui::Color32 = egui::Color32::from_rgb(0x37, 0x41, 0x51);
const RULER_TICK: egui::Color32 = egui::Color32::from_rgb(0x4b, 0x55, 0x63);
const RULER_TEXT: egui::Color32 = egui::Color32::from_rgb(0x9c, 0xa3, 0xaf);
const BOTTLENECK_COLOR: egui::Color32 = egui::Color32::from_rgb(0xef, 0x44, 0x44);

pub struct FloorplanViewer {
    /// Spec the current layout was synthesized from.
    spec: ChipSpec,
    /// Edit buffer for the spec panel; applied explicitly.
    draft: ChipSpec,
    layout: Option<Layout>,
    history: StatsHistory,
    view: ViewState,
    drag: DragState,
    layers: LayerVisibility,
    selection: SelectionController,
    /// Route ids flagged as congested by an external analysis pass.
    bottleneck_routes: HashSet<String>,
    spec_file_path: Option<String>,
    show_spec_panel: bool,
    show_layers_panel: bool,
    fit_requested: bool,
    fit_delay_frames: u8, // Delay fit to view by a few frames for UI stability
    error_message: Option<String>,
    success_message: Option<String>,
}

impl FloorplanViewer {
    pub fn new() -> Self {
        let mut viewer = Self {
            spec: ChipSpec::default(),
            draft: ChipSpec::default(),
            layout: None,
            history: StatsHistory::new(),
            view: ViewState::default(),
            drag: DragState::default(),
            layers: LayerVisibility::default(),
            selection: SelectionController::new(),
            bottleneck_routes: HashSet::new(),
            spec_file_path: None,
            show_spec_panel: true,
            show_layers_panel: true,
            fit_requested: false,
            fit_delay_frames: 0,
            error_message: None,
            success_message: None,
        };
        // Show a floorplan for the default spec right away.
        viewer.apply_spec(ChipSpec::default());
        viewer
    }

    /// Re-synthesis pipeline: snapshot the old stats for before/after
    /// comparison, synthesize, clear the (now stale) selection, then
    /// schedule an auto-fit once the canvas has a stable size.
    fn apply_spec(&mut self, spec: ChipSpec) {
        let spec = spec.normalized();
        if let Some(layout) = &self.layout {
            self.history.record(layout.stats);
        }

        let layout = synthesize(&spec);
        log::info!(
            "Synthesized floorplan: {} blocks, {} routes, {:.1} mm2 die",
            layout.blocks.len(),
            layout.routes.len(),
            layout.stats.area_mm2
        );

        self.selection.clear();
        self.layout = Some(layout);
        self.spec = spec.clone();
        self.draft = spec;
        // Delay fit to view by a few frames to ensure UI layout is stable
        self.fit_delay_frames = 3;
    }

    /// Only one status dialog is shown at a time, so setting one slot
    /// always clears the other.
    fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    fn open_spec_file(&mut self, path: String) {
        let reader = SpecReader::new();
        match reader.read(&path) {
            Ok(file) => {
                self.bottleneck_routes = file.bottleneck_routes.into_iter().collect();
                self.spec_file_path = Some(path);
                self.apply_spec(file.spec);
                self.error_message = None;
                self.success_message = None;
            }
            Err(e) => {
                self.set_error(format!("Failed to load spec file: {e}"));
            }
        }
    }

    fn handle_export_blocks_csv(&mut self) {
        let Some(layout) = &self.layout else {
            return;
        };

        if let Some(path) = FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .set_file_name("floorplan_blocks.csv")
            .save_file()
        {
            let path_str = path.to_string_lossy().to_string();
            match export::export_blocks_to_csv(layout, &path_str) {
                Ok(()) => {
                    let message =
                        format!("Exported {} blocks to {}", layout.blocks.len(), path_str);
                    self.set_success(message);
                }
                Err(e) => {
                    self.set_error(format!("Failed to export CSV: {e}"));
                }
            }
        }
    }

    fn block_style(kind: BlockKind) -> (egui::Color32, egui::Color32) {
        // Fill at low alpha, stroke solid; neon-on-dark palette.
        let stroke = match kind {
            BlockKind::Compute => egui::Color32::from_rgb(0x06, 0xb6, 0xd4), // Cyan
            BlockKind::Memory => egui::Color32::from_rgb(0x10, 0xb9, 0x81),  // Emerald
            BlockKind::Io => egui::Color32::from_rgb(0xa8, 0x55, 0xf7),      // Purple
            BlockKind::Other => egui::Color32::from_rgb(0x6b, 0x72, 0x80),   // Gray
        };
        let fill =
            egui::Color32::from_rgba_unmultiplied(stroke.r(), stroke.g(), stroke.b(), 38);
        (fill, stroke)
    }

    /// Parse a `#rrggbb` color string, falling back to gray.
    fn parse_hex_color(hex: &str) -> egui::Color32 {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return egui::Color32::from_rgb(r, g, b);
            }
        }
        egui::Color32::from_rgb(0xa0, 0xa0, 0xa0)
    }

    fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        egui::menu::bar(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.button("Open Spec File").clicked() {
                    if let Some(path) = FileDialog::new()
                        .add_filter("JSON spec files", &["json"])
                        .pick_file()
                    {
                        self.open_spec_file(path.to_string_lossy().to_string());
                    }
                    ui.close_menu();
                }

                ui.separator();

                if ui
                    .add_enabled(
                        self.layout.is_some(),
                        egui::Button::new("Export Blocks to CSV"),
                    )
                    .clicked()
                {
                    self.handle_export_blocks_csv();
                    ui.close_menu();
                }

                ui.separator();

                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                ui.checkbox(&mut self.show_spec_panel, "Show Spec Panel");
                ui.checkbox(&mut self.show_layers_panel, "Show Layers Panel");
                ui.separator();
                if ui.button("Fit to View").clicked() {
                    self.fit_requested = true;
                    ui.close_menu();
                }
                if ui.button("Reset Pan").clicked() {
                    self.view.reset_pan();
                    ui.close_menu();
                }
            });
        });
    }

    fn render_spec_panel(&mut self, ui: &mut egui::Ui) {
        ui.vertical(|ui| {
            ui.heading("Chip Specification");

            if let Some(path) = &self.spec_file_path {
                ui.label(format!("Spec: {}", path));
            } else {
                ui.label("No spec file loaded");
            }

            ui.separator();

            ui.horizontal(|ui| {
                ui.label("NPU clusters:");
                ui.add(egui::DragValue::new(&mut self.draft.num_npu_clusters).range(1..=64));
            });

            egui::ComboBox::from_label("AXI width")
                .selected_text(format!("{} bit", self.draft.axi_width))
                .show_ui(ui, |ui| {
                    for width in [32u32, 64, 128, 256, 512] {
                        ui.selectable_value(
                            &mut self.draft.axi_width,
                            width,
                            format!("{width} bit"),
                        );
                    }
                });

            egui::ComboBox::from_label("DDR width")
                .selected_text(format!("{} bit", self.draft.ddr_width))
                .show_ui(ui, |ui| {
                    for width in [64u32, 128, 256, 512] {
                        ui.selectable_value(
                            &mut self.draft.ddr_width,
                            width,
                            format!("{width} bit"),
                        );
                    }
                });

            egui::ComboBox::from_label("PCIe generation")
                .selected_text(self.draft.pcie_gen.clone())
                .show_ui(ui, |ui| {
                    for gen in ["Gen3", "Gen4", "Gen5", "Gen6"] {
                        ui.selectable_value(&mut self.draft.pcie_gen, gen.to_string(), gen);
                    }
                });

            egui::ComboBox::from_label("Process node")
                .selected_text(self.draft.process_node.clone())
                .show_ui(ui, |ui| {
                    for node in ["28nm", "16nm", "12nm", "7nm", "5nm"] {
                        ui.selectable_value(&mut self.draft.process_node, node.to_string(), node);
                    }
                });

            ui.checkbox(
                &mut self.draft.multi_die_partitioning,
                "Multi-die partitioning",
            );

            if ui.button("Apply Spec").clicked() {
                self.apply_spec(self.draft.clone());
            }

            ui.separator();

            ui.heading("Controls");

            // Zoom controls
            ui.horizontal(|ui| {
                ui.label("Zoom:");
                if ui.button("-").clicked() {
                    self.view.zoom_out();
                }
                ui.add(egui::Slider::new(&mut self.view.k, MIN_SCALE..=MAX_SCALE));
                if ui.button("+").clicked() {
                    self.view.zoom_in();
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Fit to View").clicked() {
                    self.fit_requested = true;
                }
                if ui.button("Reset Pan").clicked() {
                    self.view.reset_pan();
                }
            });
        });
    }

    fn render_layers_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Layer Control");

        ui.checkbox(&mut self.layers.grid, "Grid & Rulers");
        ui.checkbox(&mut self.layers.routes, "Routes");
        ui.checkbox(&mut self.layers.compute, "Compute");
        ui.checkbox(&mut self.layers.memory, "Memory");
        ui.checkbox(&mut self.layers.io, "IO");

        ui.separator();

        self.render_metrics_panel(ui);
    }

    fn render_metrics_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation Metrics");

        let Some(layout) = &self.layout else {
            ui.label("No floorplan synthesized");
            return;
        };
        let stats = layout.stats;

        // Before/after comparison, only once a baseline exists.
        if let (Some(delta), Some(previous)) = (self.history.delta(&stats), self.history.previous())
        {
            ui.group(|ui| {
                ui.label("Optimization Impact");
                ui.horizontal(|ui| {
                    ui.label("Power:");
                    ui.monospace(format!(
                        "{:.2} W -> {:.2} W",
                        previous.power_w, stats.power_w
                    ));
                });
                if delta.congestion_changed {
                    ui.horizontal(|ui| {
                        ui.label("Congestion:");
                        ui.monospace(format!("{} -> {}", previous.congestion, stats.congestion));
                    });
                }
                let savings = delta.power_savings_percent;
                let color = if savings >= 0.0 {
                    egui::Color32::from_rgb(0x10, 0xb9, 0x81)
                } else {
                    egui::Color32::from_rgb(0xef, 0x44, 0x44)
                };
                ui.colored_label(color, format!("{savings:.0}% power savings"));
            });
        }

        egui::Grid::new("metrics_grid").num_columns(2).show(ui, |ui| {
            ui.label("Est. Power");
            ui.monospace(format!("{:.2} W", stats.power_w));
            ui.end_row();

            ui.label("Die Area");
            ui.monospace(format!("{:.1} mm\u{b2}", stats.area_mm2));
            ui.end_row();

            ui.label("Congestion");
            let color = match stats.congestion {
                Congestion::Low => egui::Color32::from_rgb(0x10, 0xb9, 0x81),
                Congestion::High => egui::Color32::from_rgb(0xef, 0x44, 0x44),
            };
            ui.colored_label(color, stats.congestion.to_string());
            ui.end_row();
        });

        ui.label("Utilization");
        ui.add(
            egui::ProgressBar::new(stats.utilization as f32)
                .show_percentage(),
        );

        ui.separator();

        ui.label(format!("Process node: {}", self.spec.process_node));
        ui.label(format!("NPU clusters: {}", self.spec.num_npu_clusters));
        ui.label(format!("AXI width: {} bit", self.spec.axi_width));
        ui.label(format!("DDR width: {} bit", self.spec.ddr_width));
        if !self.bottleneck_routes.is_empty() {
            ui.label(format!(
                "Bottleneck routes: {}",
                self.bottleneck_routes.len()
            ));
        }
    }

    fn render_inspector(&mut self, ctx: &egui::Context) {
        let block = self.selection.selected().and_then(|id| {
            self.layout
                .as_ref()
                .and_then(|layout| layout.block_by_id(id))
                .cloned()
        });
        let Some(block) = block else {
            return;
        };

        let mut close_requested = false;
        egui::Window::new("Block Inspector")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(&block.label);
                    if ui.button("X").clicked() {
                        close_requested = true;
                    }
                });
                ui.separator();

                ui.monospace(format!("Id:   {}", block.id));
                ui.monospace(format!("Type: {}", block.kind));

                ui.separator();
                ui.label("Geometry (\u{b5}m)");
                ui.monospace(format!("X: {:.0}  Y: {:.0}", block.x, block.y));
                ui.monospace(format!("W: {:.0}  H: {:.0}", block.width, block.height));

                if !block.stats.is_empty() {
                    ui.separator();
                    ui.label("Stats");
                    for (key, value) in &block.stats {
                        ui.monospace(format!("{key}: {value}"));
                    }
                }
            });

        if close_requested {
            self.selection.clear();
        }
    }

    fn render_canvas(&mut self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let (response, painter) =
            ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let rect = response.rect;

        // Handle fit to view request with frame delay
        if self.fit_delay_frames > 0 {
            self.fit_delay_frames -= 1;
            if self.fit_delay_frames == 0 {
                self.fit_requested = true;
            }
            ui.ctx().request_repaint();
        }

        if self.fit_requested {
            if let Some((lw, lh)) = self.layout.as_ref().map(|l| (l.width, l.height)) {
                match ViewState::auto_fit(lw, lh, rect.width(), rect.height()) {
                    Some(view) => {
                        self.view = view;
                        self.fit_requested = false;
                    }
                    None => {
                        // Container not measured yet, retry next frame.
                        ui.ctx().request_repaint();
                    }
                }
            } else {
                self.fit_requested = false;
            }
        }

        // Handle F key for fit to view
        if ui.input(|i| i.key_pressed(egui::Key::F)) {
            self.fit_requested = true;
        }

        // Pan gesture. The origin-based math keeps the grab point under
        // the pointer for the whole drag.
        if let Some(pos) = response.interact_pointer_pos() {
            let local = pos - rect.min;
            if response.drag_started() {
                self.drag.begin(local.x, local.y, &self.view);
            } else if response.dragged() {
                self.drag.drag_to(local.x, local.y, &mut self.view);
            }
        }
        if response.drag_stopped() {
            self.drag.end();
        }
        // Pointer left the canvas mid-gesture; do not leave a stuck drag.
        if self.drag.is_dragging() && !ui.rect_contains_pointer(rect) {
            self.drag.end();
        }

        // Wheel zoom, anchored at the pan offset.
        if response.hover_pos().is_some() {
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_delta != 0.0 {
                self.view.apply_wheel(-scroll_delta);
            }
        }

        painter.rect_filled(rect, 0.0, CANVAS_BG);

        let view = self.view;
        let to_screen = |p: Point| {
            egui::pos2(
                rect.min.x + view.x + p.x as f32 * view.k,
                rect.min.y + view.y + p.y as f32 * view.k,
            )
        };

        // Viewport-fixed grid overlay, scrolls with pan and scales with zoom.
        if self.layers.grid {
            let spacing = GRID_SPACING * view.k;
            if spacing > 2.0 {
                let grid_stroke = egui::Stroke::new(
                    1.0,
                    egui::Color32::from_rgba_unmultiplied(0x37, 0x41, 0x51, 50),
                );
                let mut x = rect.min.x + view.x.rem_euclid(spacing);
                while x < rect.max.x {
                    painter.line_segment(
                        [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
                        grid_stroke,
                    );
                    x += spacing;
                }
                let mut y = rect.min.y + view.y.rem_euclid(spacing);
                while y < rect.max.y {
                    painter.line_segment(
                        [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
                        grid_stroke,
                    );
                    y += spacing;
                }
            }
        }

        let click_pos = if response.clicked() {
            response.interact_pointer_pos()
        } else {
            None
        };
        let mut clicked_block: Option<String> = None;
        let mut any_bottleneck_drawn = false;

        if let Some(layout) = &self.layout {
            // Die substrate backdrop and boundary.
            let backdrop = egui::Rect::from_min_max(
                to_screen(Point { x: -50.0, y: -50.0 }),
                to_screen(Point {
                    x: layout.width + 50.0,
                    y: layout.height + 50.0,
                }),
            );
            painter.rect_filled(backdrop, 0.0, DIE_BACKDROP);

            let die_rect = egui::Rect::from_min_max(
                to_screen(Point { x: 0.0, y: 0.0 }),
                to_screen(Point {
                    x: layout.width,
                    y: layout.height,
                }),
            );
            painter.rect_filled(die_rect, 0.0, DIE_FILL);
            painter.rect_stroke(
                die_rect,
                0.0,
                egui::Stroke::new(2.0, DIE_STROKE),
                egui::StrokeKind::Middle,
            );

            // Ruler ticks along the top die edge.
            if self.layers.grid {
                let mut tick = 0.0;
                while tick <= layout.width {
                    let base = to_screen(Point { x: tick, y: 0.0 });
                    let top = to_screen(Point { x: tick, y: -10.0 });
                    painter.line_segment([top, base], egui::Stroke::new(1.0, RULER_TICK));
                    painter.text(
                        egui::pos2(top.x, top.y - 4.0),
                        egui::Align2::CENTER_BOTTOM,
                        format!("{}", tick as i64),
                        egui::FontId::monospace(12.0),
                        RULER_TEXT,
                    );
                    tick += RULER_STEP;
                }
            }

            // Routes: three-segment Manhattan polylines.
            if self.layers.routes {
                let pulse = {
                    let t = ui.input(|i| i.time);
                    ((t * 4.0).sin() * 0.5 + 0.5) as f32
                };
                for route in &layout.routes {
                    let points = vec![
                        to_screen(route.from),
                        to_screen(Point {
                            x: route.from.x + 20.0,
                            y: route.from.y,
                        }),
                        to_screen(Point {
                            x: route.to.x,
                            y: route.from.y,
                        }),
                        to_screen(route.to),
                    ];
                    let width = (route.width as f32 * view.k).max(1.0);
                    let is_bottleneck = self.bottleneck_routes.contains(&route.id);

                    if is_bottleneck {
                        any_bottleneck_drawn = true;
                        let alpha = 120 + (120.0 * pulse) as u8;
                        let color = egui::Color32::from_rgba_unmultiplied(
                            BOTTLENECK_COLOR.r(),
                            BOTTLENECK_COLOR.g(),
                            BOTTLENECK_COLOR.b(),
                            alpha,
                        );
                        painter.add(egui::Shape::line(
                            points,
                            egui::Stroke::new(width, color),
                        ));
                    } else {
                        let base = Self::parse_hex_color(&route.color);
                        let color = egui::Color32::from_rgba_unmultiplied(
                            base.r(),
                            base.g(),
                            base.b(),
                            128,
                        );
                        let stroke = egui::Stroke::new(width, color);
                        if route.width < THIN_ROUTE_WIDTH {
                            painter.extend(egui::Shape::dashed_line(
                                &points, stroke, 6.0, 4.0,
                            ));
                        } else {
                            painter.add(egui::Shape::line(points, stroke));
                        }
                    }
                }
            }

            // Blocks, filtered by layer visibility.
            let world_click = click_pos.map(|pos| {
                let local = pos - rect.min;
                Point {
                    x: ((local.x - view.x) / view.k) as f64,
                    y: ((local.y - view.y) / view.k) as f64,
                }
            });

            for block in visible_blocks(layout, &self.layers) {
                let block_rect = egui::Rect::from_min_max(
                    to_screen(Point {
                        x: block.x,
                        y: block.y,
                    }),
                    to_screen(Point {
                        x: block.x + block.width,
                        y: block.y + block.height,
                    }),
                );
                let (fill, stroke_color) = Self::block_style(block.kind);
                let is_selected = self.selection.is_selected(&block.id);

                if is_selected {
                    // Emphasis halo behind the selected block.
                    let glow = egui::Color32::from_rgba_unmultiplied(
                        stroke_color.r(),
                        stroke_color.g(),
                        stroke_color.b(),
                        60,
                    );
                    painter.rect_stroke(
                        block_rect.expand(3.0),
                        6.0,
                        egui::Stroke::new(6.0, glow),
                        egui::StrokeKind::Middle,
                    );
                }

                painter.rect_filled(block_rect, 4.0, fill);
                painter.rect_stroke(
                    block_rect,
                    4.0,
                    egui::Stroke::new(if is_selected { 3.0 } else { 1.5 }, stroke_color),
                    egui::StrokeKind::Middle,
                );

                // Font size capped so labels never overflow narrow blocks.
                let font_px = ((block.width as f32 / 8.0).min(12.0)) * view.k;
                if font_px >= MIN_LABEL_PX {
                    painter.text(
                        block_rect.center(),
                        egui::Align2::CENTER_CENTER,
                        block.label.to_uppercase(),
                        egui::FontId::monospace(font_px),
                        stroke_color,
                    );
                }

                // Topmost block under the click wins.
                if let Some(world) = world_click {
                    if world.x >= block.x
                        && world.x <= block.x + block.width
                        && world.y >= block.y
                        && world.y <= block.y + block.height
                    {
                        clicked_block = Some(block.id.clone());
                    }
                }
            }
        }

        if click_pos.is_some() {
            match clicked_block {
                Some(id) => self.selection.select(&id),
                None => self.selection.clear(),
            }
        }

        // Keep the bottleneck pulse animating.
        if any_bottleneck_drawn {
            ui.ctx().request_repaint();
        }
    }
}

impl eframe::App for FloorplanViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(error) = &self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(244, 67, 54), error);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.error_message = None;
                        }
                    });
                });
        }

        if let Some(success) = &self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.colored_label(egui::Color32::from_rgb(76, 175, 80), success);
                    ui.separator();
                    ui.horizontal(|ui| {
                        ui.allocate_space(egui::Vec2::new(ui.available_width() / 2.0 - 25.0, 0.0));
                        if ui.button("OK").clicked() {
                            self.success_message = None;
                        }
                    });
                });
        }

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            self.render_menu_bar(ui);
        });

        if self.show_spec_panel {
            egui::SidePanel::left("spec_panel")
                .resizable(true)
                .default_width(280.0)
                .show(ctx, |ui| {
                    self.render_spec_panel(ui);
                });
        }

        if self.show_layers_panel {
            egui::SidePanel::right("layers_panel")
                .resizable(true)
                .default_width(260.0)
                .show(ctx, |ui| {
                    self.render_layers_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Floorplan");
            self.render_canvas(ui);
        });

        self.render_inspector(ctx);
    }
}
