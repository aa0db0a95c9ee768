//! Interactive ring diagram viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns a [`Config`], the last
//! generated [`Diagram`] and the drawing [`Style`], and implements
//! [`eframe::App`] to edit the configuration and render the diagram.

use eframe::App;
use glam::DVec2;
use ring_core::{
    config::{Config, MAX_ROUNDING_PRECISION, SeedVector},
    engine::{Diagram, generate},
    error::ConfigError,
    point::Point,
    vector::Vector,
};
use tracing::warn;

/// Colours and sizes used to draw a diagram.
///
/// ### Fields
/// - `main_color` - Boundary points and their labels.
/// - `secondary_color` - Interior points and their labels.
/// - `tertiary_color` - Arcs and spokes.
/// - `font_size` - Label font size in points.
/// - `dot_size` - Point marker radius in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Style {
    pub main_color: egui::Color32,
    pub secondary_color: egui::Color32,
    pub tertiary_color: egui::Color32,
    pub font_size: f32,
    pub dot_size: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            main_color: egui::Color32::from_rgb(0x3d, 0x85, 0xc6),
            secondary_color: egui::Color32::from_rgb(0x67, 0x4e, 0xa7),
            tertiary_color: egui::Color32::from_rgb(0x43, 0x43, 0x43),
            font_size: 10.0,
            dot_size: 5.0,
        }
    }
}

/// Main application state for the interactive viewer.
///
/// The typical per-frame update is:
/// 1. Build the panels; any edited config field marks the frame dirty.
/// 2. If dirty, call [`Viewer::regenerate`].
/// 3. Draw arcs, spokes, boundary points and interior points.
///
/// ### Fields
/// - `cfg` - Engine configuration being edited.
/// - `diagram` - Output of the last successful run; empty after a rejected config.
/// - `error` - Why the current config was rejected, if it was.
/// - `style` - Colours and sizes.
///
/// - `show_fraction_labels` - Draw fraction labels next to points.
/// - `show_value_labels` - Draw value labels under interior points.
/// - `zoom` - Pixels per world unit.
/// - `pan` - Screen-space pan offset in pixels.
pub struct Viewer {
    cfg: Config,
    diagram: Diagram,
    error: Option<ConfigError>,
    style: Style,

    show_fraction_labels: bool,
    show_value_labels: bool,
    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a viewer over [`Config::default`] and generates it once.
    pub fn new() -> Self {
        let mut viewer = Self {
            cfg: Config::default(),
            diagram: Diagram::default(),
            error: None,
            style: Style::default(),
            show_fraction_labels: true,
            show_value_labels: false,
            zoom: 30.0,
            pan: egui::vec2(0.0, 0.0),
        };
        viewer.regenerate();
        viewer
    }

    /// Restores the default config and camera, then regenerates.
    fn reset(&mut self) {
        self.cfg = Config::default();
        self.zoom = 30.0;
        self.pan = egui::vec2(0.0, 0.0);
        self.regenerate();
    }

    /// Runs the layer engine over the current config.
    ///
    /// A rejected config clears the diagram; nothing partial is drawn.
    fn regenerate(&mut self) {
        match generate(&self.cfg) {
            Ok(diagram) => {
                self.diagram = diagram;
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "configuration rejected");
                self.diagram = Diagram::default();
                self.error = Some(e);
            }
        }
    }

    /// Converts a world-space point to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y goes up in world space.
    fn world_to_screen(&self, p: Point, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        let w = DVec2::from(p).as_vec2();
        egui::pos2(
            center.x + w.x * self.zoom + self.pan.x,
            center.y - w.y * self.zoom + self.pan.y,
        )
    }

    /// Inverse of [`Viewer::world_to_screen`], up to floating point rounding.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Point {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Point::new(x as f64, y as f64)
    }

    /// Helper to draw a labeled numeric [`egui::DragValue`].
    ///
    /// ### Returns
    /// `true` if the value was edited this frame.
    fn labeled_drag<N: egui::emath::Numeric>(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut N,
        range: std::ops::RangeInclusive<N>,
        speed: f64,
    ) -> bool {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed))
                .changed()
        })
        .inner
    }

    /// Builds the top panel (regenerate, reset, label toggles, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("⟳ Regenerate").clicked() {
                    self.regenerate();
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }

                ui.separator();
                ui.checkbox(&mut self.show_fraction_labels, "Fractions");
                ui.checkbox(&mut self.show_value_labels, "Values");

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 1.0..=200.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (output sizes or the config error).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(e) = &self.error {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                    return;
                }
                ui.label(format!("lines = {}", self.diagram.circle_lines.len()));
                ui.label(format!("arcs = {}", self.diagram.circle_arcs.len()));
                ui.separator();
                ui.label(format!("interior = {}", self.diagram.middle.len()));
                ui.label(format!("boundary = {}", self.diagram.base.len()));
            });
        });
    }

    /// Builds the right-hand panel for engine parameters and seed rays.
    ///
    /// ### Returns
    /// `true` if any config field changed.
    fn ui_config_panel(&mut self, ctx: &egui::Context) -> bool {
        let mut changed = false;

        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(240.0)
            .show(ctx, |ui| {
                ui.heading("Config");

                ui.separator();
                ui.label("Rings");
                changed |= Self::labeled_drag(
                    ui,
                    "number_of_circles:",
                    &mut self.cfg.number_of_circles,
                    1..=50,
                    0.1,
                );
                changed |= Self::labeled_drag(
                    ui,
                    "length_increment:",
                    &mut self.cfg.length_increment_per_circle,
                    -10.0..=10.0,
                    0.05,
                );

                ui.separator();
                ui.label("Labels");
                changed |= Self::labeled_drag(
                    ui,
                    "seed_numerator:",
                    &mut self.cfg.base_seed_numerator,
                    -100..=100,
                    0.1,
                );
                changed |= Self::labeled_drag(
                    ui,
                    "seed_denominator:",
                    &mut self.cfg.base_seed_denominator,
                    1..=100,
                    0.1,
                );
                changed |= Self::labeled_drag(
                    ui,
                    "rounding_precision:",
                    &mut self.cfg.rounding_precision,
                    0..=MAX_ROUNDING_PRECISION,
                    0.1,
                );

                ui.separator();
                changed |= ui
                    .checkbox(&mut self.cfg.draw_circle_arcs, "Draw circle arcs")
                    .changed();
                changed |= ui
                    .checkbox(&mut self.cfg.draw_circle_lines, "Draw circle lines")
                    .changed();

                ui.separator();
                ui.label("Seed rays");
                changed |= self.ui_seed_rays(ui);

                ui.separator();
                if ui.button("Reset cfg to default").clicked() {
                    self.cfg = Config::default();
                    changed = true;
                }
            });

        changed
    }

    /// Lists the seed rays with angle/length editors and add/remove buttons.
    fn ui_seed_rays(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;
        let mut remove = None;

        egui::ScrollArea::vertical()
            .max_height(240.0)
            .show(ui, |ui| {
                for (i, seed) in self.cfg.vectors.iter_mut().enumerate() {
                    ui.horizontal(|ui| {
                        ui.label(format!("#{i}"));
                        changed |= ui
                            .add(
                                egui::DragValue::new(&mut seed.angle)
                                    .suffix("°")
                                    .range(-360.0..=360.0)
                                    .speed(0.5),
                            )
                            .changed();

                        let mut custom = seed.length.is_some();
                        if ui.checkbox(&mut custom, "len").changed() {
                            seed.length = custom.then_some(1.0);
                            changed = true;
                        }
                        if let Some(length) = seed.length.as_mut() {
                            changed |= ui
                                .add(egui::DragValue::new(length).range(-100.0..=100.0).speed(0.05))
                                .changed();
                        }

                        if ui.small_button("✖").clicked() {
                            remove = Some(i);
                        }
                    });
                }
            });

        if let Some(i) = remove {
            self.cfg.vectors.remove(i);
            changed = true;
        }

        ui.horizontal(|ui| {
            if ui.button("Add ray").clicked() {
                let angle = self.cfg.vectors.last().map_or(0.0, |s| s.angle + 30.0);
                self.cfg.vectors.push(SeedVector::new(angle));
                changed = true;
            }
            if ui.button("Even fan").clicked() {
                self.cfg.vectors = SeedVector::fan(self.cfg.vectors.len().max(2));
                changed = true;
            }
        });

        changed
    }

    /// Draws a list of vectors as straight segments from origin to target.
    fn paint_vectors(&self, painter: &egui::Painter, rect: egui::Rect, vectors: &[Vector]) {
        let stroke = egui::Stroke::new(0.5, self.style.tertiary_color);
        for v in vectors {
            let a = self.world_to_screen(v.origin(), rect);
            let b = self.world_to_screen(v.target(), rect);
            painter.line_segment([a, b], stroke);
        }
    }

    /// Draws a labelled point marker.
    fn paint_point(
        &self,
        painter: &egui::Painter,
        rect: egui::Rect,
        p: Point,
        color: egui::Color32,
        label: Option<&str>,
        anchor: egui::Align2,
    ) {
        let pos = self.world_to_screen(p, rect);
        painter.circle_filled(pos, self.style.dot_size * 0.5, color);
        if let Some(text) = label {
            painter.text(
                pos,
                anchor,
                text,
                egui::FontId::proportional(self.style.font_size),
                color,
            );
        }
    }

    /// Builds the central panel where the diagram is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                self.pan += response.drag_delta();
            }

            // Zoom around the mouse cursor.
            let scroll = ui.ctx().input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());
                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(1.0, 200.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            self.paint_vectors(&painter, rect, &self.diagram.circle_arcs);
            self.paint_vectors(&painter, rect, &self.diagram.circle_lines);

            for (p, label) in self.diagram.base.iter() {
                let text = label.to_string();
                self.paint_point(
                    &painter,
                    rect,
                    *p,
                    self.style.main_color,
                    self.show_fraction_labels.then_some(text.as_str()),
                    egui::Align2::CENTER_BOTTOM,
                );
            }

            for (p, fraction, value) in self.diagram.middle.iter() {
                let text = match (self.show_fraction_labels, self.show_value_labels) {
                    (true, true) => Some(format!("{fraction}\n{value}")),
                    (true, false) => Some(fraction.to_string()),
                    (false, true) => Some(value.to_owned()),
                    (false, false) => None,
                };
                self.paint_point(
                    &painter,
                    rect,
                    *p,
                    self.style.secondary_color,
                    text.as_deref(),
                    egui::Align2::CENTER_BOTTOM,
                );
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    ///
    /// Config edits made through the side panel regenerate the diagram
    /// before the central panel draws it.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        if self.ui_config_panel(ctx) {
            self.regenerate();
        }
        self.ui_central_panel(ctx);
    }
}
