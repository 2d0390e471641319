//! Interactive L-system tree viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the generation inputs
//! (species preset, grammar, drawing parameters) and the last generated
//! structure, and implements [`eframe::App`] to render and control
//! generation through an egui UI.

use eframe::App;
use glam::Vec2;
use lsys_core::{
    builder::{self, Structure},
    rewriter,
    species::{Species, SpeciesParams},
    turtle::Bounds,
};

/// Main application state for the interactive viewer.
///
/// [`Viewer`] glues together:
/// - The generation core: [`SpeciesParams`] and the resulting [`Structure`].
/// - UI configuration (pan/zoom, selected species).
/// - eframe/egui callbacks for drawing and user interaction.
///
/// Generation is on demand: editing parameters does nothing until the
/// user clicks "Regenerate" (or switches species, which regenerates
/// immediately). The viewer keeps the last good structure on screen and
/// shows validation errors in the status bar instead of clearing it.
///
/// ### Fields
/// - `species` - Currently selected species preset.
/// - `params` - Editable copy of the species parameter bundle.
/// - `structure` - Last generated structure (nodes + bounds).
/// - `expanded_len` - Symbol count of the last expanded string.
/// - `last_error` - Validation error from the last generation attempt.
///
/// - `zoom` - Zoom factor for world-to-screen coordinate mapping.
/// - `pan` - Screen-space pan offset in pixels.
pub struct Viewer {
    species: Species,
    params: SpeciesParams,
    structure: Structure,
    expanded_len: usize,
    last_error: Option<String>,

    zoom: f32,
    pan: egui::Vec2,
}

impl Viewer {
    /// Creates a new viewer showing a freshly generated oak.
    ///
    /// The oak preset is valid by construction, so the initial
    /// generation cannot fail; the camera starts zoomed out enough to
    /// frame a four-generation tree with the root near the bottom.
    pub fn new() -> Self {
        let species = Species::Oak;
        let params = species.params();

        let mut viewer = Self {
            species,
            params,
            structure: Structure {
                nodes: Vec::new(),
                bounds: Bounds::of_nodes(&[]),
            },
            expanded_len: 0,
            last_error: None,
            zoom: 60.0,
            pan: egui::vec2(0.0, 150.0),
        };
        viewer.regenerate();
        viewer
    }

    /// Runs the full pipeline (expand, then build) with the current
    /// parameters.
    ///
    /// On success the structure and expanded-length readouts are
    /// replaced; on failure the previous structure stays on screen and
    /// the error message is stored for the status bar.
    fn regenerate(&mut self) {
        let result = rewriter::expand(&self.params.axiom, &self.params.rules, self.params.iterations)
            .and_then(|expanded| {
                builder::build(&expanded, &self.params.draw, self.params.max_depth)
                    .map(|structure| (expanded.chars().count(), structure))
            });

        match result {
            Ok((len, structure)) => {
                self.expanded_len = len;
                self.structure = structure;
                self.last_error = None;
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
            }
        }
    }

    /// Switches to a species preset and regenerates immediately.
    fn select_species(&mut self, species: Species) {
        self.species = species;
        self.params = species.params();
        self.regenerate();
    }

    /// Converts a world-space position to screen-space.
    ///
    /// World coordinates are scaled by `zoom`, offset by `pan`, and then
    /// centered inside the given `rect`. The y-axis is flipped so that
    /// positive y (the default growth direction) goes up on screen.
    fn world_to_screen(&self, p: Vec2, rect: egui::Rect) -> egui::Pos2 {
        let center = rect.center();
        egui::pos2(
            center.x + p.x * self.zoom + self.pan.x,
            center.y - p.y * self.zoom + self.pan.y,
        )
    }

    /// Converts a screen-space position back to world-space.
    ///
    /// Inverse of [`Viewer::world_to_screen`] (up to floating point
    /// rounding), using the same `zoom`, `pan`, and `rect` center.
    fn screen_to_world(&self, p: egui::Pos2, rect: egui::Rect) -> Vec2 {
        let center = rect.center();
        let x = (p.x - center.x - self.pan.x) / self.zoom;
        let y = (center.y - p.y + self.pan.y) / self.zoom;
        Vec2::new(x, y)
    }

    /// Segment color for a branch depth: trunk brown fading toward
    /// foliage green as nesting deepens.
    fn depth_color(depth: u32) -> egui::Color32 {
        let t = (depth.min(5) as f32) / 5.0;
        let lerp = |a: f32, b: f32| (a + (b - a) * t) as u8;
        egui::Color32::from_rgb(lerp(139.0, 70.0), lerp(90.0, 170.0), lerp(43.0, 60.0))
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the top panel UI (species choice, regeneration, zoom).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                for species in Species::ALL {
                    if ui
                        .selectable_label(self.species == species, species.name())
                        .clicked()
                    {
                        self.select_species(species);
                    }
                }

                ui.separator();

                if ui.button("Regenerate").clicked() {
                    self.regenerate();
                }

                if ui.button("Reset params").clicked() {
                    self.params = self.species.params();
                    self.regenerate();
                }

                ui.separator();
                ui.add(egui::Slider::new(&mut self.zoom, 5.0..=300.0).text("Zoom"));
            });
        });
    }

    /// Builds the bottom status bar (error / symbol count / node count /
    /// bounds extent).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let size = self.structure.bounds.size();
                ui.label(format!("extent = {:.2} x {:.2}", size.x, size.y));
                ui.separator();
                ui.label(format!("nodes = {}", self.structure.nodes.len()));
                ui.label(format!("symbols = {}", self.expanded_len));

                if let Some(err) = &self.last_error {
                    ui.separator();
                    ui.colored_label(egui::Color32::LIGHT_RED, err);
                }
            });
        });
    }

    /// Builds the right-hand configuration panel for the grammar and
    /// drawing parameters.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Params");

                ui.separator();
                ui.label("Grammar");
                ui.horizontal(|ui| {
                    ui.label("iterations:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.iterations)
                            .range(0..=6)
                            .speed(1.0),
                    );
                });
                ui.horizontal(|ui| {
                    ui.label("max_depth:");
                    ui.add(
                        egui::DragValue::new(&mut self.params.max_depth)
                            .range(0..=10)
                            .speed(1.0),
                    );
                });

                ui.separator();
                ui.label("Turning");
                Self::labeled_drag_f32(
                    ui,
                    "turn_angle_deg:",
                    &mut self.params.draw.turn_angle_deg,
                    -180.0..=180.0,
                    0.1,
                );

                ui.separator();
                ui.label("Decay");
                Self::labeled_drag_f32(
                    ui,
                    "length_decay:",
                    &mut self.params.draw.length_decay,
                    0.05..=1.0,
                    0.01,
                );
                Self::labeled_drag_f32(
                    ui,
                    "thickness_decay:",
                    &mut self.params.draw.thickness_decay,
                    0.05..=1.0,
                    0.01,
                );

                ui.separator();
                ui.label("Base segment");
                Self::labeled_drag_f32(
                    ui,
                    "base_step_len:",
                    &mut self.params.draw.base_step_len,
                    0.0..=5.0,
                    0.05,
                );
                Self::labeled_drag_f32(
                    ui,
                    "base_thickness:",
                    &mut self.params.draw.base_thickness,
                    0.0..=2.0,
                    0.02,
                );

                ui.separator();
                if ui.button("Apply").clicked() {
                    self.regenerate();
                }
            });
    }

    /// Builds the central panel where the tree is drawn and panned/zoomed.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let response = ui.allocate_response(ui.available_size(), egui::Sense::click_and_drag());
            let rect = response.rect;
            let painter = ui.painter_at(rect);

            // Pan with drag.
            if response.dragged() {
                let delta = response.drag_delta();
                self.pan += delta;
            }

            // Zoom around the mouse cursor.
            let scroll = ctx.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let pointer_screen = response.hover_pos().unwrap_or(rect.center());

                let world_before = self.screen_to_world(pointer_screen, rect);

                let factor = (1.0 + scroll * 0.001).clamp(0.5, 2.0);
                self.zoom = (self.zoom * factor).clamp(5.0, 300.0);

                let screen_after = self.world_to_screen(world_before, rect);
                self.pan += pointer_screen - screen_after;
            }

            // Draw each node as a tapering segment from its pre-move
            // position along its heading. The default turn axis keeps the
            // geometry in the XY plane, so the projection just drops z.
            for node in &self.structure.nodes {
                let end = node.pos + node.dir * self.params.draw.step_len(node.depth);

                let a = self.world_to_screen(Vec2::new(node.pos.x, node.pos.y), rect);
                let b = self.world_to_screen(Vec2::new(end.x, end.y), rect);

                let width = (node.thickness * self.zoom * 0.2).max(1.0);
                painter.line_segment([a, b], egui::Stroke::new(width, Self::depth_color(node.depth)));
            }
        });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn test_rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::Pos2::new(0.0, 0.0), egui::vec2(800.0, 600.0))
    }

    #[test]
    fn world_to_screen_and_back_is_roundtrip() {
        let mut viewer = Viewer::new();
        // Use non-trivial zoom and pan to exercise the math.
        viewer.zoom = 42.0;
        viewer.pan = egui::vec2(15.0, -7.0);
        let rect = test_rect();

        let world_points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, -5.0),
            Vec2::new(-3.5, 8.25),
        ];

        let eps = 1e-4;

        for p in world_points {
            let screen = viewer.world_to_screen(p, rect);
            let back = viewer.screen_to_world(screen, rect);

            assert!(
                (back.x - p.x).abs() < eps && (back.y - p.y).abs() < eps,
                "roundtrip mismatch: p={:?}, back={:?}",
                p,
                back
            );
        }
    }

    #[test]
    fn new_viewer_starts_with_a_generated_oak() {
        let viewer = Viewer::new();

        assert_eq!(viewer.species, Species::Oak);
        assert!(!viewer.structure.nodes.is_empty());
        assert!(viewer.expanded_len > 0);
        assert!(viewer.last_error.is_none());
    }

    #[test]
    fn selecting_a_species_replaces_params_and_structure() {
        let mut viewer = Viewer::new();
        let oak_nodes = viewer.structure.nodes.len();

        viewer.select_species(Species::Pine);

        assert_eq!(viewer.species, Species::Pine);
        assert_eq!(viewer.params, Species::Pine.params());
        // Pine's rule produces a different expansion than oak's.
        assert_ne!(viewer.structure.nodes.len(), oak_nodes);
    }

    #[test]
    fn invalid_params_keep_the_previous_structure_and_report_the_error() {
        let mut viewer = Viewer::new();
        let nodes_before = viewer.structure.nodes.len();

        viewer.params.draw.base_step_len = 0.0;
        viewer.regenerate();

        assert!(viewer.last_error.is_some());
        assert_eq!(viewer.structure.nodes.len(), nodes_before);

        // Fixing the parameter clears the error on the next attempt.
        viewer.params.draw.base_step_len = 1.0;
        viewer.regenerate();
        assert!(viewer.last_error.is_none());
    }
}
