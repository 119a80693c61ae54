use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::camera::interactive::InteractiveCamera;
use crate::registry::starfield::StarfieldSettings;
use crate::starfield::field::Starfield;

/// Tracks debug panel visibility.
#[derive(Resource, Default)]
pub struct DebugUiState {
    pub visible: bool,
}

/// Toggles debug panel visibility on F3 press.
pub fn toggle_debug_panel(keyboard: Res<ButtonInput<KeyCode>>, mut state: ResMut<DebugUiState>) {
    if keyboard.just_pressed(KeyCode::F3) {
        state.visible = !state.visible;
    }
}

/// Draws the debug inspector panel using egui.
pub fn draw_debug_panel(
    mut contexts: EguiContexts,
    state: Res<DebugUiState>,
    settings: Res<StarfieldSettings>,
    mut field: ResMut<Starfield>,
    mut camera_query: Query<&mut InteractiveCamera>,
    diagnostics: Res<DiagnosticsStore>,
    entities: Query<Entity>,
) -> Result {
    if !state.visible {
        return Ok(());
    }

    let ctx = contexts.ctx_mut()?;

    let panel_frame = egui::Frame::NONE
        .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
        .inner_margin(egui::Margin::same(8))
        .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)));

    egui::SidePanel::right("debug_panel")
        .default_width(280.0)
        .resizable(false)
        .frame(panel_frame)
        .show(ctx, |ui| {
            ui.heading("Debug Panel");
            ui.separator();

            // --- Performance ---
            egui::CollapsingHeader::new(egui::RichText::new("Performance").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("perf_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("FPS:");
                            let fps_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FPS)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.colored_label(egui::Color32::LIGHT_GREEN, &fps_text);
                            ui.end_row();

                            ui.label("Frame time:");
                            let ft_text = diagnostics
                                .get(&FrameTimeDiagnosticsPlugin::FRAME_TIME)
                                .and_then(|d| d.smoothed())
                                .map(|v| format!("{v:.1}ms"))
                                .unwrap_or_else(|| "...".to_string());
                            ui.label(&ft_text);
                            ui.end_row();

                            ui.label("Entities:");
                            ui.label(format!("{}", entities.iter().count()));
                            ui.end_row();
                        });
                });

            // --- Camera ---
            egui::CollapsingHeader::new(egui::RichText::new("Camera").strong())
                .default_open(true)
                .show(ui, |ui| {
                    if let Ok(mut camera) = camera_query.single_mut() {
                        let pos = camera.position();
                        egui::Grid::new("camera_grid")
                            .num_columns(2)
                            .spacing([20.0, 4.0])
                            .show(ui, |ui| {
                                ui.label("Position:");
                                ui.monospace(format!("{:.1}, {:.1}", pos.x, pos.y));
                                ui.end_row();

                                ui.label("Responders:");
                                ui.label(format!("{}", camera.responder_count()));
                                ui.end_row();
                            });
                        ui.checkbox(&mut camera.enable_interaction, "Dispatch position changes");
                    } else {
                        ui.label("No interactive camera");
                    }
                });

            // --- Starfield ---
            egui::CollapsingHeader::new(egui::RichText::new("Starfield").strong())
                .default_open(true)
                .show(ui, |ui| {
                    egui::Grid::new("starfield_grid")
                        .num_columns(2)
                        .spacing([20.0, 4.0])
                        .show(ui, |ui| {
                            ui.label("Mode:");
                            ui.monospace(format!("{:?}", settings.mode));
                            ui.end_row();

                            ui.label("Stars:");
                            ui.label(format!("{}", field.stars().len()));
                            ui.end_row();

                            ui.label("Layers:");
                            ui.label(format!("{}", field.layers()));
                            ui.end_row();

                            ui.label("Extents:");
                            let extents = field.extents();
                            ui.monospace(format!(
                                "{:.0} × {:.0}",
                                extents.width(),
                                extents.height()
                            ));
                            ui.end_row();
                        });

                    ui.separator();
                    ui.add(
                        egui::Slider::new(&mut field.velocity, 0.0..=200.0).text("velocity"),
                    );
                    let mut angle = field.direction.to_angle();
                    if ui
                        .add(
                            egui::Slider::new(
                                &mut angle,
                                -std::f32::consts::PI..=std::f32::consts::PI,
                            )
                            .text("direction"),
                        )
                        .changed()
                    {
                        field.direction = Vec2::from_angle(angle);
                    }
                    ui.add(
                        egui::Slider::new(&mut field.camera_ratio, 0.0..=30.0)
                            .text("camera ratio"),
                    );
                });
        });

    Ok(())
}
