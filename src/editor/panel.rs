use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPlugin, EguiPrimaryContextPass};
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::settings::{
    AmbientSource, FogMode, ReflectionSource, SceneRenderSettings, REFLECTION_RESOLUTIONS,
};
use crate::snapshot::{CommitSnapshot, RenderSettingsSnapshot};

/// Panel visibility plus the three group-disclosure flags.
#[derive(Resource)]
pub struct PanelState {
    pub show_panel: bool,
    pub show_inspector: bool,
    pub environment_open: bool,
    pub mixed_lighting_open: bool,
    pub other_settings_open: bool,
}

impl Default for PanelState {
    fn default() -> Self {
        Self {
            show_panel: true,
            show_inspector: false,
            environment_open: false,
            mixed_lighting_open: false,
            other_settings_open: false,
        }
    }
}

pub struct SnapshotEditorPlugin;

impl Plugin for SnapshotEditorPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<EguiPlugin>() {
            app.add_plugins(EguiPlugin::default());
        }
        app.add_plugins(WorldInspectorPlugin::new().run_if(should_show_inspector));

        app.init_resource::<PanelState>()
            .add_systems(Update, toggle_panel)
            .add_systems(EguiPrimaryContextPass, snapshot_panel_ui);
    }
}

fn should_show_inspector(state: Res<PanelState>) -> bool {
    state.show_inspector
}

fn toggle_panel(mut state: ResMut<PanelState>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::F3) {
        state.show_panel = !state.show_panel;
    }
    if keys.just_pressed(KeyCode::F4) {
        state.show_inspector = !state.show_inspector;
    }
}

fn snapshot_panel_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<PanelState>,
    live: Res<SceneRenderSettings>,
    mut commits: MessageWriter<CommitSnapshot>,
    mut query: Query<(Entity, &mut RenderSettingsSnapshot)>,
) {
    if !state.show_panel {
        return;
    }
    let Ok((entity, mut snapshot)) = query.single_mut() else {
        return;
    };
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Window::new("Render Settings Snapshot").show(ctx, |ui| {
        if snapshot.baked {
            // Edit a clone so change detection on the component only fires
            // when a field really moved
            let mut edited = snapshot.clone();
            draw_field_groups(ui, &mut state, &mut edited);
            if edited != *snapshot {
                *snapshot = edited;
            }
            ui.separator();
        }

        ui.horizontal(|ui| {
            if ui
                .add_enabled(snapshot.baked, egui::Button::new("Clear"))
                .clicked()
            {
                snapshot.reset();
                commits.write(CommitSnapshot { entity });
                info!("Cleared render settings snapshot on {:?}", entity);
            }
            if ui.button("Bake").clicked() {
                snapshot.capture_from(&live);
                commits.write(CommitSnapshot { entity });
                info!("Baked live render settings into snapshot on {:?}", entity);
            }
        });
    });
}

/// The three foldout groups. Headers stay interactive; every field inside
/// is rendered disabled, the snapshot is read-only once baked.
fn draw_field_groups(ui: &mut egui::Ui, state: &mut PanelState, snapshot: &mut RenderSettingsSnapshot) {
    if foldout(ui, &mut state.environment_open, "Environment") {
        ui.add_enabled_ui(false, |ui| {
            ui.indent("environment", |ui| draw_environment(ui, snapshot));
        });
    }
    if foldout(ui, &mut state.mixed_lighting_open, "Mixed Lighting") {
        ui.add_enabled_ui(false, |ui| {
            ui.indent("mixed_lighting", |ui| {
                color_field(ui, "Realtime Shadow Color", &mut snapshot.subtractive_shadow_color);
            });
        });
    }
    if foldout(ui, &mut state.other_settings_open, "Other Settings") {
        ui.add_enabled_ui(false, |ui| {
            ui.indent("other_settings", |ui| draw_other_settings(ui, snapshot));
        });
    }
}

fn draw_environment(ui: &mut egui::Ui, snapshot: &mut RenderSettingsSnapshot) {
    reference_field(ui, "Skybox Material", &mut snapshot.skybox);
    reference_field(ui, "Sun Source", &mut snapshot.sun);

    ui.add_space(4.0);
    ui.label("Environment Lighting");
    ui.indent("environment_lighting", |ui| {
        ui.horizontal(|ui| {
            ui.label("Source");
            egui::ComboBox::from_id_salt("ambient_source")
                .selected_text(snapshot.ambient_source.label())
                .show_ui(ui, |ui| {
                    for source in AmbientSource::ALL {
                        ui.selectable_value(&mut snapshot.ambient_source, source, source.label());
                    }
                });
        });
        match snapshot.ambient_source {
            AmbientSource::Trilight => {
                color_field(ui, "Sky Color", &mut snapshot.ambient_sky_color);
                color_field(ui, "Equator Color", &mut snapshot.ambient_equator_color);
                color_field(ui, "Ground Color", &mut snapshot.ambient_ground_color);
            }
            AmbientSource::Flat => {
                color_field(ui, "Ambient Color", &mut snapshot.ambient_sky_color);
            }
            AmbientSource::Skybox => {
                if snapshot.skybox.is_none() {
                    color_field(ui, "Ambient Color", &mut snapshot.ambient_sky_color);
                } else {
                    ui.add(
                        egui::Slider::new(&mut snapshot.ambient_intensity, 0.0..=8.0)
                            .text("Intensity Multiplier"),
                    );
                }
            }
        }
    });

    ui.add_space(4.0);
    ui.label("Environment Reflections");
    ui.indent("environment_reflections", |ui| {
        ui.horizontal(|ui| {
            ui.label("Source");
            egui::ComboBox::from_id_salt("reflection_source")
                .selected_text(snapshot.reflection_source.label())
                .show_ui(ui, |ui| {
                    for source in ReflectionSource::ALL {
                        ui.selectable_value(
                            &mut snapshot.reflection_source,
                            source,
                            source.label(),
                        );
                    }
                });
        });
        match snapshot.reflection_source {
            ReflectionSource::Skybox => {
                ui.horizontal(|ui| {
                    ui.label("Resolution");
                    egui::ComboBox::from_id_salt("reflection_resolution")
                        .selected_text(snapshot.reflection_resolution.to_string())
                        .show_ui(ui, |ui| {
                            for resolution in REFLECTION_RESOLUTIONS {
                                ui.selectable_value(
                                    &mut snapshot.reflection_resolution,
                                    resolution,
                                    resolution.to_string(),
                                );
                            }
                        });
                });
            }
            ReflectionSource::Custom => {
                reference_field(ui, "Cubemap", &mut snapshot.custom_reflection);
            }
        }
        ui.add(
            egui::Slider::new(&mut snapshot.reflection_intensity, 0.0..=1.0)
                .text("Intensity Multiplier"),
        );
        ui.add(egui::Slider::new(&mut snapshot.reflection_bounces, 1..=5).text("Bounces"));
    });
}

fn draw_other_settings(ui: &mut egui::Ui, snapshot: &mut RenderSettingsSnapshot) {
    ui.checkbox(&mut snapshot.fog, "Fog");
    if snapshot.fog {
        ui.indent("fog", |ui| {
            color_field(ui, "Color", &mut snapshot.fog_color);
            ui.horizontal(|ui| {
                ui.label("Mode");
                egui::ComboBox::from_id_salt("fog_mode")
                    .selected_text(snapshot.fog_mode.label())
                    .show_ui(ui, |ui| {
                        for mode in FogMode::ALL {
                            ui.selectable_value(&mut snapshot.fog_mode, mode, mode.label());
                        }
                    });
            });
            match snapshot.fog_mode {
                FogMode::Linear => {
                    value_field(ui, "Start", &mut snapshot.fog_start_distance);
                    value_field(ui, "End", &mut snapshot.fog_end_distance);
                }
                _ => {
                    value_field(ui, "Density", &mut snapshot.fog_density);
                }
            }
        });
    }
    ui.add(egui::Slider::new(&mut snapshot.halo_strength, 0.0..=1.0).text("Halo Strength"));
    value_field(ui, "Flare Fade Speed", &mut snapshot.flare_fade_speed);
    ui.add(egui::Slider::new(&mut snapshot.flare_strength, 0.0..=1.0).text("Flare Strength"));
}

fn foldout(ui: &mut egui::Ui, open: &mut bool, title: &str) -> bool {
    if ui.selectable_label(*open, title).clicked() {
        *open = !*open;
    }
    *open
}

fn color_field(ui: &mut egui::Ui, label: &str, color: &mut Color) {
    let srgba = color.to_srgba();
    let mut rgba = [srgba.red, srgba.green, srgba.blue, srgba.alpha];
    ui.horizontal(|ui| {
        ui.label(label);
        if ui.color_edit_button_rgba_unmultiplied(&mut rgba).changed() {
            *color = Color::srgba(rgba[0], rgba[1], rgba[2], rgba[3]);
        }
    });
}

/// Weak object references are asset paths / entity names, shown as text.
fn reference_field(ui: &mut egui::Ui, label: &str, value: &mut Option<String>) {
    let mut text = value.clone().unwrap_or_default();
    ui.horizontal(|ui| {
        ui.label(label);
        if ui.text_edit_singleline(&mut text).changed() {
            *value = (!text.is_empty()).then_some(text);
        }
    });
}

fn value_field(ui: &mut egui::Ui, label: &str, value: &mut f32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.add(egui::DragValue::new(value).speed(0.1));
    });
}
