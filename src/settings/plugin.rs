use std::path::Path;

use bevy::prelude::*;

use crate::config::loader::load_config;
use crate::settings::live::{sync_ambient_light, sync_distance_fog, SceneRenderSettings};
use crate::settings::types::{AmbientSource, FogMode, ReflectionSource};

const SETTINGS_CONFIG_PATH: &str = "assets/config/render_settings.yaml";

pub struct SceneSettingsPlugin;

impl Plugin for SceneSettingsPlugin {
    fn build(&self, app: &mut App) {
        let settings = load_config::<SceneRenderSettings>(Path::new(SETTINGS_CONFIG_PATH))
            .unwrap_or_else(|e| {
                warn!("Failed to load render settings config: {}, using defaults", e);
                SceneRenderSettings::default()
            });

        app.insert_resource(settings)
            .register_type::<SceneRenderSettings>()
            .register_type::<AmbientSource>()
            .register_type::<ReflectionSource>()
            .register_type::<FogMode>()
            .add_systems(Update, (sync_ambient_light, sync_distance_fog));
    }
}
