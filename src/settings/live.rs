use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::types::{AmbientSource, FogMode, ReflectionSource};

/// The scene's live global render settings. Process-wide singleton; every
/// field is independently readable and writable, and the engine performs its
/// own clamping on whatever lands here.
///
/// Object references (sun light, skybox material, reflection cubemap) are
/// weak: entity names and asset paths owned elsewhere.
#[derive(Resource, Serialize, Deserialize, Reflect, Clone, Debug, PartialEq)]
#[reflect(Resource)]
pub struct SceneRenderSettings {
    pub ambient_source: AmbientSource,
    pub ambient_sky_color: Color,
    pub ambient_equator_color: Color,
    pub ambient_ground_color: Color,
    pub ambient_intensity: f32,
    pub reflection_source: ReflectionSource,
    pub reflection_resolution: u32,
    pub reflection_intensity: f32,
    pub reflection_bounces: u32,
    pub custom_reflection: Option<String>,
    pub sun: Option<String>,
    pub skybox: Option<String>,
    pub subtractive_shadow_color: Color,
    pub fog: bool,
    pub fog_mode: FogMode,
    pub fog_color: Color,
    pub fog_density: f32,
    pub fog_start_distance: f32,
    pub fog_end_distance: f32,
    pub halo_strength: f32,
    pub flare_strength: f32,
    pub flare_fade_speed: f32,
}

impl Default for SceneRenderSettings {
    fn default() -> Self {
        // Neutral daylight defaults, close to what a fresh scene starts with
        Self {
            ambient_source: AmbientSource::Skybox,
            ambient_sky_color: Color::srgb(0.21, 0.22, 0.25),
            ambient_equator_color: Color::srgb(0.11, 0.12, 0.13),
            ambient_ground_color: Color::srgb(0.05, 0.05, 0.04),
            ambient_intensity: 1.0,
            reflection_source: ReflectionSource::Skybox,
            reflection_resolution: 128,
            reflection_intensity: 1.0,
            reflection_bounces: 1,
            custom_reflection: None,
            sun: None,
            skybox: None,
            subtractive_shadow_color: Color::srgb(0.42, 0.48, 0.63),
            fog: false,
            fog_mode: FogMode::ExponentialSquared,
            fog_color: Color::srgb(0.5, 0.5, 0.5),
            fog_density: 0.01,
            fog_start_distance: 0.0,
            fog_end_distance: 300.0,
            halo_strength: 0.5,
            flare_strength: 1.0,
            flare_fade_speed: 3.0,
        }
    }
}

impl SceneRenderSettings {
    /// Ambient contribution the lighting systems should use, resolved per
    /// the current ambient source.
    pub fn resolved_ambient_color(&self) -> Color {
        match self.ambient_source {
            AmbientSource::Flat => self.ambient_sky_color,
            AmbientSource::Trilight => {
                let sky = self.ambient_sky_color.to_srgba();
                let equator = self.ambient_equator_color.to_srgba();
                let ground = self.ambient_ground_color.to_srgba();
                Color::srgba(
                    (sky.red + equator.red + ground.red) / 3.0,
                    (sky.green + equator.green + ground.green) / 3.0,
                    (sky.blue + equator.blue + ground.blue) / 3.0,
                    1.0,
                )
            }
            AmbientSource::Skybox => self.ambient_sky_color,
        }
    }

    pub fn fog_falloff(&self) -> FogFalloff {
        match self.fog_mode {
            FogMode::Linear => FogFalloff::Linear {
                start: self.fog_start_distance,
                end: self.fog_end_distance,
            },
            FogMode::Exponential => FogFalloff::Exponential {
                density: self.fog_density,
            },
            FogMode::ExponentialSquared => FogFalloff::ExponentialSquared {
                density: self.fog_density,
            },
        }
    }
}

/// Push the ambient fields into Bevy's ambient light and clear color.
pub fn sync_ambient_light(
    settings: Res<SceneRenderSettings>,
    mut ambient: ResMut<AmbientLight>,
    mut clear_color: ResMut<ClearColor>,
) {
    if !settings.is_changed() {
        return;
    }

    let color = settings.resolved_ambient_color();
    ambient.color = color;
    // A skybox-sourced ambient scales with the intensity multiplier, the
    // explicit color modes use it as-is
    let multiplier = match settings.ambient_source {
        AmbientSource::Skybox if settings.skybox.is_some() => settings.ambient_intensity,
        _ => 1.0,
    };
    ambient.brightness = 500.0 * multiplier.max(0.0);
    clear_color.0 = color;
}

/// Push the fog fields into every camera's distance fog.
pub fn sync_distance_fog(
    settings: Res<SceneRenderSettings>,
    mut fog_query: Query<&mut DistanceFog>,
) {
    if !settings.is_changed() {
        return;
    }

    for mut fog in fog_query.iter_mut() {
        if settings.fog {
            fog.color = settings.fog_color;
            fog.falloff = settings.fog_falloff();
        } else {
            // Fully transparent fog color reads as "off"
            fog.color = Color::NONE;
        }
    }
}
