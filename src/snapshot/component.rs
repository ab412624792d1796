use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::settings::{AmbientSource, FogMode, ReflectionSource, SceneRenderSettings};

/// Baked copy of the scene's global render settings, attached to a prefab
/// entity so the configuration travels with it.
///
/// Until `baked` is set by a capture, every other field is meaningless and
/// must not be pushed into the live settings.
#[derive(Component, Serialize, Deserialize, Reflect, Clone, Debug, PartialEq)]
#[reflect(Component)]
pub struct RenderSettingsSnapshot {
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
    /// True once a capture has been taken. Gates both the panel's field
    /// groups and the apply-on-load path.
    pub baked: bool,
    /// Crate version recorded at bake time, for forward-compatibility
    /// diagnostics only.
    pub schema_version: String,
}

impl Default for RenderSettingsSnapshot {
    fn default() -> Self {
        Self {
            ambient_source: AmbientSource::default(),
            ambient_sky_color: Color::NONE,
            ambient_equator_color: Color::NONE,
            ambient_ground_color: Color::NONE,
            ambient_intensity: 0.0,
            reflection_source: ReflectionSource::default(),
            reflection_resolution: 0,
            reflection_intensity: 0.0,
            reflection_bounces: 0,
            custom_reflection: None,
            sun: None,
            skybox: None,
            subtractive_shadow_color: Color::NONE,
            fog: false,
            fog_mode: FogMode::default(),
            fog_color: Color::NONE,
            fog_density: 0.0,
            fog_start_distance: 0.0,
            fog_end_distance: 0.0,
            halo_strength: 0.0,
            flare_strength: 0.0,
            flare_fade_speed: 0.0,
            baked: false,
            schema_version: String::new(),
        }
    }
}

/// Transient marker: this snapshot has already pushed its values into the
/// live settings during the current session. Never serialized, so it is
/// absent again on every fresh load.
#[derive(Component, Reflect, Debug, Default)]
#[reflect(Component)]
pub struct SettingsApplied;

impl RenderSettingsSnapshot {
    /// Full overwrite of every field from the live settings. Marks the
    /// snapshot baked and records the current crate version.
    pub fn capture_from(&mut self, live: &SceneRenderSettings) {
        self.baked = true;
        self.schema_version = env!("CARGO_PKG_VERSION").to_string();
        self.halo_strength = live.halo_strength;
        self.reflection_resolution = live.reflection_resolution;
        self.reflection_source = live.reflection_source;
        self.reflection_bounces = live.reflection_bounces;
        self.reflection_intensity = live.reflection_intensity;
        self.custom_reflection = live.custom_reflection.clone();
        self.sun = live.sun.clone();
        self.skybox = live.skybox.clone();
        self.subtractive_shadow_color = live.subtractive_shadow_color;
        self.ambient_intensity = live.ambient_intensity;
        self.ambient_ground_color = live.ambient_ground_color;
        self.ambient_equator_color = live.ambient_equator_color;
        self.ambient_sky_color = live.ambient_sky_color;
        self.ambient_source = live.ambient_source;
        self.fog = live.fog;
        self.fog_mode = live.fog_mode;
        self.fog_color = live.fog_color;
        self.fog_density = live.fog_density;
        self.fog_start_distance = live.fog_start_distance;
        self.fog_end_distance = live.fog_end_distance;
        self.flare_strength = live.flare_strength;
        self.flare_fade_speed = live.flare_fade_speed;
    }

    /// Write the stored fields back into the live settings. Plain field
    /// assignments, no validation; the renderer clamps on its own. Fog
    /// density only carries meaning for the exponential modes, so a linear
    /// snapshot leaves the target's density untouched.
    pub fn apply_to(&self, live: &mut SceneRenderSettings) {
        live.halo_strength = self.halo_strength;
        live.reflection_resolution = self.reflection_resolution;
        live.reflection_source = self.reflection_source;
        live.reflection_bounces = self.reflection_bounces;
        live.reflection_intensity = self.reflection_intensity;
        live.custom_reflection = self.custom_reflection.clone();
        live.sun = self.sun.clone();
        live.skybox = self.skybox.clone();
        live.subtractive_shadow_color = self.subtractive_shadow_color;
        live.ambient_intensity = self.ambient_intensity;
        live.ambient_ground_color = self.ambient_ground_color;
        live.ambient_equator_color = self.ambient_equator_color;
        live.ambient_sky_color = self.ambient_sky_color;
        live.ambient_source = self.ambient_source;
        live.fog = self.fog;
        live.fog_mode = self.fog_mode;
        live.fog_color = self.fog_color;
        live.fog_start_distance = self.fog_start_distance;
        live.fog_end_distance = self.fog_end_distance;
        if self.fog_mode != FogMode::Linear {
            live.fog_density = self.fog_density;
        }
        live.flare_strength = self.flare_strength;
        live.flare_fade_speed = self.flare_fade_speed;
    }

    /// Back to the unbaked state: every field at its default, including
    /// `baked`. The session marker is deliberately left alone.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Apply-once path. `Changed` covers both a freshly spawned snapshot
/// (activation) and a later mutation (revalidation); the marker ensures the
/// live settings are only written the first time either fires.
pub fn apply_baked_snapshots(
    mut commands: Commands,
    mut live: ResMut<SceneRenderSettings>,
    query: Query<
        (Entity, &RenderSettingsSnapshot),
        (Changed<RenderSettingsSnapshot>, Without<SettingsApplied>),
    >,
) {
    for (entity, snapshot) in query.iter() {
        if !snapshot.baked {
            continue;
        }
        snapshot.apply_to(&mut live);
        commands.entity(entity).insert(SettingsApplied);
        info!(
            "Applied baked render settings from {:?} (schema {})",
            entity, snapshot.schema_version
        );
    }
}
