use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Where ambient lighting comes from.
#[derive(Serialize, Deserialize, Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AmbientSource {
    #[default]
    Skybox,
    /// Three-color gradient: sky, equator, ground.
    Trilight,
    Flat,
}

impl AmbientSource {
    pub const ALL: [AmbientSource; 3] =
        [AmbientSource::Skybox, AmbientSource::Trilight, AmbientSource::Flat];

    pub fn label(self) -> &'static str {
        match self {
            AmbientSource::Skybox => "Skybox",
            AmbientSource::Trilight => "Gradient",
            AmbientSource::Flat => "Color",
        }
    }
}

/// Where the default environment reflection comes from.
#[derive(Serialize, Deserialize, Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReflectionSource {
    #[default]
    Skybox,
    Custom,
}

impl ReflectionSource {
    pub const ALL: [ReflectionSource; 2] = [ReflectionSource::Skybox, ReflectionSource::Custom];

    pub fn label(self) -> &'static str {
        match self {
            ReflectionSource::Skybox => "Skybox",
            ReflectionSource::Custom => "Custom",
        }
    }
}

/// Distance fog falloff curve.
#[derive(Serialize, Deserialize, Reflect, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FogMode {
    #[default]
    Linear,
    Exponential,
    ExponentialSquared,
}

impl FogMode {
    pub const ALL: [FogMode; 3] =
        [FogMode::Linear, FogMode::Exponential, FogMode::ExponentialSquared];

    pub fn label(self) -> &'static str {
        match self {
            FogMode::Linear => "Linear",
            FogMode::Exponential => "Exponential",
            FogMode::ExponentialSquared => "Exponential Squared",
        }
    }
}

/// Cubemap resolutions offered by the reflection resolution picker. The
/// stored value itself is permissive; only the panel constrains it.
pub const REFLECTION_RESOLUTIONS: [u32; 8] = [16, 32, 64, 128, 256, 512, 1024, 2048];
