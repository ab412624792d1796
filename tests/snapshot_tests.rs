use bevy::prelude::*;
use render_snapshot::settings::{AmbientSource, FogMode, ReflectionSource, SceneRenderSettings};
use render_snapshot::snapshot::RenderSettingsSnapshot;
use rstest::rstest;

/// A live target with every field away from its default.
fn sample_live() -> SceneRenderSettings {
    SceneRenderSettings {
        ambient_source: AmbientSource::Trilight,
        ambient_sky_color: Color::srgb(0.9, 0.1, 0.2),
        ambient_equator_color: Color::srgb(0.3, 0.4, 0.5),
        ambient_ground_color: Color::srgb(0.1, 0.2, 0.1),
        ambient_intensity: 2.5,
        reflection_source: ReflectionSource::Custom,
        reflection_resolution: 512,
        reflection_intensity: 0.75,
        reflection_bounces: 3,
        custom_reflection: Some("cubemaps/harbor.ktx2".to_string()),
        sun: Some("Sun".to_string()),
        skybox: Some("materials/overcast_sky.yaml".to_string()),
        subtractive_shadow_color: Color::srgb(0.2, 0.25, 0.4),
        fog: true,
        fog_mode: FogMode::Exponential,
        fog_color: Color::srgb(0.6, 0.6, 0.7),
        fog_density: 0.035,
        fog_start_distance: 15.0,
        fog_end_distance: 250.0,
        halo_strength: 0.8,
        flare_strength: 0.6,
        flare_fade_speed: 4.5,
    }
}

#[test]
fn capture_then_apply_restores_live_settings() {
    let original = sample_live();
    let mut live = original.clone();

    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&live);
    assert!(snapshot.baked);
    assert_eq!(snapshot.schema_version, env!("CARGO_PKG_VERSION"));

    // Scene drifts after the bake
    live = SceneRenderSettings::default();

    snapshot.apply_to(&mut live);
    assert_eq!(live, original);
}

#[test]
fn capture_is_a_full_overwrite() {
    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&sample_live());

    // Capture twice from different targets: the second wins everywhere
    let mut second = SceneRenderSettings::default();
    second.ambient_source = AmbientSource::Flat;
    second.ambient_sky_color = Color::srgb(1.0, 0.0, 0.0);
    snapshot.capture_from(&second);

    assert_eq!(snapshot.ambient_source, AmbientSource::Flat);
    assert_eq!(snapshot.ambient_sky_color, Color::srgb(1.0, 0.0, 0.0));
    assert_eq!(snapshot.custom_reflection, None);
    assert_eq!(snapshot.fog, false);
}

#[test]
fn reset_returns_every_field_to_default() {
    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&sample_live());
    snapshot.reset();

    assert_eq!(snapshot, RenderSettingsSnapshot::default());
    assert!(!snapshot.baked);
    assert!(snapshot.schema_version.is_empty());
    assert_eq!(snapshot.fog_start_distance, 0.0);
    assert_eq!(snapshot.sun, None);
}

#[test]
fn bake_captures_flat_ambient_color() {
    let mut live = SceneRenderSettings::default();
    live.ambient_source = AmbientSource::Flat;
    live.ambient_sky_color = Color::srgb(1.0, 0.0, 0.0);

    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&live);

    assert!(snapshot.baked);
    assert_eq!(snapshot.ambient_source, AmbientSource::Flat);
    assert_eq!(snapshot.ambient_sky_color, Color::srgb(1.0, 0.0, 0.0));
}

#[test]
fn linear_fog_apply_leaves_density_untouched() {
    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.baked = true;
    snapshot.fog = true;
    snapshot.fog_mode = FogMode::Linear;
    snapshot.fog_start_distance = 10.0;
    snapshot.fog_end_distance = 100.0;
    snapshot.fog_density = 0.9;

    let mut live = SceneRenderSettings::default();
    live.fog_density = 0.5;

    snapshot.apply_to(&mut live);

    assert!(live.fog);
    assert_eq!(live.fog_mode, FogMode::Linear);
    assert_eq!(live.fog_start_distance, 10.0);
    assert_eq!(live.fog_end_distance, 100.0);
    assert_eq!(live.fog_density, 0.5);
}

#[rstest]
#[case(FogMode::Exponential)]
#[case(FogMode::ExponentialSquared)]
fn exponential_fog_apply_writes_density(#[case] mode: FogMode) {
    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.baked = true;
    snapshot.fog = true;
    snapshot.fog_mode = mode;
    snapshot.fog_density = 0.07;

    let mut live = SceneRenderSettings::default();
    live.fog_density = 0.5;

    snapshot.apply_to(&mut live);

    assert_eq!(live.fog_mode, mode);
    assert_eq!(live.fog_density, 0.07);
}

#[test]
fn snapshot_survives_yaml_round_trip() {
    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&sample_live());

    let yaml = serde_yaml::to_string(&snapshot).expect("serialize snapshot");
    let restored: RenderSettingsSnapshot = serde_yaml::from_str(&yaml).expect("parse snapshot");
    assert_eq!(restored, snapshot);
}
