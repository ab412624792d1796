use bevy::prelude::*;
use render_snapshot::settings::{AmbientSource, SceneRenderSettings};
use render_snapshot::snapshot::{apply_baked_snapshots, RenderSettingsSnapshot, SettingsApplied};

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(SceneRenderSettings::default())
        .add_systems(Update, apply_baked_snapshots);
    app
}

fn baked_snapshot() -> RenderSettingsSnapshot {
    let mut live = SceneRenderSettings::default();
    live.ambient_source = AmbientSource::Flat;
    live.ambient_sky_color = Color::srgb(0.8, 0.2, 0.2);
    live.halo_strength = 0.9;

    let mut snapshot = RenderSettingsSnapshot::default();
    snapshot.capture_from(&live);
    snapshot
}

#[test]
fn unbaked_snapshot_never_touches_live_settings() {
    let mut app = test_app();
    let entity = app
        .world_mut()
        .spawn(RenderSettingsSnapshot::default())
        .id();

    app.update();
    app.update();

    assert_eq!(
        *app.world().resource::<SceneRenderSettings>(),
        SceneRenderSettings::default()
    );
    assert!(!app.world().entity(entity).contains::<SettingsApplied>());
}

#[test]
fn baked_snapshot_applies_exactly_once() {
    let mut app = test_app();
    let snapshot = baked_snapshot();
    let entity = app.world_mut().spawn(snapshot.clone()).id();

    app.update();

    let live = app.world().resource::<SceneRenderSettings>();
    assert_eq!(live.ambient_source, AmbientSource::Flat);
    assert_eq!(live.halo_strength, 0.9);
    assert!(app.world().entity(entity).contains::<SettingsApplied>());

    // Scene drifts, later activations must not overwrite it again
    app.world_mut()
        .resource_mut::<SceneRenderSettings>()
        .halo_strength = 0.1;
    app.update();

    assert_eq!(
        app.world().resource::<SceneRenderSettings>().halo_strength,
        0.1
    );
}

#[test]
fn revalidation_after_apply_is_guarded() {
    let mut app = test_app();
    let entity = app.world_mut().spawn(baked_snapshot()).id();
    app.update();

    app.world_mut()
        .resource_mut::<SceneRenderSettings>()
        .halo_strength = 0.1;

    // Touching the component retriggers change detection, the session
    // marker still suppresses a second apply
    app.world_mut()
        .get_mut::<RenderSettingsSnapshot>(entity)
        .expect("snapshot component")
        .flare_strength = 0.33;
    app.update();

    assert_eq!(
        app.world().resource::<SceneRenderSettings>().halo_strength,
        0.1
    );
}

#[test]
fn cleared_snapshot_activation_is_a_noop() {
    let mut app = test_app();
    let entity = app.world_mut().spawn(baked_snapshot()).id();
    app.update();

    app.world_mut()
        .get_mut::<RenderSettingsSnapshot>(entity)
        .expect("snapshot component")
        .reset();
    app.world_mut()
        .resource_mut::<SceneRenderSettings>()
        .halo_strength = 0.42;
    app.update();

    let snapshot = app
        .world()
        .get::<RenderSettingsSnapshot>(entity)
        .expect("snapshot component");
    assert!(!snapshot.baked);
    assert_eq!(
        app.world().resource::<SceneRenderSettings>().halo_strength,
        0.42
    );
}

#[test]
fn fresh_unbaked_spawn_after_clear_stays_inert() {
    let mut app = test_app();
    app.world_mut().spawn(RenderSettingsSnapshot::default());
    app.update();

    // A second unbaked snapshot in the same world changes nothing either
    app.world_mut().spawn(RenderSettingsSnapshot::default());
    app.update();

    assert_eq!(
        *app.world().resource::<SceneRenderSettings>(),
        SceneRenderSettings::default()
    );
}
