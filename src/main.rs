use bevy::pbr::DistanceFog;
use bevy::prelude::*;
use render_snapshot::editor::SnapshotEditorPlugin;
use render_snapshot::settings::SceneSettingsPlugin;
use render_snapshot::snapshot::{PrefabLink, RenderSettingsSnapshot, SnapshotPlugin};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins)
        .add_plugins(SceneSettingsPlugin)
        .add_plugins(SnapshotPlugin)
        .add_plugins(SnapshotEditorPlugin)
        .add_systems(Startup, setup_demo_scene)
        .run();
}

fn setup_demo_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(0.0, 4.0, 12.0).looking_at(Vec3::ZERO, Vec3::Y),
        DistanceFog::default(),
    ));

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 15_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO)
            .looking_to(Vec3::new(-0.3, -1.0, -0.2).normalize(), Vec3::Y),
    ));

    // Something for the lighting to land on
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(40.0, 40.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.35, 0.45, 0.35),
            ..default()
        })),
    ));
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(2.0, 2.0, 2.0))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb(0.7, 0.6, 0.5),
            ..default()
        })),
        Transform::from_xyz(0.0, 1.0, 0.0),
    ));

    // The snapshot prefab instance the panel binds to
    commands.spawn((
        Name::new("Render Settings Prefab"),
        RenderSettingsSnapshot::default(),
        PrefabLink {
            path: "assets/prefabs/render_settings_snapshot.yaml".into(),
            is_template: false,
        },
    ));
}
