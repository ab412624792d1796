use bevy::prelude::*;

use crate::snapshot::component::{
    apply_baked_snapshots, RenderSettingsSnapshot, SettingsApplied,
};
use crate::snapshot::persist::{commit_snapshots, CommitSnapshot};

pub struct SnapshotPlugin;

impl Plugin for SnapshotPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CommitSnapshot>()
            .register_type::<RenderSettingsSnapshot>()
            .register_type::<SettingsApplied>()
            .add_systems(Update, (apply_baked_snapshots, commit_snapshots));
    }
}
