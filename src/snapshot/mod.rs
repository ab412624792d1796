pub mod component;
pub mod persist;
pub mod plugin;

pub use component::{apply_baked_snapshots, RenderSettingsSnapshot, SettingsApplied};
pub use persist::{commit_snapshots, CommitSnapshot, PrefabLink};
pub use plugin::SnapshotPlugin;
