use std::path::PathBuf;

use bevy::prelude::*;

use crate::config::loader::save_config;
use crate::snapshot::component::RenderSettingsSnapshot;

/// Link between a snapshot entity and its backing prefab file.
#[derive(Component, Clone, Debug)]
pub struct PrefabLink {
    /// Where commits are written.
    pub path: PathBuf,
    /// True when this entity is the stored, file-backed template itself
    /// rather than a live instance. Templates are never written from here.
    pub is_template: bool,
}

/// Request to write an entity's snapshot back to its prefab file. Sent by
/// the editor panel after Bake and Clear.
#[derive(Message, Debug, Clone)]
pub struct CommitSnapshot {
    pub entity: Entity,
}

/// Handle commit requests. Entities without a prefab link, and entities
/// that are already stored templates, are silent no-ops.
pub fn commit_snapshots(
    mut requests: MessageReader<CommitSnapshot>,
    query: Query<(&RenderSettingsSnapshot, Option<&PrefabLink>)>,
) {
    for request in requests.read() {
        let Ok((snapshot, link)) = query.get(request.entity) else {
            continue;
        };
        let Some(link) = link else {
            continue;
        };
        if link.is_template {
            continue;
        }
        match save_config(&link.path, snapshot) {
            Ok(()) => info!("Committed render settings snapshot to {}", link.path.display()),
            Err(e) => warn!(
                "Failed to commit render settings snapshot to {}: {}",
                link.path.display(),
                e
            ),
        }
    }
}
