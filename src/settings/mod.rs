pub mod live;
pub mod plugin;
pub mod types;

pub use live::{sync_ambient_light, sync_distance_fog, SceneRenderSettings};
pub use plugin::SceneSettingsPlugin;
pub use types::{AmbientSource, FogMode, ReflectionSource, REFLECTION_RESOLUTIONS};
