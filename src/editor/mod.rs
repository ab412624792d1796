pub mod panel;

pub use panel::{PanelState, SnapshotEditorPlugin};
