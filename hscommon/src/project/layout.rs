use serde::{Deserialize, Serialize};

/// One persisted editor window: which asset it was showing, where it sat,
/// and the editor's own opaque UI-state blob. The blob's layout is owned
/// entirely by the editor type that produced it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub path: String,
    #[serde(default)]
    pub state: Vec<u8>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// Ordered list of open editor windows, saved with the project and restored
/// on the next load. Order matches the windows menu.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct WorkspaceLayout {
    pub windows: Vec<WindowSnapshot>,
}

impl WorkspaceLayout {
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }
}
