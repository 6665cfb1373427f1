use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eframe::egui::{self, Context, Id, Pos2, Ui, Vec2};

use crate::shortcut::ShortcutDispatcher;

const DEFAULT_SIZE: Vec2 = Vec2::new(420.0, 360.0);

/// One open editor window. Identity is the path of the underlying asset;
/// the manager keeps at most one editor per path.
pub trait EditorWindow: Send {
    /// Stable identity: the asset path this editor was opened for.
    fn path(&self) -> &str;
    fn title(&self) -> &str;
    /// Builds the window for this frame.
    fn show(&mut self, ctx: &Context);
    fn is_visible(&self) -> bool;
    fn has_focus(&self) -> bool;
    fn defocus(&mut self);
    fn bring_to_front(&mut self);
    /// Window-scoped shortcuts, registered when this editor gains focus.
    fn register_shortcuts(&self, _shortcuts: &ShortcutDispatcher) {}
    /// Opaque UI-state blob persisted with the project layout.
    fn serialize_state(&self) -> Vec<u8> {
        Vec::new()
    }
    fn window_rect(&self) -> (Pos2, Vec2);
    /// Invoked exactly once when the manager drops this editor.
    fn cleanup(&mut self) {}
}

/// Shared bookkeeping every concrete editor composes: visibility, focus,
/// bring-to-front, the window rectangle recorded for layout snapshots, and
/// the close flag window shortcuts flip from outside the frame.
#[derive(Debug)]
pub struct EditorBase {
    path: String,
    title: String,
    visible: bool,
    focused: bool,
    bring_front: bool,
    close_requested: Arc<AtomicBool>,
    position: Pos2,
    size: Vec2,
}

impl EditorBase {
    pub fn new(path: impl Into<String>, icon: &str, position: Pos2, size: Option<Vec2>) -> Self {
        let path = path.into();
        let file_name = Path::new(&path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.clone());
        Self {
            title: format!("{icon} {file_name}"),
            path,
            visible: true,
            focused: false,
            bring_front: true,
            close_requested: Arc::new(AtomicBool::new(false)),
            position,
            size: size.unwrap_or(DEFAULT_SIZE),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn defocus(&mut self) {
        self.focused = false;
    }

    pub fn bring_to_front(&mut self) {
        self.bring_front = true;
    }

    pub fn rect(&self) -> (Pos2, Vec2) {
        (self.position, self.size)
    }

    /// Shared handle for the editor's close shortcut; setting it closes the
    /// window at the start of its next frame.
    pub fn close_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.close_requested)
    }

    /// The standard window-scoped close shortcut (Ctrl+W).
    pub fn register_close_shortcut(&self, shortcuts: &ShortcutDispatcher) {
        let close = self.close_handle();
        shortcuts.register_shortcut(
            move || close.store(true, Ordering::SeqCst),
            egui::Key::W,
            egui::Modifiers::COMMAND,
            false,
        );
    }

    /// Builds the surrounding `egui::Window` and maintains the shared
    /// bookkeeping. Focus is pointer-driven: a press landing inside this
    /// window (topmost wins, occlusion respected) sets the flag; the
    /// manager clears everyone else's on a handover.
    pub fn frame(&mut self, ctx: &Context, add_contents: impl FnOnce(&mut Ui)) {
        if self.close_requested.swap(false, Ordering::SeqCst) {
            self.visible = false;
            return;
        }

        let mut open = self.visible;
        let response = egui::Window::new(self.title.clone())
            .id(Id::new(&self.path))
            .default_pos(self.position)
            .default_size(self.size)
            .open(&mut open)
            .show(ctx, |ui| add_contents(ui));
        self.visible = open;

        if let Some(inner) = response {
            let rect = inner.response.rect;
            self.position = rect.min;
            self.size = rect.size();

            if self.bring_front {
                ctx.move_to_top(inner.response.layer_id);
                self.focused = true;
                self.bring_front = false;
            } else if ctx.input(|i| i.pointer.any_pressed())
                && inner.response.contains_pointer()
            {
                self.focused = true;
            }
        }
    }
}
