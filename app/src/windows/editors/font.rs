use eframe::egui::{Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

/// Raw view of a `.hsf` font definition.
pub struct FontEditor {
    base: EditorBase,
    bytes: Vec<u8>,
}

impl FontEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.is_empty() {
            return Err(CommonError::MalformedAsset("font file is empty".to_string()));
        }
        Ok(Self {
            base: EditorBase::new(args.path, icons::TEXT_T, args.position, args.size),
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for FontEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self { base, bytes } = self;
        base.frame(ctx, |ui| {
            ui.label(format!("{} bytes", bytes.len()));
            ui.separator();
            hex_view(ui, bytes);
        });
    }

    fn is_visible(&self) -> bool {
        self.base.is_visible()
    }

    fn has_focus(&self) -> bool {
        self.base.has_focus()
    }

    fn defocus(&mut self) {
        self.base.defocus();
    }

    fn bring_to_front(&mut self) {
        self.base.bring_to_front();
    }

    fn register_shortcuts(&self, shortcuts: &ShortcutDispatcher) {
        self.base.register_close_shortcut(shortcuts);
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
