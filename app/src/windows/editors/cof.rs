use eframe::egui::{Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const HEADER_LEN: usize = 4;

/// Structure viewer for `.cof` composite-animation files.
pub struct CofEditor {
    base: EditorBase,
    layers: u8,
    frames_per_direction: u8,
    directions: u8,
    bytes: Vec<u8>,
}

impl CofEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "COF header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        Ok(Self {
            base: EditorBase::new(args.path, icons::PERSON, args.position, args.size),
            layers: args.bytes[0],
            frames_per_direction: args.bytes[1],
            directions: args.bytes[2],
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for CofEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            layers,
            frames_per_direction,
            directions,
            bytes,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!(
                "{layers} layers  {directions} directions  {frames_per_direction} frames/dir"
            ));
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
