use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use eframe::egui::{self, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;
use log::{error, info};

use super::{decode_state, encode_state};
use crate::shortcut::ShortcutDispatcher;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct TextState {
    word_wrap: bool,
}

#[derive(Debug)]
pub struct TextEditor {
    base: EditorBase,
    content: String,
    word_wrap: bool,
    save_requested: Arc<AtomicBool>,
}

impl TextEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        let state: TextState = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => TextState::default(),
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::FILE_TEXT, args.position, args.size),
            content: String::from_utf8_lossy(&args.bytes).into_owned(),
            word_wrap: state.word_wrap,
            save_requested: Arc::new(AtomicBool::new(false)),
        })
    }

    fn save_as(path: &str, content: &str) {
        let Some(target) = rfd::FileDialog::new()
            .set_file_name(
                std::path::Path::new(path)
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default(),
            )
            .save_file()
        else {
            return;
        };
        match std::fs::write(&target, content) {
            Ok(()) => info!("saved text to {}", target.display()),
            Err(e) => error!("failed to save text to {}: {e}", target.display()),
        }
    }
}

impl EditorWindow for TextEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        if self.save_requested.swap(false, Ordering::SeqCst) {
            Self::save_as(self.base.path(), &self.content);
        }

        let Self {
            base,
            content,
            word_wrap,
            ..
        } = self;
        base.frame(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.checkbox(word_wrap, "Word wrap");
                ui.label(format!("{} bytes", content.len()));
            });
            ui.separator();

            let mut edit = egui::TextEdit::multiline(content)
                .font(egui::TextStyle::Monospace)
                .desired_rows(16);
            if !*word_wrap {
                edit = edit.desired_width(f32::INFINITY);
            }
            let scroll = if *word_wrap {
                egui::ScrollArea::vertical()
            } else {
                egui::ScrollArea::both()
            };
            scroll.id_salt("text_editor_scroll").show(ui, |ui| {
                ui.add(edit);
            });
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
        // Shadows the global "save project" combo while this editor has
        // focus.
        let save = Arc::clone(&self.save_requested);
        shortcuts.register_shortcut(
            move || save.store(true, Ordering::SeqCst),
            egui::Key::S,
            egui::Modifiers::COMMAND,
            false,
        );
    }

    fn serialize_state(&self) -> Vec<u8> {
        encode_state(&TextState {
            word_wrap: self.word_wrap,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(bytes: &[u8], state: Option<Vec<u8>>) -> EditorArgs {
        EditorArgs {
            path: "notes.txt".to_string(),
            bytes: bytes.to_vec(),
            state,
            position: Pos2::ZERO,
            size: None,
        }
    }

    #[test]
    fn state_blob_roundtrip() {
        let mut editor = TextEditor::new(args(b"hello", None)).unwrap();
        editor.word_wrap = true;
        let blob = editor.serialize_state();

        let restored = TextEditor::new(args(b"hello", Some(blob))).unwrap();
        assert!(restored.word_wrap);
    }

    #[test]
    fn garbage_state_blob_is_rejected() {
        let err = TextEditor::new(args(b"hello", Some(vec![0xff, 0xff, 0xff]))).unwrap_err();
        assert!(matches!(err, CommonError::WindowState(_)));
    }

    #[test]
    fn lossy_utf8_still_opens() {
        let editor = TextEditor::new(args(&[0x68, 0x69, 0xff], None)).unwrap();
        assert!(editor.content.starts_with("hi"));
    }
}
