use eframe::egui::{self, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state, i32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const HEADER_LEN: usize = 24;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct Dc6State {
    direction: u32,
    frame: u32,
}

/// Structure viewer for `.dc6` sprites: header fields plus a
/// direction/frame cursor. Pixel decoding belongs to the engine library.
#[derive(Debug)]
pub struct Dc6Editor {
    base: EditorBase,
    version: i32,
    flags: i32,
    encoding: i32,
    directions: u32,
    frames_per_direction: u32,
    direction: u32,
    frame: u32,
    bytes: Vec<u8>,
}

impl Dc6Editor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "DC6 header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        let directions = i32_le(&args.bytes, 16).unwrap_or(0).max(0) as u32;
        let frames_per_direction = i32_le(&args.bytes, 20).unwrap_or(0).max(0) as u32;
        let state: Dc6State = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => Dc6State::default(),
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::IMAGE, args.position, args.size),
            version: i32_le(&args.bytes, 0).unwrap_or(0),
            flags: i32_le(&args.bytes, 4).unwrap_or(0),
            encoding: i32_le(&args.bytes, 8).unwrap_or(0),
            directions,
            frames_per_direction,
            direction: state.direction.min(directions.saturating_sub(1)),
            frame: state.frame.min(frames_per_direction.saturating_sub(1)),
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for Dc6Editor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            version,
            flags,
            encoding,
            directions,
            frames_per_direction,
            direction,
            frame,
            bytes,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!(
                "version {version}  flags {flags:#x}  encoding {encoding}"
            ));
            ui.monospace(format!(
                "{directions} directions × {frames_per_direction} frames"
            ));
            ui.separator();
            if *directions > 1 {
                ui.add(
                    egui::Slider::new(direction, 0..=directions.saturating_sub(1))
                        .text("Direction"),
                );
            }
            if *frames_per_direction > 1 {
                ui.add(
                    egui::Slider::new(frame, 0..=frames_per_direction.saturating_sub(1))
                        .text("Frame"),
                );
            }
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

    fn serialize_state(&self) -> Vec<u8> {
        encode_state(&Dc6State {
            direction: self.direction,
            frame: self.frame,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dc6_bytes(directions: i32, frames: i32) -> Vec<u8> {
        let mut bytes = vec![0u8; 64];
        bytes[0..4].copy_from_slice(&6i32.to_le_bytes());
        bytes[16..20].copy_from_slice(&directions.to_le_bytes());
        bytes[20..24].copy_from_slice(&frames.to_le_bytes());
        bytes
    }

    fn args(bytes: Vec<u8>, state: Option<Vec<u8>>) -> EditorArgs {
        EditorArgs {
            path: "sprite.dc6".to_string(),
            bytes,
            state,
            position: Pos2::ZERO,
            size: None,
        }
    }

    #[test]
    fn header_fields_are_read() {
        let editor = Dc6Editor::new(args(dc6_bytes(8, 16), None)).unwrap();
        assert_eq!(editor.version, 6);
        assert_eq!(editor.directions, 8);
        assert_eq!(editor.frames_per_direction, 16);
    }

    #[test]
    fn truncated_header_is_malformed() {
        let err = Dc6Editor::new(args(vec![0u8; 8], None)).unwrap_err();
        assert!(matches!(err, CommonError::MalformedAsset(_)));
    }

    #[test]
    fn restored_cursor_is_clamped_to_the_header() {
        let mut editor = Dc6Editor::new(args(dc6_bytes(8, 16), None)).unwrap();
        editor.direction = 5;
        editor.frame = 11;
        let blob = editor.serialize_state();

        // Same blob against a smaller sprite clamps instead of pointing
        // past the end.
        let restored = Dc6Editor::new(args(dc6_bytes(4, 8), Some(blob))).unwrap();
        assert_eq!(restored.direction, 3);
        assert_eq!(restored.frame, 7);
    }
}
