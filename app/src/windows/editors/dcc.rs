use eframe::egui::{self, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state, u32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const SIGNATURE: u8 = 0x74;
const HEADER_LEN: usize = 15;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct DccState {
    direction: u32,
    frame: u32,
}

/// Structure viewer for `.dcc` sprites.
#[derive(Debug)]
pub struct DccEditor {
    base: EditorBase,
    version: u8,
    directions: u32,
    frames_per_direction: u32,
    direction: u32,
    frame: u32,
    bytes: Vec<u8>,
}

impl DccEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "DCC header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        if args.bytes[0] != SIGNATURE {
            return Err(CommonError::MalformedAsset(format!(
                "bad DCC signature {:#04x}",
                args.bytes[0]
            )));
        }
        let directions = args.bytes[2] as u32;
        let frames_per_direction = u32_le(&args.bytes, 3).unwrap_or(0);
        let state: DccState = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => DccState::default(),
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::IMAGES, args.position, args.size),
            version: args.bytes[1],
            directions,
            frames_per_direction,
            direction: state.direction.min(directions.saturating_sub(1)),
            frame: state.frame.min(frames_per_direction.saturating_sub(1)),
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for DccEditor {
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
            directions,
            frames_per_direction,
            direction,
            frame,
            bytes,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!(
                "version {version}  {directions} directions × {frames_per_direction} frames"
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
        encode_state(&DccState {
            direction: self.direction,
            frame: self.frame,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
