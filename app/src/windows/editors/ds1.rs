use eframe::egui::{Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state, i32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const HEADER_LEN: usize = 16;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct Ds1State {
    show_hex: bool,
}

/// Structure viewer for `.ds1` map presets. Width and height are stored
/// off by one.
pub struct Ds1Editor {
    base: EditorBase,
    version: i32,
    width: i32,
    height: i32,
    act: i32,
    show_hex: bool,
    bytes: Vec<u8>,
}

impl Ds1Editor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "DS1 header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        let state: Ds1State = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => Ds1State::default(),
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::MAP_TRIFOLD, args.position, args.size),
            version: i32_le(&args.bytes, 0).unwrap_or(0),
            width: i32_le(&args.bytes, 4).unwrap_or(-1) + 1,
            height: i32_le(&args.bytes, 8).unwrap_or(-1) + 1,
            act: i32_le(&args.bytes, 12).unwrap_or(0) + 1,
            show_hex: state.show_hex,
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for Ds1Editor {
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
            width,
            height,
            act,
            show_hex,
            bytes,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!("version {version}  {width}×{height} tiles  act {act}"));
            ui.separator();
            ui.checkbox(show_hex, "Raw bytes");
            if *show_hex {
                hex_view(ui, bytes);
            }
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
        encode_state(&Ds1State {
            show_hex: self.show_hex,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
