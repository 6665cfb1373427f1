use eframe::egui::{self, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state, i32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::hex_view::hex_view;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

// Two version words, 260 reserved bytes, then the tile count.
const TILE_COUNT_OFFSET: usize = 268;
const HEADER_LEN: usize = 276;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct Dt1State {
    selected_tile: u32,
}

/// Structure viewer for `.dt1` tilesets.
pub struct Dt1Editor {
    base: EditorBase,
    version_major: i32,
    version_minor: i32,
    tile_count: u32,
    selected_tile: u32,
    bytes: Vec<u8>,
}

impl Dt1Editor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "DT1 header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        let tile_count = i32_le(&args.bytes, TILE_COUNT_OFFSET).unwrap_or(0).max(0) as u32;
        let state: Dt1State = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => Dt1State::default(),
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::SQUARES_FOUR, args.position, args.size),
            version_major: i32_le(&args.bytes, 0).unwrap_or(0),
            version_minor: i32_le(&args.bytes, 4).unwrap_or(0),
            tile_count,
            selected_tile: state.selected_tile.min(tile_count.saturating_sub(1)),
            bytes: args.bytes,
        })
    }
}

impl EditorWindow for Dt1Editor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            version_major,
            version_minor,
            tile_count,
            selected_tile,
            bytes,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!(
                "version {version_major}.{version_minor}  {tile_count} tiles"
            ));
            ui.separator();
            if *tile_count > 1 {
                ui.add(
                    egui::Slider::new(selected_tile, 0..=tile_count.saturating_sub(1))
                        .text("Tile"),
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
        encode_state(&Dt1State {
            selected_tile: self.selected_tile,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_count_sits_after_the_reserved_block() {
        let mut bytes = vec![0u8; 512];
        bytes[0..4].copy_from_slice(&7i32.to_le_bytes());
        bytes[4..8].copy_from_slice(&6i32.to_le_bytes());
        bytes[TILE_COUNT_OFFSET..TILE_COUNT_OFFSET + 4].copy_from_slice(&42i32.to_le_bytes());
        let editor = Dt1Editor::new(EditorArgs {
            path: "floor.dt1".to_string(),
            bytes,
            state: None,
            position: Pos2::ZERO,
            size: None,
        })
        .unwrap();
        assert_eq!(editor.version_major, 7);
        assert_eq!(editor.version_minor, 6);
        assert_eq!(editor.tile_count, 42);
    }
}
