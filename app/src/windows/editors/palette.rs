use eframe::egui::{Color32, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::palette_grid::palette_grid;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const PALETTE_ENTRIES: usize = 256;
const PALETTE_BYTES: usize = PALETTE_ENTRIES * 3;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct PaletteState {
    selected: u32,
}

/// Viewer for the 256-color `.dat` palettes.
#[derive(Debug)]
pub struct PaletteEditor {
    base: EditorBase,
    colors: Vec<Color32>,
    selected: usize,
}

impl PaletteEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < PALETTE_BYTES {
            return Err(CommonError::MalformedAsset(format!(
                "palette is {} bytes, expected at least {PALETTE_BYTES}",
                args.bytes.len()
            )));
        }
        let state: PaletteState = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => PaletteState::default(),
        };
        // Palette entries are stored blue-first.
        let colors = args.bytes[..PALETTE_BYTES]
            .chunks_exact(3)
            .map(|entry| Color32::from_rgb(entry[2], entry[1], entry[0]))
            .collect();
        Ok(Self {
            base: EditorBase::new(args.path, icons::PALETTE, args.position, args.size),
            colors,
            selected: state.selected as usize % PALETTE_ENTRIES,
        })
    }
}

impl EditorWindow for PaletteEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            colors,
            selected,
        } = self;
        base.frame(ctx, |ui| {
            if let Some(clicked) = palette_grid(ui, colors, *selected) {
                *selected = clicked;
            }
            ui.separator();
            let color = colors[*selected];
            ui.monospace(format!(
                "index {:3}  #{:02x}{:02x}{:02x}",
                selected,
                color.r(),
                color.g(),
                color.b()
            ));
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
        encode_state(&PaletteState {
            selected: self.selected as u32,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
