use eframe::egui::{Color32, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{decode_state, encode_state};
use crate::shortcut::ShortcutDispatcher;
use crate::ui::widgets::palette_grid::palette_grid;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const BASE_ENTRIES: usize = 256;
// The base palette leads the file as 256 RGBA entries; everything after it
// is 256-byte remap rows.
const BASE_BYTES: usize = BASE_ENTRIES * 4;
const REMAP_ROW: usize = 256;

#[derive(bincode::Encode, bincode::Decode, Default)]
struct PaletteMapState {
    selected: u32,
}

/// Viewer for `.pl2` palette maps: the embedded base palette plus a count
/// of the remap rows derived from it.
#[derive(Debug)]
pub struct PaletteMapEditor {
    base: EditorBase,
    colors: Vec<Color32>,
    remap_rows: usize,
    selected: usize,
}

impl PaletteMapEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < BASE_BYTES {
            return Err(CommonError::MalformedAsset(format!(
                "palette map is {} bytes, expected at least {BASE_BYTES}",
                args.bytes.len()
            )));
        }
        let state: PaletteMapState = match args.state {
            Some(bytes) => decode_state(&bytes)?,
            None => PaletteMapState::default(),
        };
        let colors = args.bytes[..BASE_BYTES]
            .chunks_exact(4)
            .map(|entry| Color32::from_rgb(entry[0], entry[1], entry[2]))
            .collect();
        Ok(Self {
            base: EditorBase::new(args.path, icons::SWATCHES, args.position, args.size),
            colors,
            remap_rows: (args.bytes.len() - BASE_BYTES) / REMAP_ROW,
            selected: state.selected as usize % BASE_ENTRIES,
        })
    }
}

impl EditorWindow for PaletteMapEditor {
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
            remap_rows,
            selected,
        } = self;
        base.frame(ctx, |ui| {
            ui.label(format!("{remap_rows} remap rows"));
            ui.separator();
            if let Some(clicked) = palette_grid(ui, colors, *selected) {
                *selected = clicked;
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
        encode_state(&PaletteMapState {
            selected: self.selected as u32,
        })
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
