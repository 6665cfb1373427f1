use eframe::egui::{Context, Pos2, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::u16_le;
use crate::shortcut::ShortcutDispatcher;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const HEADER_LEN: usize = 12;
const GLYPH_RECORD_LEN: usize = 14;

struct Glyph {
    code: u16,
    width: u8,
    height: u8,
}

/// Viewer for `.tbl` font tables (the `Woo!` flavor): one row per glyph
/// record.
pub struct FontTableEditor {
    base: EditorBase,
    glyphs: Vec<Glyph>,
}

impl FontTableEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "font table header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        let glyphs = args.bytes[HEADER_LEN..]
            .chunks_exact(GLYPH_RECORD_LEN)
            .map(|record| Glyph {
                code: u16_le(record, 0).unwrap_or(0),
                width: record[3],
                height: record[4],
            })
            .collect();
        Ok(Self {
            base: EditorBase::new(args.path, icons::TEXT_AA, args.position, args.size),
            glyphs,
        })
    }
}

impl EditorWindow for FontTableEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self { base, glyphs } = self;
        base.frame(ctx, |ui| {
            ui.label(format!("{} glyphs", glyphs.len()));
            ui.separator();
            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(60.0))
                .column(Column::auto().at_least(60.0))
                .column(Column::remainder())
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("Code");
                    });
                    header.col(|ui| {
                        ui.strong("Width");
                    });
                    header.col(|ui| {
                        ui.strong("Height");
                    });
                })
                .body(|body| {
                    body.rows(18.0, glyphs.len(), |mut row| {
                        let glyph = &glyphs[row.index()];
                        row.col(|ui| {
                            ui.monospace(format!("{:#06x}", glyph.code));
                        });
                        row.col(|ui| {
                            ui.monospace(glyph.width.to_string());
                        });
                        row.col(|ui| {
                            ui.monospace(glyph.height.to_string());
                        });
                    });
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
    }

    fn window_rect(&self) -> (Pos2, Vec2) {
        self.base.rect()
    }
}
