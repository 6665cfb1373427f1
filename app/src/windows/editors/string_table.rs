use eframe::egui::{self, Context, Pos2, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{u16_le, u32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const HEADER_LEN: usize = 21;
const MIN_STRING_LEN: usize = 4;

/// Viewer for `.tbl` string tables: the header counts plus every printable
/// string found in the data block, with a live filter.
pub struct StringTableEditor {
    base: EditorBase,
    element_count: u16,
    hash_table_size: u32,
    strings: Vec<String>,
    filter: String,
}

impl StringTableEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        if args.bytes.len() < HEADER_LEN {
            return Err(CommonError::MalformedAsset(format!(
                "string table header is {} bytes, expected {HEADER_LEN}",
                args.bytes.len()
            )));
        }
        Ok(Self {
            base: EditorBase::new(args.path, icons::TABLE, args.position, args.size),
            element_count: u16_le(&args.bytes, 2).unwrap_or(0),
            hash_table_size: u32_le(&args.bytes, 4).unwrap_or(0),
            strings: extract_strings(&args.bytes[HEADER_LEN..]),
            filter: String::new(),
        })
    }
}

/// NUL-terminated printable runs in the data block.
fn extract_strings(bytes: &[u8]) -> Vec<String> {
    let mut strings = Vec::new();
    let mut current = String::new();
    for &byte in bytes {
        if byte.is_ascii_graphic() || byte == b' ' {
            current.push(byte as char);
        } else {
            if byte == 0 && current.len() >= MIN_STRING_LEN {
                strings.push(std::mem::take(&mut current));
            }
            current.clear();
        }
    }
    strings
}

impl EditorWindow for StringTableEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            element_count,
            hash_table_size,
            strings,
            filter,
        } = self;
        base.frame(ctx, |ui| {
            ui.monospace(format!(
                "{element_count} elements  hash table {hash_table_size}"
            ));
            ui.horizontal(|ui| {
                ui.label("Filter:");
                ui.add(egui::TextEdit::singleline(filter).hint_text("substring"));
            });
            ui.separator();

            let needle = filter.to_lowercase();
            let visible: Vec<(usize, &String)> = strings
                .iter()
                .enumerate()
                .filter(|(_, s)| needle.is_empty() || s.to_lowercase().contains(&needle))
                .collect();

            TableBuilder::new(ui)
                .striped(true)
                .column(Column::auto().at_least(50.0))
                .column(Column::remainder())
                .header(18.0, |mut header| {
                    header.col(|ui| {
                        ui.strong("#");
                    });
                    header.col(|ui| {
                        ui.strong("Text");
                    });
                })
                .body(|body| {
                    body.rows(18.0, visible.len(), |mut row| {
                        let (index, text) = visible[row.index()];
                        row.col(|ui| {
                            ui.monospace(index.to_string());
                        });
                        row.col(|ui| {
                            ui.label(text.as_str());
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_nul_terminated_strings() {
        let mut bytes = vec![0u8; HEADER_LEN];
        bytes[2..4].copy_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(b"Deckard Cain\0x\0Tristram\0");
        let editor = StringTableEditor::new(EditorArgs {
            path: "string.tbl".to_string(),
            bytes,
            state: None,
            position: Pos2::ZERO,
            size: None,
        })
        .unwrap();
        assert_eq!(editor.element_count, 2);
        assert_eq!(
            editor.strings,
            vec!["Deckard Cain".to_string(), "Tristram".to_string()]
        );
    }

    #[test]
    fn short_runs_are_dropped() {
        assert_eq!(extract_strings(b"ab\0abcd\0"), vec!["abcd".to_string()]);
    }
}
