use eframe::egui::{self, Color32, Sense, StrokeKind, Ui};

const COLUMNS: usize = 16;
const SWATCH: f32 = 18.0;

/// 16×16 grid of clickable color swatches. Returns the index of a swatch
/// clicked this frame, if any; the selected swatch is outlined.
pub fn palette_grid(ui: &mut Ui, colors: &[Color32], selected: usize) -> Option<usize> {
    let mut clicked = None;
    egui::Grid::new("palette_grid")
        .spacing([2.0, 2.0])
        .show(ui, |ui| {
            for (index, &color) in colors.iter().enumerate() {
                let (rect, response) =
                    ui.allocate_exact_size(egui::vec2(SWATCH, SWATCH), Sense::click());
                ui.painter().rect_filled(rect, 2.0, color);
                if index == selected {
                    ui.painter().rect_stroke(
                        rect,
                        2.0,
                        egui::Stroke::new(2.0, ui.visuals().strong_text_color()),
                        StrokeKind::Inside,
                    );
                }
                if response.clicked() {
                    clicked = Some(index);
                }
                if (index + 1) % COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
    clicked
}
