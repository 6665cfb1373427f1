use eframe::egui::{self, Ui};

const BYTES_PER_ROW: usize = 16;
const MAX_BYTES: usize = 4096;

/// Monospace hex dump of the leading bytes of an asset. Viewers for the
/// formats the toolset does not decode lean on this.
pub fn hex_view(ui: &mut Ui, bytes: &[u8]) {
    let shown = &bytes[..bytes.len().min(MAX_BYTES)];
    egui::ScrollArea::vertical()
        .id_salt("hex_view")
        .max_height(260.0)
        .show(ui, |ui| {
            for (row, chunk) in shown.chunks(BYTES_PER_ROW).enumerate() {
                let hex: String = chunk
                    .iter()
                    .map(|byte| format!("{byte:02x} "))
                    .collect();
                let ascii: String = chunk
                    .iter()
                    .map(|&byte| {
                        if byte.is_ascii_graphic() || byte == b' ' {
                            byte as char
                        } else {
                            '.'
                        }
                    })
                    .collect();
                ui.monospace(format!(
                    "{:06x}  {:<48} {}",
                    row * BYTES_PER_ROW,
                    hex,
                    ascii
                ));
            }
        });
    if bytes.len() > MAX_BYTES {
        ui.small(format!("… {} more bytes not shown", bytes.len() - MAX_BYTES));
    }
}
