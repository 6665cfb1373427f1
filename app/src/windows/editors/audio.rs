use eframe::egui::{self, Context, Pos2, Vec2};
use egui_phosphor::regular as icons;
use hscommon::error::CommonError;

use super::{u16_le, u32_le};
use crate::shortcut::ShortcutDispatcher;
use crate::windows::editor::{EditorBase, EditorWindow};
use crate::windows::registry::EditorArgs;

const WAV_HEADER_LEN: usize = 44;

/// Read-only view of a `.wav` asset: the RIFF header fields and a duration
/// estimate. Playback routes through the game engine, not the toolset.
#[derive(Debug)]
pub struct AudioEditor {
    base: EditorBase,
    channels: u16,
    sample_rate: u32,
    bits_per_sample: u16,
    duration_secs: f64,
    byte_len: usize,
}

impl AudioEditor {
    pub fn new(args: EditorArgs) -> Result<Self, CommonError> {
        let bytes = &args.bytes;
        if bytes.len() < WAV_HEADER_LEN
            || !bytes.starts_with(b"RIFF")
            || &bytes[8..12] != b"WAVE"
        {
            return Err(CommonError::MalformedAsset(
                "not a RIFF/WAVE file".to_string(),
            ));
        }
        let channels = u16_le(bytes, 22).unwrap_or(0);
        let sample_rate = u32_le(bytes, 24).unwrap_or(0);
        let byte_rate = u32_le(bytes, 28).unwrap_or(0);
        let bits_per_sample = u16_le(bytes, 34).unwrap_or(0);
        let data_len = bytes.len().saturating_sub(WAV_HEADER_LEN);
        let duration_secs = if byte_rate > 0 {
            data_len as f64 / byte_rate as f64
        } else {
            0.0
        };
        Ok(Self {
            base: EditorBase::new(args.path, icons::SPEAKER_HIGH, args.position, args.size),
            channels,
            sample_rate,
            bits_per_sample,
            duration_secs,
            byte_len: bytes.len(),
        })
    }
}

impl EditorWindow for AudioEditor {
    fn path(&self) -> &str {
        self.base.path()
    }

    fn title(&self) -> &str {
        self.base.title()
    }

    fn show(&mut self, ctx: &Context) {
        let Self {
            base,
            channels,
            sample_rate,
            bits_per_sample,
            duration_secs,
            byte_len,
        } = self;
        base.frame(ctx, |ui| {
            egui::Grid::new("audio_info").num_columns(2).show(ui, |ui| {
                ui.label("Channels");
                ui.monospace(channels.to_string());
                ui.end_row();
                ui.label("Sample rate");
                ui.monospace(format!("{sample_rate} Hz"));
                ui.end_row();
                ui.label("Bit depth");
                ui.monospace(format!("{bits_per_sample} bit"));
                ui.end_row();
                ui.label("Duration");
                ui.monospace(format!("{duration_secs:.2} s"));
                ui.end_row();
                ui.label("Size");
                ui.monospace(format!("{byte_len} bytes"));
                ui.end_row();
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
