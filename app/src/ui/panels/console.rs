use std::collections::VecDeque;

use eframe::egui::{self, Ui};

const MAX_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleLevel {
    Info,
    Warn,
    Error,
}

pub struct ConsoleLine {
    pub level: ConsoleLevel,
    pub text: String,
}

/// In-app event log shown in the console tab. Mirrors what also goes to the
/// `log` facade so users see failures without a terminal attached.
#[derive(Default)]
pub struct Console {
    lines: VecDeque<ConsoleLine>,
}

impl Console {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&mut self, text: impl Into<String>) {
        self.push(ConsoleLevel::Info, text.into());
    }

    pub fn warn(&mut self, text: impl Into<String>) {
        self.push(ConsoleLevel::Warn, text.into());
    }

    pub fn error(&mut self, text: impl Into<String>) {
        self.push(ConsoleLevel::Error, text.into());
    }

    fn push(&mut self, level: ConsoleLevel, text: String) {
        self.lines.push_back(ConsoleLine { level, text });
        while self.lines.len() > MAX_LINES {
            self.lines.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }
}

pub fn console_panel(ui: &mut Ui, console: &Console) {
    egui::ScrollArea::vertical()
        .id_salt("console_panel")
        .stick_to_bottom(true)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for line in &console.lines {
                let color = match line.level {
                    ConsoleLevel::Info => ui.visuals().text_color(),
                    ConsoleLevel::Warn => ui.visuals().warn_fg_color,
                    ConsoleLevel::Error => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, &line.text);
            }
        });
}
