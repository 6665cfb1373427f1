use std::collections::VecDeque;

use eframe::egui;

/// Blocking modal for non-fatal failures. Messages queue up and are shown
/// one at a time; dismissing one reveals the next.
#[derive(Default)]
pub struct MessageDialog {
    queue: VecDeque<String>,
}

impl MessageDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.queue.push_back(message.into());
    }

    pub fn is_open(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = self.queue.front().cloned() else {
            return;
        };

        // Backdrop blocks interaction with everything behind the dialog.
        egui::Area::new(egui::Id::new("message_dialog_backdrop"))
            .interactable(true)
            .fixed_pos(egui::pos2(0.0, 0.0))
            .order(egui::Order::Middle)
            .show(ctx, |ui| {
                let screen_rect = ctx.input(|i| i.screen_rect());
                ui.allocate_rect(screen_rect, egui::Sense::click());
                ui.painter()
                    .rect_filled(screen_rect, 0.0, egui::Color32::from_black_alpha(100));
            });

        let mut dismissed = false;
        egui::Window::new("Error")
            .collapsible(false)
            .resizable(false)
            .order(egui::Order::Foreground)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(10.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.queue.pop_front();
        }
    }
}
