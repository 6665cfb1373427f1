use std::path::PathBuf;

use eframe::egui;

use crate::config::{AppConfig, ThemeType};

/// Preferences: theme plus the game launcher's executable and arguments.
/// Edits happen on a copy; the committed config is returned on Save.
pub struct SettingsDialog {
    pub is_open: bool,
    editing: AppConfig,
    arguments_text: String,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self {
            is_open: false,
            editing: AppConfig::default(),
            arguments_text: String::new(),
        }
    }

    pub fn open(&mut self, current: &AppConfig) {
        self.editing = current.clone();
        self.arguments_text = current.game_arguments.join(" ");
        self.is_open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<AppConfig> {
        if !self.is_open {
            return None;
        }

        let mut saved = None;
        let mut still_open = true;
        let mut close_confirmed = false;

        egui::Window::new("Settings")
            .open(&mut still_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                egui::Grid::new("settings_grid")
                    .num_columns(2)
                    .spacing([12.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Theme");
                        egui::ComboBox::from_id_salt("theme_combo")
                            .selected_text(format!("{:?}", self.editing.theme))
                            .show_ui(ui, |ui| {
                                for theme in [
                                    ThemeType::Dark,
                                    ThemeType::Light,
                                    ThemeType::Mocha,
                                    ThemeType::Latte,
                                ] {
                                    ui.selectable_value(
                                        &mut self.editing.theme,
                                        theme,
                                        format!("{theme:?}"),
                                    );
                                }
                            });
                        ui.end_row();

                        ui.label("Game executable");
                        ui.horizontal(|ui| {
                            let mut text = self
                                .editing
                                .game_executable
                                .as_ref()
                                .map(|p| p.display().to_string())
                                .unwrap_or_default();
                            if ui.text_edit_singleline(&mut text).changed() {
                                self.editing.game_executable =
                                    (!text.is_empty()).then(|| PathBuf::from(text));
                            }
                            if ui.button("Browse…").clicked() {
                                if let Some(path) = rfd::FileDialog::new().pick_file() {
                                    self.editing.game_executable = Some(path);
                                }
                            }
                        });
                        ui.end_row();

                        ui.label("Game arguments");
                        ui.text_edit_singleline(&mut self.arguments_text);
                        ui.end_row();
                    });

                ui.add_space(10.0);
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Save").clicked() {
                        self.editing.game_arguments = self
                            .arguments_text
                            .split_whitespace()
                            .map(str::to_owned)
                            .collect();
                        saved = Some(self.editing.clone());
                        close_confirmed = true;
                    }
                    if ui.button("Cancel").clicked() {
                        close_confirmed = true;
                    }
                });
            });

        if !still_open || close_confirmed {
            self.is_open = false;
        }
        saved
    }
}
