use std::path::PathBuf;

use eframe::egui::{self, Button};
use egui_phosphor::regular as icons;

use crate::command::{CommandId, CommandRegistry};
use crate::config::AppConfig;

/// Everything the menu bar can ask the app to do this frame. Execution is
/// deferred to after the UI pass.
#[derive(Default)]
pub struct MenuOutput {
    pub commands: Vec<CommandId>,
    pub open_recent: Option<PathBuf>,
    pub focus_editor: Option<String>,
}

pub fn menu_bar(
    ui: &mut egui::Ui,
    registry: &CommandRegistry,
    config: &AppConfig,
    open_editors: &[(String, String)],
    game_running: bool,
) -> MenuOutput {
    let mut output = MenuOutput::default();
    egui::MenuBar::new().ui(ui, |ui| {
        file_menu(ui, registry, config, &mut output);
        edit_menu(ui, registry, &mut output);
        game_menu(ui, registry, game_running, &mut output);
        view_menu(ui, registry, &mut output);
        windows_menu(ui, registry, open_editors, &mut output);
    });
    output
}

fn command_button(
    ui: &mut egui::Ui,
    registry: &CommandRegistry,
    id: CommandId,
    icon: Option<&str>,
    output: &mut MenuOutput,
) {
    if let Some(cmd) = registry.find(id) {
        let text = match icon {
            Some(icon) => format!("{icon} {}", cmd.text),
            None => cmd.text.to_string(),
        };
        let button = Button::new(text).shortcut_text(cmd.shortcut_text);
        if ui.add(button).clicked() {
            output.commands.push(cmd.id);
            ui.close();
        }
    }
}

fn file_menu(
    ui: &mut egui::Ui,
    registry: &CommandRegistry,
    config: &AppConfig,
    output: &mut MenuOutput,
) {
    ui.menu_button("File", |ui| {
        command_button(
            ui,
            registry,
            CommandId::NewProject,
            Some(icons::FILE_PLUS),
            output,
        );
        command_button(
            ui,
            registry,
            CommandId::OpenProject,
            Some(icons::FOLDER_OPEN),
            output,
        );
        ui.menu_button("Open Recent", |ui| {
            if config.recent_projects.is_empty() {
                ui.weak("(empty)");
            }
            for path in &config.recent_projects {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                if ui.button(name).clicked() {
                    output.open_recent = Some(path.clone());
                    ui.close();
                }
            }
        });
        command_button(
            ui,
            registry,
            CommandId::SaveProject,
            Some(icons::FLOPPY_DISK),
            output,
        );
        command_button(ui, registry, CommandId::CloseProject, None, output);
        ui.separator();
        command_button(
            ui,
            registry,
            CommandId::OpenFile,
            Some(icons::FILE_TEXT),
            output,
        );
        ui.separator();
        command_button(ui, registry, CommandId::Quit, Some(icons::SIGN_OUT), output);
    });
}

fn edit_menu(ui: &mut egui::Ui, registry: &CommandRegistry, output: &mut MenuOutput) {
    ui.menu_button("Edit", |ui| {
        command_button(ui, registry, CommandId::Settings, Some(icons::GEAR), output);
    });
}

fn game_menu(
    ui: &mut egui::Ui,
    registry: &CommandRegistry,
    game_running: bool,
    output: &mut MenuOutput,
) {
    ui.menu_button("Game", |ui| {
        if let Some(cmd) = registry.find(CommandId::RunGame) {
            let button = Button::new(format!("{} {}", icons::PLAY, cmd.text))
                .shortcut_text(cmd.shortcut_text);
            if ui.add_enabled(!game_running, button).clicked() {
                output.commands.push(cmd.id);
                ui.close();
            }
        }
    });
}

fn view_menu(ui: &mut egui::Ui, registry: &CommandRegistry, output: &mut MenuOutput) {
    ui.menu_button("View", |ui| {
        command_button(ui, registry, CommandId::ResetLayout, None, output);
    });
}

fn windows_menu(
    ui: &mut egui::Ui,
    registry: &CommandRegistry,
    open_editors: &[(String, String)],
    output: &mut MenuOutput,
) {
    ui.menu_button("Windows", |ui| {
        if open_editors.is_empty() {
            ui.weak("(no open editors)");
        }
        for (title, path) in open_editors {
            if ui.button(title).clicked() {
                output.focus_editor = Some(path.clone());
                ui.close();
            }
        }
        ui.separator();
        command_button(ui, registry, CommandId::CloseAllEditors, None, output);
    });
}
