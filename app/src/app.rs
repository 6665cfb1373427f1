use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Context as _;
use eframe::egui::{self, Pos2};
use egui_dock::{DockArea, DockState, Style};
use log::{info, warn};

use hscommon::files::FsFileSource;
use hscommon::launcher::GameLauncher;
use hscommon::project::{Project, PROJECT_EXTENSION};

use crate::command::{CommandId, CommandRegistry};
use crate::config::{self, AppConfig};
use crate::shortcut::{KeyAction, ShortcutDispatcher};
use crate::ui::dialogs::message::MessageDialog;
use crate::ui::dialogs::settings::SettingsDialog;
use crate::ui::menu::menu_bar;
use crate::ui::panels::console::Console;
use crate::ui::tab_viewer::{create_initial_dock_state, AppTabViewer, Tab};
use crate::ui::theme;
use crate::utils;
use crate::windows::manager::WindowManager;
use crate::windows::registry::EditorRegistry;

const CASCADE_ORIGIN: Pos2 = Pos2::new(340.0, 80.0);
const CASCADE_STEP: f32 = 28.0;

pub struct HellSpawnerApp {
    config: AppConfig,
    project: Option<Project>,
    window_manager: WindowManager,
    shortcuts: ShortcutDispatcher,
    command_registry: CommandRegistry,
    /// Commands queued by shortcut callbacks and drained once per frame.
    command_queue: Arc<Mutex<Vec<CommandId>>>,
    dock_state: DockState<Tab>,
    console: Console,
    message_dialog: MessageDialog,
    settings_dialog: SettingsDialog,
    pending_opens: Vec<PathBuf>,
    game: Option<GameLauncher>,
    opened_editor_count: usize,
}

impl HellSpawnerApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = config::load_config();
        theme::apply_theme(&cc.egui_ctx, config.theme);
        utils::setup_fonts(&cc.egui_ctx);

        let command_registry = CommandRegistry::new();
        let shortcuts = ShortcutDispatcher::new();
        let command_queue = Arc::new(Mutex::new(Vec::new()));
        for command in &command_registry.commands {
            if let Some((modifiers, key)) = command.shortcut {
                let queue = Arc::clone(&command_queue);
                let id = command.id;
                shortcuts.register_shortcut(
                    move || queue.lock().unwrap().push(id),
                    key,
                    modifiers,
                    true,
                );
            }
        }

        let window_manager =
            WindowManager::new(EditorRegistry::with_builtin(), Arc::new(FsFileSource));

        let mut console = Console::new();
        console.info("HellSpawner ready.");

        Self {
            config,
            project: None,
            window_manager,
            shortcuts,
            command_registry,
            command_queue,
            dock_state: create_initial_dock_state(),
            console,
            message_dialog: MessageDialog::new(),
            settings_dialog: SettingsDialog::new(),
            pending_opens: Vec::new(),
            game: None,
            opened_editor_count: 0,
        }
    }

    fn dispatch_key_events(&mut self, ctx: &egui::Context) {
        // While a widget wants keyboard input, only strong-modifier combos
        // dispatch so shortcuts do not interfere with typing.
        let wants_keyboard_input = ctx.wants_keyboard_input();
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            if let egui::Event::Key {
                key,
                pressed,
                repeat,
                modifiers,
                ..
            } = event
            {
                if wants_keyboard_input && !(modifiers.command || modifiers.ctrl || modifiers.alt)
                {
                    continue;
                }
                let action = if !*pressed {
                    KeyAction::Released
                } else if *repeat {
                    KeyAction::Held
                } else {
                    KeyAction::Pressed
                };
                self.shortcuts.handle_input(*key, *modifiers, action);
            }
        }
    }

    fn next_window_position(&mut self) -> Pos2 {
        let step = (self.opened_editor_count % 10) as f32 * CASCADE_STEP;
        self.opened_editor_count += 1;
        CASCADE_ORIGIN + egui::vec2(step, step)
    }

    fn execute(&mut self, command: CommandId, ctx: &egui::Context) {
        match command {
            CommandId::NewProject => self.new_project(),
            CommandId::OpenProject => {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("HellSpawner Project", &[PROJECT_EXTENSION])
                    .pick_file()
                {
                    self.open_project(&path, ctx);
                }
            }
            CommandId::SaveProject => {
                if let Err(e) = self.save_project() {
                    self.message_dialog.push(format!("{e:#}"));
                }
            }
            CommandId::CloseProject => self.close_project(),
            CommandId::OpenFile => {
                if let Some(path) = rfd::FileDialog::new().pick_file() {
                    self.pending_opens.push(path);
                }
            }
            CommandId::Quit => {
                if let Err(e) = self.save_project() {
                    warn!("could not save project on quit: {e:#}");
                }
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            CommandId::Settings => self.settings_dialog.open(&self.config),
            CommandId::RunGame => self.run_game(),
            CommandId::ResetLayout => self.dock_state = create_initial_dock_state(),
            CommandId::CloseAllEditors => {
                self.window_manager.close_all();
                self.shortcuts.unregister_window_shortcuts();
            }
        }
        ctx.request_repaint();
    }

    fn new_project(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("HellSpawner Project", &[PROJECT_EXTENSION])
            .set_file_name(format!("untitled.{PROJECT_EXTENSION}"))
            .save_file()
        else {
            return;
        };
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string());
        let mut project = Project::new(name);
        match project.save_file(&path) {
            Ok(()) => {
                self.close_project();
                self.config.remember_project(path);
                config::save_config(&self.config);
                self.console.info(format!("Created project {}", project.name));
                self.project = Some(project);
            }
            Err(e) => self.message_dialog.push(format!("Cannot create project: {e}")),
        }
    }

    fn open_project(&mut self, path: &Path, ctx: &egui::Context) {
        match Project::load_file(path) {
            Ok(project) => {
                self.close_project();
                self.config.remember_project(path.to_path_buf());
                config::save_config(&self.config);
                self.console.info(format!("Opened project {}", project.name));
                self.window_manager.restore_layout(&project.layout, ctx);
                self.project = Some(project);
            }
            Err(e) => {
                self.message_dialog
                    .push(format!("Cannot open {}: {e}", path.display()));
            }
        }
    }

    fn save_project(&mut self) -> anyhow::Result<()> {
        let Some(project) = self.project.as_mut() else {
            return Ok(());
        };
        project.layout = self.window_manager.snapshot_layout();
        let path = project
            .file_path
            .clone()
            .context("project has no file path")?;
        project
            .save_file(&path)
            .with_context(|| format!("cannot save project to {}", path.display()))?;
        self.console.info(format!("Saved project {}", project.name));
        Ok(())
    }

    /// Saves the window layout into the project, then tears the workspace
    /// down.
    fn close_project(&mut self) {
        if self.project.is_some() {
            if let Err(e) = self.save_project() {
                warn!("could not save project on close: {e:#}");
            }
        }
        self.window_manager.close_all();
        self.shortcuts.unregister_window_shortcuts();
        if let Some(project) = self.project.take() {
            self.console.info(format!("Closed project {}", project.name));
        }
    }

    fn run_game(&mut self) {
        if self.game.as_ref().is_some_and(GameLauncher::is_running) {
            self.message_dialog.push("The game is already running.");
            return;
        }
        let Some(executable) = self.config.game_executable.clone() else {
            self.message_dialog
                .push("No game executable configured. Set one in Edit \u{2192} Settings.");
            return;
        };
        match GameLauncher::launch(&executable, &self.config.game_arguments) {
            Ok(launcher) => {
                self.console
                    .info(format!("Running {}", executable.display()));
                self.game = Some(launcher);
            }
            Err(e) => self.message_dialog.push(e.to_string()),
        }
    }
}

impl eframe::App for HellSpawnerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.dispatch_key_events(ctx);

        let mut triggered: Vec<CommandId> =
            std::mem::take(&mut *self.command_queue.lock().unwrap());

        // Menu bar.
        let open_editors = self.window_manager.open_list();
        let game_running = self.game.as_ref().is_some_and(GameLauncher::is_running);
        let mut menu_output = None;
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            menu_output = Some(menu_bar(
                ui,
                &self.command_registry,
                &self.config,
                &open_editors,
                game_running,
            ));
        });
        if let Some(output) = menu_output {
            triggered.extend(output.commands);
            if let Some(path) = output.open_recent {
                self.open_project(&path, ctx);
            }
            if let Some(path) = output.focus_editor {
                self.window_manager.bring_to_front(&path);
            }
        }

        // Deferred command execution.
        for command in triggered {
            self.execute(command, ctx);
        }

        // Status bar.
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.project {
                    Some(project) => ui.label(&project.name),
                    None => ui.label("No project"),
                };
                ui.separator();
                ui.label(format!("{} editors open", self.window_manager.len()));
                if game_running {
                    ui.separator();
                    ui.label("game running");
                }
            });
        });

        // Dock panels.
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut tab_viewer = AppTabViewer::new(
                self.project.as_ref(),
                &self.console,
                &mut self.pending_opens,
            );
            DockArea::new(&mut self.dock_state)
                .style(Style::from_egui(ui.style().as_ref()))
                .show_inside(ui, &mut tab_viewer);
        });

        // Open requests collected from the panels and dialogs.
        let opens: Vec<PathBuf> = self.pending_opens.drain(..).collect();
        for path in opens {
            let position = self.next_window_position();
            self.window_manager.open_editor(&path, position);
        }

        // Editor windows.
        self.window_manager.render_frame(ctx, &self.shortcuts);

        for error in self.window_manager.take_errors() {
            self.console.error(error.as_str());
            self.message_dialog.push(error);
        }
        self.message_dialog.show(ctx);

        if let Some(new_config) = self.settings_dialog.show(ctx) {
            self.config = new_config;
            config::save_config(&self.config);
            theme::apply_theme(ctx, self.config.theme);
        }

        // Reap a finished game process so the menu re-enables.
        if self.game.as_ref().is_some_and(|game| !game.is_running()) {
            self.console.info("Game process exited.");
            self.game = None;
        }
    }
}

impl Drop for HellSpawnerApp {
    fn drop(&mut self) {
        if let Some(game) = self.game.take() {
            info!("stopping game process on exit");
            game.stop();
        }
    }
}
