use std::path::PathBuf;

use egui::Ui;
use egui_dock::{DockState, TabViewer};
use egui_phosphor::regular as icons;
use hscommon::project::Project;

use crate::ui::panels::{console, project};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Project,
    Console,
}

pub struct AppTabViewer<'a> {
    project: Option<&'a Project>,
    console: &'a console::Console,
    pending_opens: &'a mut Vec<PathBuf>,
}

impl<'a> AppTabViewer<'a> {
    pub fn new(
        project: Option<&'a Project>,
        console: &'a console::Console,
        pending_opens: &'a mut Vec<PathBuf>,
    ) -> Self {
        Self {
            project,
            console,
            pending_opens,
        }
    }
}

impl<'a> TabViewer for AppTabViewer<'a> {
    type Tab = Tab;

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Tab::Project => project::project_panel(ui, self.project, self.pending_opens),
            Tab::Console => console::console_panel(ui, self.console),
        }
    }

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        match tab {
            Tab::Project => format!("{} {}", icons::FOLDER, "Project").into(),
            Tab::Console => format!("{} {}", icons::TERMINAL, "Console").into(),
        }
    }
}

pub fn create_initial_dock_state() -> DockState<Tab> {
    let mut dock_state = DockState::new(vec![Tab::Project]);
    let surface = dock_state.main_surface_mut();

    // Console strip along the bottom, project tree above it.
    let [_tree, _console] =
        surface.split_below(egui_dock::NodeIndex::root(), 0.75, vec![Tab::Console]);

    dock_state
}
