use std::fs;
use std::path::{Path, PathBuf};

use eframe::egui::{self, Ui};
use egui_phosphor::regular as icons;
use hscommon::project::{Project, PROJECT_EXTENSION};

/// Project explorer: the directory tree around the project file. Clicking a
/// file emits an open request; the app routes it through the window manager
/// after the UI pass.
pub fn project_panel(ui: &mut Ui, project: Option<&Project>, pending_opens: &mut Vec<PathBuf>) {
    let Some(project) = project else {
        ui.weak("No project open.");
        ui.weak("Use File \u{2192} Open Project.");
        return;
    };

    ui.strong(&project.name);
    if !project.description.is_empty() {
        ui.weak(&project.description);
    }
    ui.separator();

    match project.root_dir() {
        Some(root) => {
            egui::ScrollArea::vertical()
                .id_salt("project_tree")
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    directory_contents(ui, root, pending_opens);
                });
        }
        None => {
            ui.weak("Project has not been saved to disk yet.");
        }
    }
}

fn directory_contents(ui: &mut Ui, dir: &Path, pending_opens: &mut Vec<PathBuf>) {
    let Ok(read_dir) = fs::read_dir(dir) else {
        ui.weak(format!("cannot read {}", dir.display()));
        return;
    };

    let mut entries: Vec<_> = read_dir.filter_map(Result::ok).map(|e| e.path()).collect();
    entries.sort_by_key(|path| (path.is_file(), path.file_name().map(|n| n.to_owned())));

    for path in entries {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if name.starts_with('.') {
            continue;
        }
        if path.is_dir() {
            ui.collapsing(format!("{} {name}", icons::FOLDER), |ui| {
                directory_contents(ui, &path, pending_opens);
            });
        } else {
            if path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(PROJECT_EXTENSION))
            {
                continue;
            }
            let label = format!("{} {name}", file_icon(&path));
            if ui.selectable_label(false, label).clicked() {
                pending_opens.push(path.clone());
            }
        }
    }
}

fn file_icon(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match extension.as_str() {
        "txt" => icons::FILE_TEXT,
        "wav" => icons::SPEAKER_HIGH,
        "dat" => icons::PALETTE,
        "pl2" => icons::SWATCHES,
        "dc6" => icons::IMAGE,
        "dcc" => icons::IMAGES,
        "cof" => icons::PERSON,
        "dt1" => icons::SQUARES_FOUR,
        "ds1" => icons::MAP_TRIFOLD,
        "hsf" => icons::TEXT_T,
        "tbl" => icons::TABLE,
        _ => icons::FILE,
    }
}
