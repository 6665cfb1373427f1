use eframe::egui;

use crate::config::ThemeType;

pub fn apply_theme(ctx: &egui::Context, theme: ThemeType) {
    match theme {
        ThemeType::Dark => ctx.set_visuals(egui::Visuals::dark()),
        ThemeType::Light => ctx.set_visuals(egui::Visuals::light()),
        ThemeType::Mocha | ThemeType::Latte => {
            let flavor = match theme {
                ThemeType::Latte => catppuccin::PALETTE.latte,
                _ => catppuccin::PALETTE.mocha,
            };
            let colors = flavor.colors;

            let mut visuals = if theme == ThemeType::Latte {
                egui::Visuals::light()
            } else {
                egui::Visuals::dark()
            };

            let c = |c: catppuccin::Color| egui::Color32::from_rgb(c.rgb.r, c.rgb.g, c.rgb.b);

            visuals.panel_fill = c(colors.base);
            visuals.window_fill = c(colors.mantle);
            visuals.faint_bg_color = c(colors.surface0);
            visuals.extreme_bg_color = c(colors.crust);

            visuals.widgets.noninteractive.bg_fill = c(colors.surface0);
            visuals.widgets.noninteractive.fg_stroke.color = c(colors.text);
            visuals.widgets.noninteractive.bg_stroke.color = c(colors.surface1);

            visuals.widgets.inactive.bg_fill = c(colors.surface0);
            visuals.widgets.inactive.fg_stroke.color = c(colors.text);

            visuals.widgets.hovered.bg_fill = c(colors.surface2);
            visuals.widgets.hovered.fg_stroke.color = c(colors.text);

            visuals.widgets.active.bg_fill = c(colors.surface1);
            visuals.widgets.active.fg_stroke.color = c(colors.text);

            visuals.selection.bg_fill = c(colors.red);
            visuals.selection.stroke.color = c(colors.base);

            visuals.warn_fg_color = c(colors.yellow);
            visuals.error_fg_color = c(colors.red);
            visuals.window_stroke.color = c(colors.overlay1);

            ctx.set_visuals(visuals);
        }
    }
}
