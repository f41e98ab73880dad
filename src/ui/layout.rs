use crate::VocabQuizApp;
use egui::{Button, CentralPanel, Context, Frame, Ui, Vec2, Visuals};

pub fn top_panel(app: &mut VocabQuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.label(&app.config.title);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let can_restart = !app.session.is_empty();
                if ui
                    .add_enabled(can_restart, Button::new("🔄 Restart"))
                    .on_hover_text("Reshuffle the options and go back to question 1")
                    .clicked()
                {
                    app.restart_quiz();
                }
            });
        });
    });
}

/// Selector de tema claro/oscuro; marca el tema activo.
pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let dark = ui.visuals().dark_mode;
            if ui.selectable_label(dark, "🌙 Dark").clicked() && !dark {
                log::debug!("Switching to dark theme");
                ctx.set_visuals(Visuals::dark());
            }
            if ui.selectable_label(!dark, "☀ Light").clicked() && dark {
                log::debug!("Switching to light theme");
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Panel centrado horizontalmente con ancho máximo.
pub fn centered_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let w = ui.available_width().min(max_width);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavClick {
    Previous,
    Next,
}

/// Fila Previous/Next, siempre visible aunque solo haya una pregunta.
pub fn nav_row(ui: &mut Ui, panel_width: f32) -> Option<NavClick> {
    let size = Vec2::new((panel_width - ui.spacing().item_spacing.x) / 2.0, 36.0);
    ui.horizontal(|ui| {
        let previous = ui.add(Button::new("⬅ Previous").min_size(size));
        let next = ui.add(Button::new("Next ➡").min_size(size));
        if previous.clicked() {
            Some(NavClick::Previous)
        } else if next.clicked() {
            Some(NavClick::Next)
        } else {
            None
        }
    })
    .inner
}
