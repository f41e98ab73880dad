use crate::VocabQuizApp;
use crate::ui::layout::centered_panel;
use egui::{Color32, Context, RichText};

/// Vista sin pregunta: banco vacío o error de carga.
pub fn ui_no_questions(app: &VocabQuizApp, ctx: &Context) {
    centered_panel(ctx, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(60.0);
            match &app.load_error {
                Some(err) => {
                    ui.heading("Could not load the questions");
                    ui.add_space(10.0);
                    ui.label(RichText::new(err).color(Color32::LIGHT_RED));
                }
                None => {
                    ui.heading("No questions available");
                    ui.add_space(10.0);
                    ui.label("The question bank is empty.");
                }
            }
        });
    });
}
