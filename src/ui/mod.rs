mod helpers;
pub mod layout;
pub mod views;

use crate::app::VocabQuizApp;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for VocabQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        top_panel(self, ctx);

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Se vuelve a derivar la vista en cada frame
        match self.session.current_view() {
            Some(view) => views::quiz::ui_quiz(self, ctx, view),
            None => views::empty::ui_no_questions(self, ctx),
        }
    }
}
