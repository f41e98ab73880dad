use crate::VocabQuizApp;
use crate::ui::helpers::option_button;
use crate::ui::layout::{NavClick, centered_panel, nav_row};
use crate::view_models::QuestionView;
use egui::{Context, Key, RichText, ScrollArea, Ui};

const MAX_WIDTH: f32 = 520.0;

/// Lo que pulsó el usuario en este frame; se aplica después de pintar.
#[derive(Default)]
struct QuizInput {
    picked: Option<String>,
    previous: bool,
    next: bool,
}

pub fn ui_quiz(app: &mut VocabQuizApp, ctx: &Context, view: QuestionView) {
    let answered = view.explanation_visible();
    let mut input = keyboard_input(ctx, &view, answered);

    centered_panel(ctx, MAX_WIDTH, |ui| {
        let panel_width = ui.available_width();
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(view.position_label()).size(20.0));
            ui.add_space(10.0);
            ui.label(RichText::new(&view.prompt).size(20.0).strong());
        });
        ui.add_space(16.0);

        for (i, option) in view.options.iter().enumerate() {
            if option_button(ui, option, i, panel_width, !answered).clicked() {
                input.picked = Some(option.text.clone());
            }
            ui.add_space(6.0);
        }

        if view.explanation.is_some() {
            ui.add_space(12.0);
            explanation_block(ui, &view);
        }

        ui.add_space(20.0);
        match nav_row(ui, panel_width) {
            Some(NavClick::Previous) => input.previous = true,
            Some(NavClick::Next) => input.next = true,
            None => {}
        }
    });

    if let Some(option) = input.picked {
        app.select_option(&option);
    }
    if input.previous {
        app.go_previous();
    } else if input.next {
        app.go_next();
    }
}

fn explanation_block(ui: &mut Ui, view: &QuestionView) {
    let Some(explanation) = &view.explanation else {
        return;
    };
    egui::Frame::default()
        .fill(ui.visuals().faint_bg_color)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ScrollArea::vertical().max_height(180.0).show(ui, |ui| {
                ui.label(RichText::new("Explanation").strong());
                ui.add_space(4.0);
                labeled_line(ui, "Synonyms:", &explanation.synonyms);
                labeled_line(ui, "Antonyms:", &explanation.antonyms);
                labeled_line(ui, "Example:", &explanation.example);
            });
        });
}

fn labeled_line(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(label).strong());
        ui.label(value);
    });
}

// Atajos: flechas para navegar, 1..9 para elegir opción
fn keyboard_input(ctx: &Context, view: &QuestionView, answered: bool) -> QuizInput {
    const DIGITS: [Key; 9] = [
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::Num6,
        Key::Num7,
        Key::Num8,
        Key::Num9,
    ];

    ctx.input(|i| {
        let picked = if answered {
            None
        } else {
            DIGITS
                .iter()
                .zip(&view.options)
                .find(|(key, _)| i.key_pressed(**key))
                .map(|(_, option)| option.text.clone())
        };
        QuizInput {
            picked,
            previous: i.key_pressed(Key::ArrowLeft),
            next: i.key_pressed(Key::ArrowRight),
        }
    })
}
