// src/ui/helpers.rs
use crate::view_models::{Classification, OptionView};
use egui::{Button, Color32, Response, RichText, Ui, Vec2};

/// Relleno del botón según la clasificación. `None` = color por defecto del tema.
pub fn classification_fill(classification: Classification, dark_mode: bool) -> Option<Color32> {
    match (classification, dark_mode) {
        (Classification::Correct, false) => Some(Color32::from_rgb(0x90, 0xEE, 0x90)),
        (Classification::Correct, true) => Some(Color32::from_rgb(0x2E, 0x7D, 0x32)),
        (Classification::IncorrectSelected, false) => Some(Color32::from_rgb(0xFF, 0xA0, 0x7A)),
        (Classification::IncorrectSelected, true) => Some(Color32::from_rgb(0xB2, 0x4A, 0x2E)),
        (Classification::Neutral, _) => None,
    }
}

/// Botón de opción a ancho completo; deshabilitado una vez respondida la pregunta.
pub fn option_button(
    ui: &mut Ui,
    option: &OptionView,
    index: usize,
    width: f32,
    enabled: bool,
) -> Response {
    let dark = ui.visuals().dark_mode;
    let mut text = RichText::new(format!("{}. {}", index + 1, option.text)).size(16.0);
    let fill = classification_fill(option.classification, dark);
    if fill.is_some() {
        text = text.color(if dark { Color32::WHITE } else { Color32::BLACK });
    }

    let mut button = Button::new(text).min_size(Vec2::new(width, 44.0));
    if let Some(fill) = fill {
        button = button.fill(fill);
    }
    ui.add_enabled(enabled, button)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{CentralPanel, Context, RawInput};

    fn option_enabled_flags(enabled: bool) -> Vec<bool> {
        let options = [
            OptionView {
                text: "joyful".into(),
                classification: Classification::Correct,
            },
            OptionView {
                text: "sad".into(),
                classification: Classification::IncorrectSelected,
            },
        ];
        let ctx = Context::default();
        let mut flags = Vec::new();
        let _ = ctx.run(RawInput::default(), |ctx| {
            flags.clear();
            CentralPanel::default().show(ctx, |ui| {
                for (i, option) in options.iter().enumerate() {
                    flags.push(option_button(ui, option, i, 200.0, enabled).enabled());
                }
            });
        });
        flags
    }

    #[test]
    fn answered_options_are_disabled() {
        assert_eq!(option_enabled_flags(false), vec![false, false]);
    }

    #[test]
    fn unanswered_options_are_clickable() {
        assert_eq!(option_enabled_flags(true), vec![true, true]);
    }

    #[test]
    fn neutral_keeps_theme_fill() {
        assert_eq!(classification_fill(Classification::Neutral, false), None);
        assert_eq!(classification_fill(Classification::Neutral, true), None);
    }

    #[test]
    fn light_theme_uses_green_and_salmon() {
        assert_eq!(
            classification_fill(Classification::Correct, false),
            Some(Color32::from_rgb(0x90, 0xEE, 0x90))
        );
        assert_eq!(
            classification_fill(Classification::IncorrectSelected, false),
            Some(Color32::from_rgb(0xFF, 0xA0, 0x7A))
        );
    }
}
