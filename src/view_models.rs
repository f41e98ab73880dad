// src/view_models.rs

use crate::model::{QuestionKind, SessionQuestion};

/// Cómo pintar cada opción. El color lo decide la capa de UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Classification {
    Correct,
    IncorrectSelected,
    Neutral,
}

/// Sin respuesta todo es neutral.
pub fn classify(option: &str, correct: &str, selected: Option<&str>) -> Classification {
    match selected {
        None => Classification::Neutral,
        Some(_) if option == correct => Classification::Correct,
        Some(sel) if option == sel => Classification::IncorrectSelected,
        Some(_) => Classification::Neutral,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionView {
    pub text: String,
    pub classification: Classification,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Explanation {
    pub synonyms: String,
    pub antonyms: String,
    pub example: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionView {
    pub prompt: String,
    pub word: String,
    pub kind: QuestionKind,
    pub options: Vec<OptionView>,
    pub explanation: Option<Explanation>,
    pub position: usize, // 1-based
    pub total: usize,
}

impl QuestionView {
    pub fn build(
        question: &SessionQuestion,
        selected: Option<&str>,
        index: usize,
        total: usize,
    ) -> Self {
        let options = question
            .options
            .iter()
            .map(|opt| OptionView {
                text: opt.clone(),
                classification: classify(opt, &question.correct_answer, selected),
            })
            .collect();
        let explanation = selected.map(|_| Explanation {
            synonyms: question.synonyms.clone(),
            antonyms: question.antonyms.clone(),
            example: question.example.clone(),
        });

        Self {
            prompt: question.prompt(),
            word: question.word.clone(),
            kind: question.kind,
            options,
            explanation,
            position: index + 1,
            total,
        }
    }

    pub fn explanation_visible(&self) -> bool {
        self.explanation.is_some()
    }

    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }

    pub fn classification_of(&self, option: &str) -> Option<Classification> {
        self.options
            .iter()
            .find(|o| o.text == option)
            .map(|o| o.classification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_is_always_neutral() {
        assert_eq!(classify("joyful", "joyful", None), Classification::Neutral);
        assert_eq!(classify("sad", "joyful", None), Classification::Neutral);
    }

    #[test]
    fn answered_marks_correct_and_wrong_pick() {
        let selected = Some("sad");
        assert_eq!(classify("joyful", "joyful", selected), Classification::Correct);
        assert_eq!(
            classify("sad", "joyful", selected),
            Classification::IncorrectSelected
        );
        assert_eq!(classify("tired", "joyful", selected), Classification::Neutral);
    }

    #[test]
    fn correct_pick_is_only_correct() {
        let selected = Some("joyful");
        assert_eq!(classify("joyful", "joyful", selected), Classification::Correct);
        assert_eq!(classify("sad", "joyful", selected), Classification::Neutral);
    }

    #[test]
    fn unknown_pick_highlights_only_the_answer() {
        let selected = Some("ecstatic");
        assert_eq!(classify("joyful", "joyful", selected), Classification::Correct);
        assert_eq!(classify("sad", "joyful", selected), Classification::Neutral);
    }
}
