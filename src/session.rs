// src/session.rs

use crate::error::SessionError;
use crate::model::{QuestionRecord, SessionQuestion};
use crate::shuffle::shuffled;
use crate::view_models::QuestionView;
use rand::Rng;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AnswerState {
    #[default]
    Unanswered,
    Answered(String),
}

/// Estado de una partida: preguntas barajadas, posición y respuesta actual.
#[derive(Clone, Debug)]
pub struct QuizSession {
    records: Vec<QuestionRecord>, // banco original, nunca se baraja
    questions: Vec<SessionQuestion>,
    current_index: usize,
    answer: AnswerState,
}

impl QuizSession {
    pub fn new(records: Vec<QuestionRecord>) -> Self {
        Self::with_rng(records, &mut rand::rng())
    }

    /// Baraja las opciones de cada pregunta por separado; el orden de las
    /// preguntas se mantiene.
    pub fn with_rng<R: Rng + ?Sized>(records: Vec<QuestionRecord>, rng: &mut R) -> Self {
        let questions = build_questions(&records, rng);
        Self {
            records,
            questions,
            current_index: 0,
            answer: AnswerState::Unanswered,
        }
    }

    pub fn restart(&mut self) {
        self.restart_with_rng(&mut rand::rng());
    }

    pub fn restart_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = build_questions(&self.records, rng);
        self.current_index = 0;
        self.answer = AnswerState::Unanswered;
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn questions(&self) -> &[SessionQuestion] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> Option<&SessionQuestion> {
        self.questions.get(self.current_index)
    }

    pub fn selected_answer(&self) -> Option<&str> {
        match &self.answer {
            AnswerState::Answered(sel) => Some(sel.as_str()),
            AnswerState::Unanswered => None,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self.answer, AnswerState::Answered(_))
    }

    pub fn explanation_visible(&self) -> bool {
        self.is_answered()
    }

    /// La selección se bloquea tras la primera respuesta.
    /// `selected` no se valida contra las opciones.
    pub fn answer(&mut self, selected: &str) -> Result<(), SessionError> {
        if self.is_empty() {
            return Err(SessionError::NoQuestion);
        }
        if let AnswerState::Answered(prev) = &self.answer {
            return Err(SessionError::AlreadyAnswered {
                selected: prev.clone(),
            });
        }
        self.answer = AnswerState::Answered(selected.to_owned());
        Ok(())
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = (self.current_index + 1) % self.len();
        self.answer = AnswerState::Unanswered;
    }

    pub fn previous(&mut self) {
        if self.is_empty() {
            return;
        }
        self.current_index = (self.current_index + self.len() - 1) % self.len();
        self.answer = AnswerState::Unanswered;
    }

    pub fn current_view(&self) -> Option<QuestionView> {
        let question = self.current_question()?;
        Some(QuestionView::build(
            question,
            self.selected_answer(),
            self.current_index,
            self.len(),
        ))
    }
}

fn build_questions<R: Rng + ?Sized>(
    records: &[QuestionRecord],
    rng: &mut R,
) -> Vec<SessionQuestion> {
    records
        .iter()
        .map(|r| SessionQuestion::from_record(r, shuffled(&r.options, rng)))
        .collect()
}
