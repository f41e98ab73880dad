use super::*;
use crate::error::SessionError;

impl VocabQuizApp {
    pub fn select_option(&mut self, option: &str) {
        match self.session.answer(option) {
            Ok(()) => {
                let correct = self
                    .session
                    .current_question()
                    .map(|q| q.is_correct(option))
                    .unwrap_or(false);
                log::debug!(
                    "Question {} answered with {option:?} (correct: {correct})",
                    self.session.current_index() + 1
                );
            }
            // Los botones ya están deshabilitados; si llega aquí, se ignora
            Err(e @ SessionError::AlreadyAnswered { .. }) => {
                log::warn!("Ignoring answer {option:?}: {e}");
            }
            Err(e @ SessionError::NoQuestion) => {
                log::warn!("Ignoring answer {option:?}: {e}");
            }
        }
    }

    pub fn go_next(&mut self) {
        self.session.next();
        log::debug!("Moved to question {}", self.session.current_index() + 1);
    }

    pub fn go_previous(&mut self) {
        self.session.previous();
        log::debug!("Moved to question {}", self.session.current_index() + 1);
    }

    pub fn restart_quiz(&mut self) {
        self.session.restart();
        log::info!("Quiz restarted with {} questions", self.session.len());
    }
}
