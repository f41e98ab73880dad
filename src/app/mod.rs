use crate::data::{DataSource, load_questions};
use crate::session::QuizSession;

// Submódulos
pub mod actions;
pub mod config;

pub use config::AppConfig;

pub struct VocabQuizApp {
    pub session: QuizSession,
    pub config: AppConfig,
    /// Error al cargar el banco; la sesión queda vacía.
    pub load_error: Option<String>,
}

impl VocabQuizApp {
    pub fn new(config: AppConfig) -> Self {
        match load_questions(&config.data_source) {
            Ok(records) => {
                log::info!(
                    "Loaded {} questions from {}",
                    records.len(),
                    describe_source(&config.data_source)
                );
                Self::with_session(QuizSession::new(records), config)
            }
            Err(e) => {
                log::error!("Could not load quiz data: {e}");
                let mut app = Self::with_session(QuizSession::new(Vec::new()), config);
                app.load_error = Some(e.to_string());
                app
            }
        }
    }

    pub fn with_session(session: QuizSession, config: AppConfig) -> Self {
        Self {
            session,
            config,
            load_error: None,
        }
    }
}

fn describe_source(source: &DataSource) -> String {
    match source {
        DataSource::Embedded => "embedded dataset".to_owned(),
        DataSource::File(path) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn new_with_embedded_data_starts_on_first_question() {
        let app = VocabQuizApp::new(AppConfig::default());
        assert!(app.load_error.is_none());
        assert!(!app.session.is_empty());
        assert_eq!(app.session.current_index(), 0);
    }

    #[test]
    fn load_failure_leaves_empty_session_and_error() {
        let config = AppConfig {
            data_source: DataSource::File(PathBuf::from("missing/quiz.json")),
            ..AppConfig::default()
        };
        let app = VocabQuizApp::new(config);
        assert!(app.session.is_empty());
        let msg = app.load_error.expect("error recorded");
        assert!(msg.contains("missing/quiz.json"));
    }
}
