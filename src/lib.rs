pub mod app;
pub mod data;
pub mod error;
pub mod model;
pub mod session;
pub mod shuffle;
pub mod ui;
pub mod view_models;

pub use app::{AppConfig, VocabQuizApp};
pub use session::QuizSession;
