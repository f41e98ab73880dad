use std::fmt;
use std::path::PathBuf;

/// Motivo por el que un registro del banco no es válido.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordProblem {
    BlankWord,
    TooFewOptions(usize),
    CorrectAnswerMissing(String),
}

impl fmt::Display for RecordProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordProblem::BlankWord => write!(f, "word is blank"),
            RecordProblem::TooFewOptions(n) => {
                write!(f, "needs at least 2 options, found {n}")
            }
            RecordProblem::CorrectAnswerMissing(answer) => {
                write!(f, "correct_answer {answer:?} is not one of the options")
            }
        }
    }
}

#[derive(Debug)]
pub enum DataError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidRecord {
        index: usize,
        word: String,
        reason: RecordProblem,
    },
}

impl fmt::Display for DataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataError::Io { path, source } => {
                write!(f, "could not read dataset {}: {source}", path.display())
            }
            DataError::Parse(e) => write!(f, "malformed dataset: {e}"),
            DataError::InvalidRecord {
                index,
                word,
                reason,
            } => write!(f, "question #{} ({word:?}): {reason}", index + 1),
        }
    }
}

impl std::error::Error for DataError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DataError::Io { source, .. } => Some(source),
            DataError::Parse(e) => Some(e),
            DataError::InvalidRecord { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(e: serde_json::Error) -> Self {
        DataError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// La sesión no tiene preguntas.
    NoQuestion,
    /// La pregunta actual ya tiene respuesta; la selección queda bloqueada.
    AlreadyAnswered { selected: String },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoQuestion => write!(f, "there is no question to answer"),
            SessionError::AlreadyAnswered { selected } => {
                write!(f, "question already answered with {selected:?}")
            }
        }
    }
}

impl std::error::Error for SessionError {}
