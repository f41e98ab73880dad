use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    Synonyms,
    Antonyms,
}

impl QuestionKind {
    /// Palabra usada en el enunciado ("Synonym of ...")
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Synonyms => "Synonym",
            QuestionKind::Antonyms => "Antonym",
        }
    }
}

/// Una pregunta tal y como viene en el banco de datos.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct QuestionRecord {
    pub word: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub synonyms: String,
    pub antonyms: String,
    pub example: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Dataset {
    pub questions: Vec<QuestionRecord>,
}

/// Pregunta de la sesión: igual que el registro pero con las opciones barajadas.
/// No se modifica después de crearse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionQuestion {
    pub word: String,
    pub kind: QuestionKind,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub synonyms: String,
    pub antonyms: String,
    pub example: String,
}

impl SessionQuestion {
    pub fn from_record(record: &QuestionRecord, options: Vec<String>) -> Self {
        Self {
            word: record.word.clone(),
            kind: record.kind,
            options,
            correct_answer: record.correct_answer.clone(),
            synonyms: record.synonyms.clone(),
            antonyms: record.antonyms.clone(),
            example: record.example.clone(),
        }
    }

    pub fn prompt(&self) -> String {
        format!("{} of {}:", self.kind.label(), self.word)
    }

    pub fn is_correct(&self, option: &str) -> bool {
        self.correct_answer == option
    }
}
