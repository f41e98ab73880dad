// src/data.rs

use crate::error::{DataError, RecordProblem};
use crate::model::{Dataset, QuestionRecord};
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;
use std::path::PathBuf;

/// De dónde sale el banco de preguntas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataSource {
    Embedded,
    File(PathBuf),
}

/// Parsea y valida el documento `{ "questions": [...] }`.
/// Falla en el primer registro inválido; una lista vacía es válida.
pub fn parse_dataset(content: &str) -> Result<Vec<QuestionRecord>, DataError> {
    let dataset: Dataset = serde_json::from_str(content)?;
    for (index, record) in dataset.questions.iter().enumerate() {
        if let Some(reason) = check_record(record) {
            return Err(DataError::InvalidRecord {
                index,
                word: record.word.clone(),
                reason,
            });
        }
    }
    Ok(dataset.questions)
}

fn check_record(record: &QuestionRecord) -> Option<RecordProblem> {
    if record.word.trim().is_empty() {
        return Some(RecordProblem::BlankWord);
    }
    if record.options.len() < 2 {
        return Some(RecordProblem::TooFewOptions(record.options.len()));
    }
    if !record.options.contains(&record.correct_answer) {
        return Some(RecordProblem::CorrectAnswerMissing(
            record.correct_answer.clone(),
        ));
    }
    None
}

/// Carga el banco de preguntas desde el JSON embebido
pub fn read_questions_embedded() -> Result<Vec<QuestionRecord>, DataError> {
    let file_content = include_str!("data/quiz_questions.json");
    parse_dataset(file_content)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn read_questions_from_path(path: &Path) -> Result<Vec<QuestionRecord>, DataError> {
    let content = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dataset(&content)
}

pub fn load_questions(source: &DataSource) -> Result<Vec<QuestionRecord>, DataError> {
    match source {
        DataSource::Embedded => read_questions_embedded(),
        #[cfg(not(target_arch = "wasm32"))]
        DataSource::File(path) => read_questions_from_path(path),
        // En la web no hay sistema de ficheros
        #[cfg(target_arch = "wasm32")]
        DataSource::File(_) => read_questions_embedded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionKind;

    #[test]
    fn embedded_dataset_is_valid_and_not_empty() {
        let questions = read_questions_embedded().expect("embedded dataset ok");
        assert!(!questions.is_empty());
        assert!(
            questions
                .iter()
                .all(|q| q.options.contains(&q.correct_answer))
        );
    }

    #[test]
    fn parses_single_record() {
        let json = r#"{"questions": [{
            "word": "happy",
            "type": "synonyms",
            "options": ["joyful", "sad", "tired", "angry"],
            "correct_answer": "joyful",
            "synonyms": "joyful, cheerful",
            "antonyms": "sad, unhappy",
            "example": "She was happy with the result."
        }]}"#;
        let questions = parse_dataset(json).expect("parse ok");
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::Synonyms);
        assert_eq!(questions[0].options[0], "joyful");
    }

    #[test]
    fn empty_question_list_is_allowed() {
        let questions = parse_dataset(r#"{"questions": []}"#).expect("parse ok");
        assert!(questions.is_empty());
    }

    #[test]
    fn missing_field_is_a_parse_error() {
        let json = r#"{"questions": [{
            "word": "happy",
            "type": "synonyms",
            "options": ["joyful", "sad"],
            "synonyms": "", "antonyms": "", "example": ""
        }]}"#;
        assert!(matches!(parse_dataset(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn unknown_type_is_a_parse_error() {
        let json = r#"{"questions": [{
            "word": "happy",
            "type": "homonyms",
            "options": ["joyful", "sad"],
            "correct_answer": "joyful",
            "synonyms": "", "antonyms": "", "example": ""
        }]}"#;
        assert!(matches!(parse_dataset(json), Err(DataError::Parse(_))));
    }

    #[test]
    fn correct_answer_outside_options_is_rejected() {
        let json = r#"{"questions": [
            {"word": "big", "type": "synonyms", "options": ["large", "small"],
             "correct_answer": "large", "synonyms": "", "antonyms": "", "example": ""},
            {"word": "cold", "type": "antonyms", "options": ["chilly", "icy"],
             "correct_answer": "hot", "synonyms": "", "antonyms": "", "example": ""}
        ]}"#;
        match parse_dataset(json) {
            Err(DataError::InvalidRecord {
                index,
                word,
                reason,
            }) => {
                assert_eq!(index, 1);
                assert_eq!(word, "cold");
                assert_eq!(reason, RecordProblem::CorrectAnswerMissing("hot".into()));
            }
            other => panic!("expected InvalidRecord, got {other:?}"),
        }
    }

    #[test]
    fn single_option_is_rejected() {
        let json = r#"{"questions": [
            {"word": "big", "type": "synonyms", "options": ["large"],
             "correct_answer": "large", "synonyms": "", "antonyms": "", "example": ""}
        ]}"#;
        assert!(matches!(
            parse_dataset(json),
            Err(DataError::InvalidRecord {
                reason: RecordProblem::TooFewOptions(1),
                ..
            })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let path = PathBuf::from("definitely/not/here.json");
        let err = load_questions(&DataSource::File(path.clone())).expect_err("must fail");
        match err {
            DataError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected Io error, got {other:?}"),
        }
    }
}
