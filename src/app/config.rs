use crate::data::DataSource;

/// Variable de entorno con la ruta de un banco de preguntas alternativo.
pub const DATA_ENV_VAR: &str = "VOCAB_QUIZ_DATA";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub data_source: DataSource,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Vocabulary Quiz".to_owned(),
            data_source: DataSource::Embedded,
        }
    }
}

impl AppConfig {
    /// Config por defecto + `VOCAB_QUIZ_DATA` si está definida (solo nativo).
    pub fn from_env() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::from_data_var(std::env::var(DATA_ENV_VAR).ok())
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }

    pub fn from_data_var(value: Option<String>) -> Self {
        let data_source = value
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .map(|v| DataSource::File(v.into()))
            .unwrap_or(DataSource::Embedded);
        Self {
            data_source,
            ..Self::default()
        }
    }
}
