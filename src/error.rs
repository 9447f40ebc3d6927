use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScorecardError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("data parse error in {path}: {message}")]
    DataParse { path: String, message: String },

    #[error("reference taxonomy is empty: {0}")]
    EmptyTaxonomy(String),

    #[error(
        "taxonomy mismatch in source '{source_name}': {level} '{found}' under '{parent}' is not in the reference taxonomy"
    )]
    Alignment {
        source_name: String,
        level: &'static str,
        parent: String,
        found: String,
    },

    #[error("source entity '{0}' is not scored in the reference taxonomy")]
    UnknownEntity(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScorecardError>;
