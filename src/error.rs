use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Duplicate task id: {0}")]
    DuplicateTask(String),

    #[error("Dependency cycle involving task: {0}")]
    DependencyCycle(String),

    #[error("Data validation failed: {}", .problems.join("; "))]
    DataQuality { problems: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;
