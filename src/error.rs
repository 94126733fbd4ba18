use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown lesson: '{name}'{}", suggestion_hint(.suggestion))]
    UnknownLesson {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Lesson '{name}' is already registered")]
    DuplicateLesson { name: String },

    #[error("Cannot write through a {kind} view")]
    ReadOnly { kind: &'static str },
}

impl LessonError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    pub fn unknown_lesson(name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self::UnknownLesson {
            name: name.into(),
            suggestion,
        }
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{name}'?)"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
