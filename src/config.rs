use std::fs;
use std::path::Path;

use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use crate::error::{LessonError, Result};

pub const DEFAULT_PROMPT: &str = "Do you want to run the next example? (y/n): ";
pub const DEFAULT_CLOSING: &str =
    "All done!\nDon't forget to check the additional resources to learn more when you get stuck";

lazy_static! {
    static ref LESSON_NAME: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
}

/// Which lessons run, in what order, and how the run is framed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SequenceConfig {
    pub lessons: Vec<String>,
    /// Ask before each lesson after the first.
    pub confirm: bool,
    pub prompt: String,
    pub closing_message: String,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            lessons: vec![
                "address_of".to_string(),
                "mutate_through".to_string(),
                "array_walk".to_string(),
            ],
            confirm: true,
            prompt: DEFAULT_PROMPT.to_string(),
            closing_message: DEFAULT_CLOSING.to_string(),
        }
    }
}

impl SequenceConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SequenceConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lessons.is_empty() {
            return Err(LessonError::invalid_config("lesson list is empty"));
        }

        if let Some(bad) = self.lessons.iter().find(|name| !LESSON_NAME.is_match(name)) {
            return Err(LessonError::invalid_config(format!(
                "'{bad}' is not a valid lesson name"
            )));
        }

        let repeated: Vec<&String> = self.lessons.iter().duplicates().collect();
        if !repeated.is_empty() {
            return Err(LessonError::invalid_config(format!(
                "lessons listed more than once: {}",
                repeated.iter().join(", ")
            )));
        }

        Ok(())
    }

    /// Replace the lesson list, e.g. from `--lesson` flags.
    pub fn with_lessons(mut self, lessons: Vec<String>) -> Self {
        if !lessons.is_empty() {
            self.lessons = lessons;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reproduces_classroom_run() {
        let config = SequenceConfig::default();
        assert_eq!(config.lessons, ["address_of", "mutate_through", "array_walk"]);
        assert!(config.confirm);
        assert_eq!(config.prompt, DEFAULT_PROMPT);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_toml_means_defaults() {
        let config = SequenceConfig::from_toml_str("").unwrap();
        assert_eq!(config, SequenceConfig::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let config = SequenceConfig::from_toml_str(
            r#"
lessons = ["array_walk"]
confirm = false
"#,
        )
        .unwrap();
        assert_eq!(config.lessons, ["array_walk"]);
        assert!(!config.confirm);
        assert_eq!(config.closing_message, DEFAULT_CLOSING);
    }

    #[test]
    fn rejects_bad_lesson_lists() {
        let empty = SequenceConfig::from_toml_str("lessons = []").unwrap_err();
        assert!(empty.to_string().contains("lesson list is empty"));

        let bad_name = SequenceConfig::from_toml_str(r#"lessons = ["Array-Walk"]"#).unwrap_err();
        assert!(bad_name.to_string().contains("'Array-Walk' is not a valid lesson name"));

        let dup = SequenceConfig::from_toml_str(r#"lessons = ["array_walk", "array_walk"]"#)
            .unwrap_err();
        assert!(dup.to_string().contains("more than once: array_walk"));
    }

    #[test]
    fn unknown_keys_are_parse_errors() {
        let err = SequenceConfig::from_toml_str("lesons = []").unwrap_err();
        assert!(matches!(err, LessonError::ConfigParse(_)));
    }

    #[test]
    fn loads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lessons.toml");
        fs::write(&path, "closing_message = \"bye\"\n").unwrap();

        let config = SequenceConfig::load(&path).unwrap();
        assert_eq!(config.closing_message, "bye");

        let missing = SequenceConfig::load(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(missing, LessonError::Io(_)));
    }

    #[test]
    fn cli_lessons_override_config() {
        let config = SequenceConfig::default().with_lessons(vec!["array_walk".to_string()]);
        assert_eq!(config.lessons, ["array_walk"]);

        let untouched = SequenceConfig::default().with_lessons(Vec::new());
        assert_eq!(untouched, SequenceConfig::default());
    }
}
