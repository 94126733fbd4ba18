use std::collections::HashMap;

use crate::error::{LessonError, Result};
use crate::lesson::Lesson;
use crate::lessons::{AddressOf, ArrayWalk, MutateThrough};

/// Named lessons in registration order.
#[derive(Default)]
pub struct LessonRegistry {
    lessons: Vec<Box<dyn Lesson>>,
    index: HashMap<&'static str, usize>,
}

impl LessonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The three pointer demonstrations in their classroom order.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.insert(Box::new(AddressOf));
        registry.insert(Box::new(MutateThrough));
        registry.insert(Box::new(ArrayWalk));
        registry
    }

    pub fn register(&mut self, lesson: Box<dyn Lesson>) -> Result<()> {
        let name = lesson.name();
        if self.index.contains_key(name) {
            return Err(LessonError::DuplicateLesson {
                name: name.to_string(),
            });
        }
        self.insert(lesson);
        Ok(())
    }

    fn insert(&mut self, lesson: Box<dyn Lesson>) {
        self.index.insert(lesson.name(), self.lessons.len());
        self.lessons.push(lesson);
    }

    pub fn get(&self, name: &str) -> Result<&dyn Lesson> {
        match self.index.get(name) {
            Some(&i) => Ok(self.lessons[i].as_ref()),
            None => Err(LessonError::unknown_lesson(
                name,
                find_similar_name(name, &self.names()),
            )),
        }
    }

    /// Looks up every name in order, failing on the first unknown one.
    pub fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<&dyn Lesson>> {
        names.iter().map(|name| self.get(name.as_ref())).collect()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.lessons.iter().map(|lesson| lesson.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Lesson> {
        self.lessons.iter().map(|lesson| lesson.as_ref())
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

// =============================================================================
// Suggestions for mistyped lesson names
// =============================================================================

pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    if a.is_empty() {
        return b.chars().count();
    }
    if b.is_empty() {
        return a.chars().count();
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for i in 1..=a_chars.len() {
        curr[0] = i;
        for j in 1..=b_chars.len() {
            let cost = if a_chars[i - 1] == b_chars[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

pub fn find_similar_name(typo: &str, candidates: &[&str]) -> Option<String> {
    const MAX_DISTANCE: usize = 2;
    candidates
        .iter()
        .map(|&name| (levenshtein_distance(typo, name), name))
        .filter(|&(distance, _)| distance <= MAX_DISTANCE)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, name)| name.to_string())
}
