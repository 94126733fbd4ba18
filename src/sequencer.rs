use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::info;

use crate::config::SequenceConfig;
use crate::error::{LessonError, Result};
use crate::lesson::{write_banner, Lesson};
use crate::prompt::Prompt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: Vec<&'static str>,
    /// Every lesson ran and the closing message was printed.
    pub finished: bool,
}

/// Drives lessons in order, asking before each one after the first.
pub struct Sequencer<'c> {
    config: &'c SequenceConfig,
    banners: bool,
    /// ANSI styling on banners and the closing message.
    color: bool,
}

impl<'c> Sequencer<'c> {
    pub fn new(config: &'c SequenceConfig) -> Self {
        Self {
            config,
            banners: true,
            color: true,
        }
    }

    pub fn banners(mut self, on: bool) -> Self {
        self.banners = on;
        self
    }

    pub fn color(mut self, on: bool) -> Self {
        self.color = on;
        self
    }

    pub fn run<R: BufRead>(
        &self,
        lessons: &[&dyn Lesson],
        prompt: &mut Prompt<R>,
        out: &mut dyn Write,
    ) -> Result<RunSummary> {
        if lessons.is_empty() {
            return Err(LessonError::invalid_config("nothing to run"));
        }

        let mut completed = Vec::with_capacity(lessons.len());
        for (i, lesson) in lessons.iter().enumerate() {
            if i > 0 && self.config.confirm && !prompt.confirm(&self.config.prompt, out)? {
                info!(stopped_before = lesson.name(), "learner stopped");
                return Ok(RunSummary {
                    completed,
                    finished: false,
                });
            }

            info!(lesson = lesson.name(), "running lesson");
            if self.banners {
                write_banner(out, *lesson, self.color)?;
            }
            lesson.run(out)?;
            completed.push(lesson.name());
        }

        if self.color {
            write!(out, "{}", self.config.closing_message.green())?;
        } else {
            write!(out, "{}", self.config.closing_message)?;
        }
        out.flush()?;
        Ok(RunSummary {
            completed,
            finished: true,
        })
    }
}
