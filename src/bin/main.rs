use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

use pointer_lessons::cli::Cli;
use pointer_lessons::logger::init_logger;
use pointer_lessons::{LessonRegistry, Prompt, SequenceConfig, Sequencer};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let registry = LessonRegistry::with_builtin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.list {
        for lesson in registry.iter() {
            writeln!(out, "{:<16} {}", lesson.name().bold(), lesson.title())?;
        }
        return Ok(());
    }

    let config = match &cli.config {
        Some(path) => SequenceConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SequenceConfig::default(),
    }
    .with_lessons(cli.lessons.clone());
    config.validate().context("invalid lesson selection")?;
    tracing::debug!(?config, "resolved configuration");

    let lessons = registry.resolve(config.lessons.as_slice())?;
    let mut prompt = Prompt::new(io::stdin().lock()).auto_confirm(cli.yes);

    let summary = Sequencer::new(&config)
        .color(!cli.no_color)
        .run(&lessons, &mut prompt, &mut out)?;
    writeln!(out)?;
    tracing::info!(completed = ?summary.completed, finished = summary.finished, "run complete");

    Ok(())
}
