//! # Pointer Lessons
//!
//! Three short demonstrations of pointer basics, run in sequence:
//!
//! 1. `address_of` - print a value and the address holding it
//! 2. `mutate_through` - dereference, write through a view, observe the alias
//! 3. `array_walk` - walk an array by advancing a pointer
//!
//! ```bash
//! cargo run
//! cargo run -- --list
//! cargo run -- --lesson array_walk --yes
//! cargo run -- --config lessons.toml
//! ```

pub mod access;
pub mod cli;
pub mod config;
pub mod error;
pub mod lesson;
pub mod lessons;
pub mod logger;
pub mod prompt;
pub mod registry;
pub mod sequencer;

pub use access::{Access, AccessKind, PtrWalk};
pub use config::SequenceConfig;
pub use error::{LessonError, Result};
pub use lesson::Lesson;
pub use prompt::Prompt;
pub use registry::LessonRegistry;
pub use sequencer::{RunSummary, Sequencer};
