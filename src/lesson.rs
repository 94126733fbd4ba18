use std::io::Write;

use colored::Colorize;

use crate::error::Result;

/// A runnable demonstration. Output goes to the writer it is handed so
/// callers can point it at stdout or capture it.
pub trait Lesson {
    /// Registry key, e.g. `address_of`.
    fn name(&self) -> &'static str;

    fn title(&self) -> &'static str;

    fn run(&self, out: &mut dyn Write) -> Result<()>;
}

pub fn write_banner(out: &mut dyn Write, lesson: &dyn Lesson, color: bool) -> Result<()> {
    let banner = format!("== {} ==", lesson.title());
    if color {
        writeln!(out, "{}", banner.bold().cyan())?;
    } else {
        writeln!(out, "{}", banner)?;
    }
    Ok(())
}
