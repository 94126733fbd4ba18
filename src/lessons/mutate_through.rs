use std::io::Write;

use tracing::debug;

use super::{RENAMED, SAMPLE_NAME};
use crate::access::Access;
use crate::error::Result;
use crate::lesson::Lesson;

/// Dereference a view, write through it, then read the original binding.
pub struct MutateThrough;

impl Lesson for MutateThrough {
    fn name(&self) -> &'static str {
        "mutate_through"
    }

    fn title(&self) -> &'static str {
        "Dereferencing and writing through a pointer"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let mut name = String::from(SAMPLE_NAME);
        writeln!(out, "name: {}", name)?;

        {
            let mut sample = Access::Exclusive(&mut name);
            debug!(kind = %sample.kind(), writable = sample.is_writable(), "borrowed sample");
            writeln!(out, "name's memory address: {:p}", sample.address())?;
            writeln!(out, "name using sample: {}", sample.get())?;

            let previous = sample.set(String::from(RENAMED))?;
            debug!(%previous, kind = %sample.kind(), "wrote through sample");
            writeln!(out, "sample's new value: {}", sample.get())?;
        }

        // The exclusive view has ended, so the original binding is readable again.
        writeln!(out, "name's new value: {}", name)?;
        Ok(())
    }
}
