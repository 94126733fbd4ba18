use std::io::Write;

use tracing::trace;

use super::SAMPLE_ARRAY;
use crate::access::PtrWalk;
use crate::error::Result;
use crate::lesson::Lesson;

/// Walk a fixed array by advancing a pointer instead of indexing.
pub struct ArrayWalk;

impl Lesson for ArrayWalk {
    fn name(&self) -> &'static str {
        "array_walk"
    }

    fn title(&self) -> &'static str {
        "Pointer arithmetic over an array"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let a = SAMPLE_ARRAY;
        for (value, at) in PtrWalk::new(&a) {
            trace!(value, address = ?at, "visit");
            writeln!(out, "{}", value)?;
        }
        Ok(())
    }
}
