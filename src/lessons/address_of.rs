use std::io::Write;

use tracing::debug;

use super::SAMPLE_NAME;
use crate::access::Access;
use crate::error::Result;
use crate::lesson::Lesson;

/// Print a value and the address holding it.
pub struct AddressOf;

impl Lesson for AddressOf {
    fn name(&self) -> &'static str {
        "address_of"
    }

    fn title(&self) -> &'static str {
        "Taking an address"
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        let name = String::from(SAMPLE_NAME);
        let sample = Access::Shared(&name);
        debug!(kind = %sample.kind(), writable = sample.is_writable(), "borrowed sample");

        writeln!(out, "name: {}", name)?;
        writeln!(out, "name's memory address: {:p}", sample.address())?;
        Ok(())
    }
}
