use crate::utils::error::Result;
use std::io::BufRead;

/// One exercise program: consume stdin, produce the lines to print.
pub trait Drill {
    fn name(&self) -> &'static str;
    fn execute(&self, input: &mut dyn BufRead) -> Result<Vec<String>>;
}
