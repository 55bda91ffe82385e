use crate::core::Drill;
use crate::utils::error::Result;
use std::io::{BufRead, Write};

pub struct DrillRunner<D: Drill> {
    drill: D,
}

impl<D: Drill> DrillRunner<D> {
    pub fn new(drill: D) -> Self {
        Self { drill }
    }

    /// Executes the drill and prints each produced line; returns the line count.
    pub fn run<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<usize> {
        tracing::info!("Starting {}", self.drill.name());

        let lines = self.drill.execute(input)?;
        tracing::debug!("{} produced {} line(s)", self.drill.name(), lines.len());

        for line in &lines {
            writeln!(output, "{}", line)?;
        }
        output.flush()?;

        tracing::info!("{} finished", self.drill.name());
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FailureOrderDrill, UppercaseDrill};
    use std::io::Cursor;

    #[test]
    fn test_run_writes_newline_terminated_lines() {
        let runner = DrillRunner::new(UppercaseDrill::default());
        let mut output = Vec::new();
        let written = runner.run(&mut Cursor::new("hello\n"), &mut output).unwrap();

        assert_eq!(written, 1);
        assert_eq!(String::from_utf8(output).unwrap(), "HELLO\n");
    }

    #[test]
    fn test_run_ignores_input_for_failure_order() {
        let runner = DrillRunner::new(FailureOrderDrill::default());
        let mut output = Vec::new();
        let written = runner
            .run(&mut Cursor::new("anything\n"), &mut output)
            .unwrap();

        assert_eq!(written, 2);
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "A runtime exception occurred\nFinally!\n"
        );
    }

    #[test]
    fn test_run_propagates_drill_error_without_output() {
        let runner = DrillRunner::new(UppercaseDrill::default());
        let mut output = Vec::new();
        assert!(runner.run(&mut Cursor::new(""), &mut output).is_err());
        assert!(output.is_empty());
    }
}
