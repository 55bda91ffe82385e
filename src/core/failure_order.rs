//! Ordered failure handling with a cleanup step that always runs.
//!
//! A failed attempt is routed to the narrowest matching handler first
//! ([`Failure::Runtime`]), then to the general one ([`Failure::General`]).
//! Whatever happens, the cleanup message is the last line produced.

use crate::config::toml_config::{
    DEFAULT_CLEANUP_MESSAGE, DEFAULT_GENERAL_MESSAGE, DEFAULT_INDEX, DEFAULT_RUNTIME_MESSAGE,
};
use crate::config::DrillConfig;
use crate::domain::ports::Drill;
use crate::utils::error::Result;
use std::fmt::Display;
use std::io::BufRead;
use thiserror::Error;

/// Runtime/logic-level failures: misuse of a value by the program itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeFailure {
    #[error("cannot read index {index} of an absent value")]
    AbsentDereference { index: usize },

    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Every failure an attempt can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    #[error(transparent)]
    Runtime(#[from] RuntimeFailure),

    #[error("{0}")]
    General(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Attempting,
    RecoveredNarrow,
    RecoveredGeneral,
    Completed,
}

/// Character at `index` (counted in chars) of a value that may be absent.
pub fn char_at(value: Option<&str>, index: usize) -> std::result::Result<char, Failure> {
    let value = value.ok_or(RuntimeFailure::AbsentDereference { index })?;
    value.chars().nth(index).ok_or_else(|| {
        RuntimeFailure::IndexOutOfBounds {
            index,
            len: value.chars().count(),
        }
        .into()
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub runtime: String,
    pub general: String,
    pub cleanup: String,
}

impl Messages {
    pub fn from_config(config: &DrillConfig) -> Self {
        Self {
            runtime: config.runtime_message().to_string(),
            general: config.general_message().to_string(),
            cleanup: config.cleanup_message().to_string(),
        }
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            runtime: DEFAULT_RUNTIME_MESSAGE.to_string(),
            general: DEFAULT_GENERAL_MESSAGE.to_string(),
            cleanup: DEFAULT_CLEANUP_MESSAGE.to_string(),
        }
    }
}

/// The phases visited and the lines produced by one guarded run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub phases: Vec<Phase>,
    pub lines: Vec<String>,
}

impl Outcome {
    pub fn final_phase(&self) -> Option<Phase> {
        self.phases.last().copied()
    }
}

/// Appends the cleanup line and enters `Completed` when dropped,
/// including during unwinding.
struct Finally<'a> {
    outcome: &'a mut Outcome,
    message: &'a str,
}

impl<'a> Finally<'a> {
    fn new(outcome: &'a mut Outcome, message: &'a str) -> Self {
        Self { outcome, message }
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!("phase -> {:?}", phase);
        self.outcome.phases.push(phase);
    }

    fn say(&mut self, line: impl Into<String>) {
        self.outcome.lines.push(line.into());
    }
}

impl Drop for Finally<'_> {
    fn drop(&mut self) {
        self.outcome.lines.push(self.message.to_string());
        self.outcome.phases.push(Phase::Completed);
        tracing::debug!("phase -> {:?}", Phase::Completed);
    }
}

/// Runs `attempt`, dispatching any failure narrowest-first, then cleans up.
pub fn run_guarded<T, F>(attempt: F, messages: &Messages) -> Outcome
where
    T: Display,
    F: FnOnce() -> std::result::Result<T, Failure>,
{
    let mut outcome = Outcome::default();
    {
        let mut scope = Finally::new(&mut outcome, &messages.cleanup);
        scope.enter(Phase::Attempting);

        match attempt() {
            Ok(value) => scope.say(value.to_string()),
            Err(Failure::Runtime(failure)) => {
                tracing::debug!("runtime failure: {}", failure);
                scope.enter(Phase::RecoveredNarrow);
                scope.say(messages.runtime.as_str());
            }
            Err(failure) => {
                tracing::debug!("general failure: {}", failure);
                scope.enter(Phase::RecoveredGeneral);
                scope.say(messages.general.as_str());
            }
        }
    }
    outcome
}

/// Reads a character from a value that is never there.
#[derive(Debug, Clone)]
pub struct FailureOrderDrill {
    index: usize,
    messages: Messages,
}

impl FailureOrderDrill {
    pub fn new(index: usize, messages: Messages) -> Self {
        Self { index, messages }
    }

    pub fn from_config(config: &DrillConfig) -> Self {
        Self::new(config.index(), Messages::from_config(config))
    }

    pub fn outcome(&self) -> Outcome {
        let absent: Option<&str> = None;
        run_guarded(|| char_at(absent, self.index), &self.messages)
    }
}

impl Default for FailureOrderDrill {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX, Messages::default())
    }
}

impl Drill for FailureOrderDrill {
    fn name(&self) -> &'static str {
        "failure-order"
    }

    fn execute(&self, _input: &mut dyn BufRead) -> Result<Vec<String>> {
        Ok(self.outcome().lines)
    }
}
