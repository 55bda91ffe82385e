pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliArgs;

pub use config::DrillConfig;
pub use crate::core::{
    failure_order::{char_at, run_guarded, Failure, Outcome, Phase, RuntimeFailure},
    runner::DrillRunner,
    uppercase::{parse_line, to_upper_safe},
    FailureOrderDrill, UppercaseDrill,
};
pub use utils::error::{DrillError, Result};
