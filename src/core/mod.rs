pub mod failure_order;
pub mod runner;
pub mod uppercase;

pub use crate::domain::model::TextInput;
pub use crate::domain::ports::Drill;
pub use crate::utils::error::Result;
pub use failure_order::FailureOrderDrill;
pub use uppercase::UppercaseDrill;
