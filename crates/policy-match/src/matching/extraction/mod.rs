//! Best-effort structured fields recovered from free-text catalog columns.

mod amount;
mod deadline;

pub use amount::extract_amount;
pub use deadline::{
    analyze_deadline, parse_deadline, DeadlineAssessment, DeadlineStatus, DeadlineUrgency,
};
