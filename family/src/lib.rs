//! Family Report
//!
//! A household of fixed-role members and a report that prints each member
//! followed by the average age.

pub mod components;
pub mod household;
pub mod report;

pub use components::*;
pub use household::Household;
pub use report::{average_age, FamilyReport, ReportError};
