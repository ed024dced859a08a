//! # attrition-report
//!
//! Turns a prediction into something a person reads: a probability gauge
//! with fixed risk bands, a verdict, and the cost of replacing the employee.
//! Rendering is pure; nothing here touches the model.

pub mod cost;
pub mod formats;
pub mod gauge;
pub mod report;
pub mod verdict;

pub use cost::ReplacementCost;
pub use formats::{render, ReportFormat};
pub use gauge::{Gauge, RiskBand};
pub use report::{Outcome, Report};
pub use verdict::Verdict;
