//! # attrition-cli
//!
//! The form, as a command line. Each field is a bounded flag whose default
//! is the form's initial value, and each invocation is one submit.

pub mod cli;
pub mod handler;

pub use cli::{run, run_from_env, Cli};
