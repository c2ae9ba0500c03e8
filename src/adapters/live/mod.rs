//! Live adapters for real external interactions.

pub mod clock;
pub mod filesystem;
pub mod gemini;
pub mod git;
pub mod jira;
pub mod teams;
