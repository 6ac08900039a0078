//! Search lifecycle: submission, catalog fetch, result acceptance.

mod orchestrator;
mod types;

pub use orchestrator::SearchOrchestrator;
pub use types::*;
