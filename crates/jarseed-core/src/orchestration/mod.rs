//! Setup orchestration across resolver, installer and descriptor.

pub mod setup;

pub use setup::{RunReport, RunState, SetupOrchestrator, SetupRun};
