//! Orchestration of the single active scan.
//!
//! - [`state`] - The published `ScanState` tagged union
//! - [`engine`] - The `ScanOrchestrator` state machine

pub mod engine;
pub mod state;

pub use engine::ScanOrchestrator;
pub use state::ScanState;
