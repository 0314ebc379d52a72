// 5.0: the execution engine. the sole state-transition authority: one signal
// in, one outcome out, strictly in arrival order. deterministic with no
// external I/O; the session loop owns all transport.

mod config;
mod core;
mod results;

pub use config::EngineConfig;
pub use core::Engine;
pub use results::{Execution, Outcome, RejectReason, Rejection};
