// exec-core: single-instrument long-only execution engine.
// ledger-first architecture: the trade ledger is the source of truth and
// confirmations are best-effort notification derived from it.
// the engine core is deterministic with no external I/O; the session loop
// owns all transport.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: Action, Position, Price, Quote, Timestamp
//   2.x  signal.rs: inbound signal parsing and validation
//   3.x  ledger.rs: position ledger: entry price, cash, pnl, trade history
//   4.x  confirm.rs: outbound confirmation messages
//   5.x  engine/: core engine: signal processing and outcome types
//   6.x  report.rs: end-of-session summary
//   7.x  config.rs: session and engine settings
//   8.x  session.rs: channel loop: receive, process, confirm, shut down

// core trading modules
pub mod confirm;
pub mod engine;
pub mod ledger;
pub mod report;
pub mod signal;
pub mod types;

// integration modules
pub mod config;
pub mod session;

// re exports for convenience
pub use confirm::*;
pub use config::*;
pub use engine::*;
pub use ledger::*;
pub use report::*;
pub use session::*;
pub use signal::*;
pub use types::*;
