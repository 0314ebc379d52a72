// 8.0: the session loop. one consumer, two channels, strictly sequential:
// signal N is parsed, applied, and its confirmation send attempted before
// signal N+1 is read. the loop ends when every producer has dropped its
// sender, then the ledger is summarized exactly once.
//
// per-signal failures never escape the iteration that caused them: malformed
// payloads are skipped, rejections are logged, and a confirmation that cannot
// be delivered inside the configured bound is dropped. the ledger mutation has
// already committed by then and is never rolled back.

use crate::config::{ConfigError, SessionConfig};
use crate::confirm::Confirmation;
use crate::engine::{Engine, Outcome};
use crate::report::SessionReport;
use crate::signal::Signal;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendTimeoutError;
use tokio::time::Duration;
use tracing::{debug, info, warn};

pub struct Session {
    engine: Engine,
    confirmation_timeout: Duration,
}

impl Session {
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            engine: Engine::new(config.engine),
            confirmation_timeout: Duration::from_millis(config.confirmation_timeout_ms),
        })
    }

    /// Drain the signal channel to completion and summarize the ledger.
    pub async fn run(
        mut self,
        mut signals: mpsc::Receiver<String>,
        confirmations: mpsc::Sender<String>,
    ) -> SessionReport {
        info!(
            starting_cash = %self.engine.ledger().cash(),
            "session started, waiting for signals"
        );

        while let Some(payload) = signals.recv().await {
            self.handle(&payload, &confirmations).await;
        }

        info!(
            executed = self.engine.executed_count(),
            rejected = self.engine.rejected_count(),
            "signal channel closed, session ending"
        );

        SessionReport::from_ledger(self.engine.ledger())
    }

    async fn handle(&mut self, payload: &str, confirmations: &mpsc::Sender<String>) {
        let signal = match Signal::parse(payload) {
            Ok(signal) => signal,
            Err(error) => {
                warn!(%error, "skipping malformed signal");
                return;
            }
        };

        match self.engine.process(&signal) {
            Outcome::Rejected(rejection) => {
                info!(
                    action = %rejection.signal.action,
                    price = %rejection.signal.price,
                    reason = %rejection.reason,
                    "signal ignored"
                );
            }
            Outcome::Executed(execution) => {
                info!(
                    action = %execution.trade.action,
                    price = %execution.trade.price,
                    pnl = %execution.trade.pnl,
                    total_pnl = %execution.confirmation.total_pnl,
                    "trade executed"
                );
                self.deliver(&execution.confirmation, confirmations).await;
            }
        }
    }

    // best-effort, bounded. the trade is already on the ledger.
    async fn deliver(&self, confirmation: &Confirmation, confirmations: &mpsc::Sender<String>) {
        let payload = match confirmation.to_wire() {
            Ok(payload) => payload,
            Err(error) => {
                warn!(%error, "failed to serialize confirmation, dropping it");
                return;
            }
        };

        match confirmations
            .send_timeout(payload, self.confirmation_timeout)
            .await
        {
            Ok(()) => debug!(action = %confirmation.action, "confirmation delivered"),
            Err(SendTimeoutError::Timeout(_)) => {
                warn!(
                    timeout_ms = self.confirmation_timeout.as_millis() as u64,
                    "confirmation send timed out, dropping it"
                );
            }
            Err(SendTimeoutError::Closed(_)) => {
                warn!("confirmation channel closed, dropping confirmation");
            }
        }
    }
}
