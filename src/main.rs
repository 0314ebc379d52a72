//! Long-only execution session demo.
//!
//! Wires the engine to real in-process channels: a scripted producer plays a
//! signal tape (including a malformed payload and two out-of-state signals),
//! a listener drains the confirmations the producer side would receive, and
//! the session summary is printed once the tape ends.

use exec_core::{Session, SessionConfig};
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SessionConfig::default();
    let capacity = config.channel_capacity;

    let session = match Session::new(config) {
        Ok(session) => session,
        Err(error) => {
            eprintln!("invalid session config: {error}");
            std::process::exit(1);
        }
    };

    let (signal_tx, signal_rx) = mpsc::channel(capacity);
    let (confirmation_tx, confirmation_rx) = mpsc::channel(capacity);

    let producer = tokio::spawn(produce_signals(signal_tx));
    let listener = tokio::spawn(drain_confirmations(confirmation_rx));

    let report = session.run(signal_rx, confirmation_tx).await;

    // both tasks end once their channel counterparts are gone
    let _ = producer.await;
    let _ = listener.await;

    println!("\n{report}");
}

/// Play the demo tape. Dropping the sender at the end (or on ctrl-c) closes
/// the signal channel and lets the session wind down deterministically.
async fn produce_signals(signals: mpsc::Sender<String>) {
    let tape = [
        r#"{"action":"BUY","price":100.0,"time":"2024-01-02T09:30:00Z"}"#,
        // ignored: already long
        r#"{"action":"BUY","price":102.5,"time":"2024-01-02T09:32:00Z"}"#,
        r#"{"action":"SELL","price":110.0,"time":"2024-01-02T09:45:00Z"}"#,
        // ignored: nothing held
        r#"{"action":"SELL","price":108.0,"time":"2024-01-02T09:46:00Z"}"#,
        // skipped: not a signal
        r#"{"action":"HOLD","price":"??"}"#,
        r#"{"action":"BUY","price":107.0,"time":"2024-01-02T10:15:00Z"}"#,
        r#"{"action":"SELL","price":103.5,"time":"2024-01-02T11:02:00Z"}"#,
    ];

    for payload in tape {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, closing signal channel");
                return;
            }
            sent = signals.send(payload.to_string()) => {
                if sent.is_err() {
                    warn!("signal channel closed before the tape finished");
                    return;
                }
            }
        }
    }

    info!("tape finished, closing signal channel");
}

/// What the signal producer would see coming back.
async fn drain_confirmations(mut confirmations: mpsc::Receiver<String>) {
    while let Some(payload) = confirmations.recv().await {
        info!(confirmation = %payload, "producer received confirmation");
    }
}
