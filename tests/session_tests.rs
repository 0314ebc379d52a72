//! End-to-end tests of the session loop over real channels.
//!
//! Each test plays a signal tape into the inbound channel, closes it, runs
//! the session to completion, and then inspects both the confirmations the
//! producer side would receive and the final session report.

use exec_core::{Confirmation, PnlOutcome, Session, SessionConfig, SessionReport};
use rust_decimal_macros::dec;
use tokio::sync::mpsc;

async fn run_tape(tape: &[&str]) -> (SessionReport, Vec<Confirmation>) {
    let config = SessionConfig::default();
    let (signal_tx, signal_rx) = mpsc::channel(config.channel_capacity);
    let (confirmation_tx, mut confirmation_rx) = mpsc::channel(config.channel_capacity);

    let session = Session::new(config).expect("default config is valid");

    for payload in tape {
        signal_tx.send(payload.to_string()).await.expect("channel open");
    }
    drop(signal_tx); // closing the signal channel ends the loop

    let report = session.run(signal_rx, confirmation_tx).await;

    let mut confirmations = Vec::new();
    while let Some(payload) = confirmation_rx.recv().await {
        confirmations.push(serde_json::from_str(&payload).expect("confirmation wire form"));
    }

    (report, confirmations)
}

#[tokio::test]
async fn round_trip_confirms_both_trades() {
    let (report, confirmations) = run_tape(&[
        r#"{"action":"BUY","price":100,"time":"2024-01-02T09:30:00Z"}"#,
        r#"{"action":"SELL","price":110,"time":"2024-01-02T09:31:00Z"}"#,
    ])
    .await;

    assert_eq!(confirmations.len(), 2);

    let buy = &confirmations[0];
    assert_eq!(buy.price.value(), dec!(100));
    assert_eq!(buy.position, 1);
    assert_eq!(buy.pnl, None);
    assert_eq!(buy.time.to_string(), "2024-01-02T09:30:00Z");

    let sell = &confirmations[1];
    assert_eq!(sell.price.value(), dec!(110));
    assert_eq!(sell.position, 0);
    assert_eq!(sell.pnl.unwrap().value(), dec!(10));
    assert_eq!(sell.total_pnl.value(), dec!(10));

    assert_eq!(report.trade_count(), 2);
    assert_eq!(report.total_pnl.value(), dec!(10));
    assert_eq!(report.outcome, PnlOutcome::Profit);
    assert_eq!(report.portfolio_value.value(), dec!(100010));
    assert!(report.final_position.is_flat());
}

#[tokio::test]
async fn out_of_state_signals_get_no_confirmation() {
    let (report, confirmations) = run_tape(&[
        r#"{"action":"SELL","price":100,"time":"2024-01-02T09:30:00Z"}"#,
        r#"{"action":"BUY","price":100,"time":"2024-01-02T09:31:00Z"}"#,
        r#"{"action":"BUY","price":105,"time":"2024-01-02T09:32:00Z"}"#,
    ])
    .await;

    assert_eq!(confirmations.len(), 1);
    assert_eq!(confirmations[0].position, 1);

    assert_eq!(report.trade_count(), 1);
    assert!(report.final_position.is_long());
    assert_eq!(report.portfolio_value.value(), dec!(100100));
}

#[tokio::test]
async fn malformed_payloads_are_skipped() {
    let (report, confirmations) = run_tape(&[
        "not json at all",
        r#"{"action":"BUY","price":50,"time":"2024-01-02T09:30:00Z"}"#,
        r#"{"action":"BUY","price":-1,"time":"2024-01-02T09:31:00Z"}"#,
        r#"{"action":"SELL","price":40,"time":"not-a-time"}"#,
        r#"{"action":"SELL","price":40,"time":"2024-01-02T09:32:00Z"}"#,
    ])
    .await;

    assert_eq!(confirmations.len(), 2);
    assert_eq!(report.trade_count(), 2);
    assert_eq!(report.total_pnl.value(), dec!(-10));
    assert_eq!(report.outcome, PnlOutcome::Loss);
}

#[tokio::test]
async fn empty_tape_summarizes_cleanly() {
    let (report, confirmations) = run_tape(&[]).await;

    assert!(confirmations.is_empty());
    assert_eq!(report.trade_count(), 0);
    assert_eq!(report.outcome, PnlOutcome::Breakeven);
    assert_eq!(report.portfolio_value.value(), dec!(100000));
}

#[tokio::test]
async fn confirmations_arrive_in_execution_order() {
    let (report, confirmations) = run_tape(&[
        r#"{"action":"BUY","price":50,"time":"2024-01-02T09:30:00Z"}"#,
        r#"{"action":"SELL","price":40,"time":"2024-01-02T09:31:00Z"}"#,
        r#"{"action":"BUY","price":60,"time":"2024-01-02T09:32:00Z"}"#,
        r#"{"action":"SELL","price":70,"time":"2024-01-02T09:33:00Z"}"#,
    ])
    .await;

    let positions: Vec<u8> = confirmations.iter().map(|c| c.position).collect();
    assert_eq!(positions, vec![1, 0, 1, 0]);

    let totals: Vec<_> = confirmations.iter().map(|c| c.total_pnl.value()).collect();
    assert_eq!(totals, vec![dec!(0), dec!(-10), dec!(-10), dec!(0)]);

    assert_eq!(report.trade_count(), 4);
    assert_eq!(report.wins, 1);
    assert_eq!(report.losses, 1);
    assert_eq!(report.total_pnl.value(), dec!(0));
    assert_eq!(report.outcome, PnlOutcome::Breakeven);
}
