//! Scenario tests for the settlement calculator
//!
//! Covers the worked examples end-to-end through the public API:
//! - Simple pairs and three-party groups
//! - Empty and all-even groups
//! - Unnamed participants and malformed amounts

use rust_decimal::Decimal;
use settlement_calculator::{
    parse_participants_json, settle, Participant, ParticipantInput, SettlementEngine, Transaction,
};

fn participant(name: &str, deposited: i64, current: i64) -> Participant {
    Participant::new(name, Decimal::new(deposited, 0), Decimal::new(current, 0))
}

fn tx(from: &str, to: &str, amount: &str) -> Transaction {
    Transaction {
        from: from.to_string(),
        to: to.to_string(),
        amount: amount.parse().unwrap(),
    }
}

#[test]
fn test_two_players() {
    let transfers = settle(&[participant("A", 100, 70), participant("B", 100, 130)]);
    assert_eq!(transfers, vec![tx("A", "B", "30.00")]);
}

#[test]
fn test_even_player_untouched() {
    let transfers = settle(&[
        participant("A", 100, 50),
        participant("B", 100, 100),
        participant("C", 100, 150),
    ]);
    assert_eq!(transfers, vec![tx("A", "C", "50.00")]);
}

#[test]
fn test_single_debtor_single_creditor_among_three() {
    let transfers = settle(&[
        participant("A", 100, 40),
        participant("B", 100, 160),
        participant("C", 100, 100),
    ]);
    assert_eq!(transfers, vec![tx("A", "B", "60.00")]);
}

#[test]
fn test_empty_group() {
    assert!(settle(&[]).is_empty());
}

#[test]
fn test_all_even() {
    let transfers = settle(&[
        participant("A", 100, 100),
        participant("B", 0, 0),
        participant("C", 25, 25),
    ]);
    assert!(transfers.is_empty());
}

#[test]
fn test_poker_night() {
    // Net: Anna -35.50, Ben +60.25, Cem -24.75, Dora 0
    let transfers = settle(&[
        Participant::new("Anna", Decimal::new(5000, 2), Decimal::new(1450, 2)),
        Participant::new("Ben", Decimal::new(5000, 2), Decimal::new(11025, 2)),
        Participant::new("Cem", Decimal::new(5000, 2), Decimal::new(2525, 2)),
        Participant::new("Dora", Decimal::new(5000, 2), Decimal::new(5000, 2)),
    ]);

    assert_eq!(
        transfers,
        vec![tx("Anna", "Ben", "35.50"), tx("Cem", "Ben", "24.75")]
    );
}

#[test]
fn test_duplicate_and_blank_names() {
    let transfers = settle(&[
        participant("Sam", 20, 0),
        participant("", 0, 5),
        participant("Sam", 0, 15),
    ]);

    assert_eq!(
        transfers,
        vec![tx("Sam", "Sam", "15.00"), tx("Sam", "Participant 2", "5.00")]
    );
}

#[test]
fn test_form_text_with_garbage() {
    let participants: Vec<Participant> = vec![
        ParticipantInput::from_text("A", "100", "seventy").into(),
        ParticipantInput::from_text("B", "", "100").into(),
    ];

    // A: -100, B: +100
    let transfers = settle(&participants);
    assert_eq!(transfers, vec![tx("A", "B", "100.00")]);
}

#[test]
fn test_json_document_end_to_end() {
    let doc = r#"[
        {"name": "Lea", "deposited": "20", "current": 5.5},
        {"name": "", "deposited": 20, "current": "34,50"},
        {"name": "Max", "deposited": 20, "current": null}
    ]"#;

    let participants = parse_participants_json(doc).unwrap();
    let engine = SettlementEngine::default();
    let report = engine.run(&participants);

    // Lea -14.50, Participant 2 +14.50, Max -20.00; Max is the larger debtor
    assert_eq!(
        report.transactions,
        vec![tx("Max", "Participant 2", "14.50")]
    );
    assert_eq!(report.summary.imbalance, "-20.00".parse::<Decimal>().unwrap());
    assert_eq!(
        engine.render(&report)[0],
        "Max → Participant 2 — 14.50 €"
    );
}

#[test]
fn test_report_serializes_amounts_as_strings() {
    let engine = SettlementEngine::default();
    let report = engine.run(&[participant("A", 100, 70), participant("B", 100, 130)]);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["transactions"][0]["amount"], "30.00");
    assert_eq!(json["summary"]["participant_count"], 2);
}
