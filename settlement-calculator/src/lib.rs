//! Settlement Calculator
//!
//! Settles a group's net balances with a short list of peer-to-peer transfers.
//! Each participant brings a deposit and ends with some current amount; the
//! difference is their net position. The calculator pays debtors out to
//! creditors until every position is zero.
//!
//! # Architecture
//!
//! 1. **Input**: Lenient participant records (unparsable amounts become zero)
//! 2. **Balances**: Net position per participant, rounded to 2 decimals
//! 3. **Netting**: Greedy largest-debtor / largest-creditor matching
//! 4. **Report**: Transfer instructions plus group totals
//!
//! # Invariants
//!
//! - Every transfer amount is strictly positive with 2 decimal places
//! - Each debtor pays exactly its debt; each creditor receives exactly its credit
//! - No state survives between calls
//!
//! # Example
//!
//! ```
//! use rust_decimal::Decimal;
//! use settlement_calculator::{settle, Participant};
//!
//! let transfers = settle(&[
//!     Participant::new("Anna", Decimal::new(100, 0), Decimal::new(70, 0)),
//!     Participant::new("Ben", Decimal::new(100, 0), Decimal::new(130, 0)),
//! ]);
//!
//! assert_eq!(transfers.len(), 1);
//! assert_eq!(transfers[0].from, "Anna");
//! assert_eq!(transfers[0].to, "Ben");
//! assert_eq!(transfers[0].amount.to_string(), "30.00");
//! ```

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    rust_2018_idioms,
    missing_debug_implementations,
    clippy::all
)]

pub mod types;
pub mod money;
pub mod input;
pub mod netting;
pub mod report;
pub mod error;
pub mod config;
pub mod engine;

// Re-exports
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use engine::{summarize, SettlementEngine};
pub use input::{parse_participants_json, ParticipantInput};
pub use netting::NettingEngine;

/// Settle participants with default labelling
pub fn settle(participants: &[Participant]) -> Vec<Transaction> {
    NettingEngine::default().settle(participants)
}
