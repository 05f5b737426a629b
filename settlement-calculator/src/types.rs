//! Core types for the settlement calculator

use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One participant's deposit and final holding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name (may be empty)
    #[serde(default)]
    pub name: String,

    /// Amount brought into the game
    pub deposited: Decimal,

    /// Amount held at the end
    pub current: Decimal,
}

impl Participant {
    /// Create new participant
    pub fn new(name: impl Into<String>, deposited: Decimal, current: Decimal) -> Self {
        Self {
            name: name.into(),
            deposited,
            current,
        }
    }

    /// Create from float amounts; non-finite values become zero
    pub fn from_f64(name: impl Into<String>, deposited: f64, current: f64) -> Self {
        Self::new(name, money::from_f64(deposited), money::from_f64(current))
    }

    /// Unrounded net position (`current - deposited`), clamped to the `Decimal` range
    pub fn raw_net(&self) -> Decimal {
        money::saturating_sub(self.current, self.deposited)
    }
}

/// Net position derived from a participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Position in the original input (0-based)
    pub index: usize,

    /// Name used in transfers
    pub label: String,

    /// Net position rounded to 2 decimals (positive = creditor, negative = debtor)
    pub net: Decimal,
}

impl Balance {
    /// Check if debtor (owes money)
    pub fn is_debtor(&self) -> bool {
        self.net < Decimal::ZERO
    }

    /// Check if creditor (is owed money)
    pub fn is_creditor(&self) -> bool {
        self.net > Decimal::ZERO
    }

    /// Check if nothing is owed either way
    pub fn is_settled(&self) -> bool {
        self.net.is_zero()
    }
}

/// Directed payment that settles part of a debt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Paying participant (was a debtor)
    pub from: String,

    /// Receiving participant (was a creditor)
    pub to: String,

    /// Amount, strictly positive, 2 decimal places
    pub amount: Decimal,
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}: {:.2}", self.from, self.to, self.amount)
    }
}

/// Group totals shown alongside the transfers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementSummary {
    /// Number of participants
    pub participant_count: usize,

    /// Sum of all deposits
    pub total_deposited: Decimal,

    /// Sum of all final holdings
    pub total_current: Decimal,

    /// Sum of rounded net positions; zero when nothing was created or lost
    pub imbalance: Decimal,

    /// Sum of all transfer amounts
    pub transferred: Decimal,
}

impl SettlementSummary {
    /// Check if the group's books close
    pub fn is_balanced(&self) -> bool {
        self.imbalance.is_zero()
    }
}

/// Transfers plus summary for one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementReport {
    /// Transfers to execute, in emission order
    pub transactions: Vec<Transaction>,

    /// Group totals
    pub summary: SettlementSummary,
}
