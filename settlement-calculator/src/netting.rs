//! Net-balance settlement algorithm
//!
//! Turns a set of signed balances into directed transfers that bring every
//! balance back to zero.
//!
//! # Algorithm
//!
//! 1. Derive each participant's net position (`current - deposited`, 2 dp)
//! 2. Split into debtors (most negative first) and creditors (largest first),
//!    dropping zero balances
//! 3. Walk both lists with two cursors, paying `min(debt, credit)` from the
//!    current debtor to the current creditor and advancing whichever side
//!    reached zero
//!
//! The pairing is greedy. It usually needs few transfers but is not
//! guaranteed to find the minimum count.
//!
//! # Example
//!
//! ```text
//! Net positions:
//!   A: -60 (debtor)
//!   B: -20 (debtor)
//!   C: +50 (creditor)
//!   D: +30 (creditor)
//!
//! Transfers:
//!   A pays C: 50
//!   A pays D: 10
//!   B pays D: 20
//! ```

use crate::{
    money,
    types::{Balance, Participant, Transaction},
};
use rust_decimal::Decimal;

/// Label prefix for participants without a name
pub const DEFAULT_PLACEHOLDER_PREFIX: &str = "Participant";

/// Netting engine
#[derive(Debug, Clone)]
pub struct NettingEngine {
    /// Prefix for positional labels ("Participant 3")
    placeholder_prefix: String,
}

impl Default for NettingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_PLACEHOLDER_PREFIX)
    }
}

impl NettingEngine {
    /// Create new netting engine
    pub fn new(placeholder_prefix: impl Into<String>) -> Self {
        Self {
            placeholder_prefix: placeholder_prefix.into(),
        }
    }

    /// Compute the transfers that settle all participants
    pub fn settle(&self, participants: &[Participant]) -> Vec<Transaction> {
        // Step 1: Derive balances
        let balances = self.derive_balances(participants);

        // Step 2: Partition into debtors and creditors
        let (debtors, creditors) = partition(balances);

        // Step 3: Greedy matching
        match_greedy(debtors, creditors)
    }

    /// Derive rounded net balances in input order
    pub fn derive_balances(&self, participants: &[Participant]) -> Vec<Balance> {
        participants
            .iter()
            .enumerate()
            .map(|(index, p)| Balance {
                index,
                label: self.label_for(index, &p.name),
                net: money::round2(p.raw_net()),
            })
            .collect()
    }

    /// Name to use in transfers; blank names get a positional placeholder
    fn label_for(&self, index: usize, name: &str) -> String {
        if name.trim().is_empty() {
            format!("{} {}", self.placeholder_prefix, index + 1)
        } else {
            name.to_string()
        }
    }
}

/// Split balances into debtors (ascending) and creditors (descending).
///
/// Zero balances are dropped. Sorting is stable, so equal balances keep their
/// input order.
pub fn partition(balances: Vec<Balance>) -> (Vec<Balance>, Vec<Balance>) {
    let (mut debtors, rest): (Vec<Balance>, Vec<Balance>) =
        balances.into_iter().partition(Balance::is_debtor);
    let mut creditors: Vec<Balance> = rest.into_iter().filter(Balance::is_creditor).collect();

    debtors.sort_by(|a, b| a.net.cmp(&b.net));
    creditors.sort_by(|a, b| b.net.cmp(&a.net));

    (debtors, creditors)
}

/// Pair debtors with creditors using two cursors.
///
/// Both lists are consumed as working copies; their nets move toward zero as
/// transfers are emitted. Stops as soon as either side runs out, so with an
/// unbalanced input the surplus stays on the larger side.
pub fn match_greedy(mut debtors: Vec<Balance>, mut creditors: Vec<Balance>) -> Vec<Transaction> {
    let mut transfers = Vec::new();
    let mut i = 0;
    let mut j = 0;

    while i < debtors.len() && j < creditors.len() {
        let debtor = &mut debtors[i];
        let creditor = &mut creditors[j];

        let amount = money::round2((-debtor.net).min(creditor.net));

        if amount > Decimal::ZERO {
            tracing::debug!(
                from = %debtor.label,
                to = %creditor.label,
                %amount,
                "Matched transfer"
            );

            transfers.push(Transaction {
                from: debtor.label.clone(),
                to: creditor.label.clone(),
                amount,
            });

            debtor.net += amount;
            creditor.net -= amount;
        }

        // Exact arithmetic: a side is done once it reaches zero
        let debtor_done = debtor.is_settled();
        let creditor_done = creditor.is_settled();

        if debtor_done {
            i += 1;
        }
        if creditor_done {
            j += 1;
        }
    }

    transfers
}
