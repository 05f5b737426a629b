//! Main settlement engine
//!
//! Wraps the netting algorithm with configuration, group totals and logging.

use crate::{
    config::Config,
    money,
    netting::NettingEngine,
    report,
    types::*,
};

/// Settlement engine
#[derive(Debug, Clone)]
pub struct SettlementEngine {
    /// Netting engine
    netting: NettingEngine,

    /// Configuration
    config: Config,
}

impl Default for SettlementEngine {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl SettlementEngine {
    /// Create new settlement engine
    pub fn new(config: Config) -> Self {
        let netting = NettingEngine::new(config.labels.placeholder_prefix.clone());
        Self { netting, config }
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Compute the transfers that settle all participants
    pub fn settle(&self, participants: &[Participant]) -> Vec<Transaction> {
        self.netting.settle(participants)
    }

    /// Settle and summarize in one pass
    pub fn run(&self, participants: &[Participant]) -> SettlementReport {
        let span = tracing::info_span!("settle", participants = participants.len());
        let _guard = span.enter();

        let transactions = self.settle(participants);
        let summary = summarize(participants, &transactions);

        tracing::info!(
            "Settlement complete: {} participants → {} transfers ({} moved)",
            summary.participant_count,
            transactions.len(),
            summary.transferred
        );

        if !summary.is_balanced() {
            tracing::warn!(
                imbalance = %summary.imbalance,
                "Net positions do not sum to zero; residual left unsettled"
            );
        }

        SettlementReport {
            transactions,
            summary,
        }
    }

    /// Render a report using the configured currency symbol and arrow
    pub fn render(&self, report: &SettlementReport) -> Vec<String> {
        report::render_report(report, &self.config.report)
    }
}

/// Compute group totals for a settled set of participants.
///
/// Totals clamp to the `Decimal` range rather than overflow.
pub fn summarize(participants: &[Participant], transactions: &[Transaction]) -> SettlementSummary {
    let total_deposited = money::saturating_sum(participants.iter().map(|p| p.deposited));
    let total_current = money::saturating_sum(participants.iter().map(|p| p.current));
    let imbalance = money::saturating_sum(participants.iter().map(|p| money::round2(p.raw_net())));
    let transferred = money::saturating_sum(transactions.iter().map(|t| t.amount));

    SettlementSummary {
        participant_count: participants.len(),
        total_deposited: money::round2(total_deposited),
        total_current: money::round2(total_current),
        imbalance: money::round2(imbalance),
        transferred: money::round2(transferred),
    }
}
