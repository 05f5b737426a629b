//! Human-readable transfer instructions

use crate::{
    config::ReportConfig,
    types::{SettlementReport, SettlementSummary, Transaction},
};
use rust_decimal::Decimal;

/// Format an amount with exactly 2 decimals and the currency symbol
pub fn format_amount(amount: Decimal, currency_symbol: &str) -> String {
    format!("{:.2} {}", amount, currency_symbol)
}

/// Render one transfer, e.g. `Anna → Ben — 30.00 €`
pub fn render_transaction(tx: &Transaction, config: &ReportConfig) -> String {
    format!(
        "{} {} {} — {}",
        tx.from,
        config.arrow,
        tx.to,
        format_amount(tx.amount, &config.currency_symbol)
    )
}

/// Render the summary block
pub fn render_summary(summary: &SettlementSummary, config: &ReportConfig) -> Vec<String> {
    let symbol = &config.currency_symbol;
    vec![
        format!("Participants: {}", summary.participant_count),
        format!("Total deposited: {}", format_amount(summary.total_deposited, symbol)),
        format!("Total current: {}", format_amount(summary.total_current, symbol)),
        format!("Imbalance: {}", format_amount(summary.imbalance, symbol)),
    ]
}

/// Render transfers followed by the summary, one line each
pub fn render_report(report: &SettlementReport, config: &ReportConfig) -> Vec<String> {
    let mut lines: Vec<String> = if report.transactions.is_empty() {
        vec!["No transfers needed".to_string()]
    } else {
        report
            .transactions
            .iter()
            .map(|tx| render_transaction(tx, config))
            .collect()
    };

    lines.extend(render_summary(&report.summary, config));
    lines
}
