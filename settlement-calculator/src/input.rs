//! Lenient participant input
//!
//! Data-entry front ends hand over whatever the user typed. Amounts may arrive
//! as JSON numbers, numeric strings, garbage, or not at all; all of those are
//! accepted and anything unparsable becomes zero.

use crate::{money, types::Participant, Error, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Raw participant record as supplied by a form or file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInput {
    /// Display name (missing or null → empty)
    #[serde(default, deserialize_with = "lenient_name")]
    pub name: String,

    /// Deposited amount (unparsable → 0)
    #[serde(default, deserialize_with = "lenient_amount")]
    pub deposited: Decimal,

    /// Final amount (unparsable → 0)
    #[serde(default, deserialize_with = "lenient_amount")]
    pub current: Decimal,
}

impl ParticipantInput {
    /// Build from raw text fields as typed into a form
    pub fn from_text(name: &str, deposited: &str, current: &str) -> Self {
        Self {
            name: name.to_string(),
            deposited: money::parse_amount(deposited),
            current: money::parse_amount(current),
        }
    }
}

impl From<ParticipantInput> for Participant {
    fn from(input: ParticipantInput) -> Self {
        Participant::new(input.name, input.deposited, input.current)
    }
}

/// Parse a JSON array of participant records.
///
/// Individual fields never fail; only a document that is not an array of
/// objects is rejected.
pub fn parse_participants_json(document: &str) -> Result<Vec<Participant>> {
    let inputs: Vec<ParticipantInput> = serde_json::from_str(document)
        .map_err(|e| Error::Input(format!("Expected an array of participants: {}", e)))?;

    Ok(inputs.into_iter().map(Participant::from).collect())
}

fn lenient_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_amount<'de, D>(deserializer: D) -> std::result::Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(amount_from_value(&value))
}

fn amount_from_value(value: &Value) -> Decimal {
    match value {
        Value::Number(n) => money::parse_amount(&n.to_string()),
        Value::String(s) => money::parse_amount(s),
        _ => Decimal::ZERO,
    }
}
