use std::str::FromStr;

use alloy_primitives::U256;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Interaction;
use crate::utils::parse_wei;

/// Conjunction of optional predicates; an empty filter matches everything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionFilter {
    /// Registry id, matched case-insensitively
    #[serde(default)]
    pub network: Option<String>,
    /// Case-insensitive substring of the sender address
    #[serde(default)]
    pub from_contains: Option<String>,
    /// Case-insensitive substring of the receiver address
    #[serde(default)]
    pub to_contains: Option<String>,
    /// Inclusive lower bound on the interaction time
    #[serde(default)]
    pub after: Option<DateTime<Utc>>,
    /// Inclusive upper bound on the interaction time
    #[serde(default)]
    pub before: Option<DateTime<Utc>>,
    #[serde(default = "default_include_tokens")]
    pub include_token_transfers: bool,
}

fn default_include_tokens() -> bool {
    true
}

impl Default for InteractionFilter {
    fn default() -> Self {
        Self {
            network: None,
            from_contains: None,
            to_contains: None,
            after: None,
            before: None,
            include_token_transfers: true,
        }
    }
}

impl InteractionFilter {
    pub fn matches(
        &self,
        interaction: &Interaction,
    ) -> bool {
        if let Some(network) = &self.network {
            if !interaction.network.eq_ignore_ascii_case(network.trim()) {
                return false;
            }
        }
        if let Some(needle) = &self.from_contains {
            if !contains_ignore_case(&interaction.from, needle) {
                return false;
            }
        }
        if let Some(needle) = &self.to_contains {
            if !contains_ignore_case(&interaction.to, needle) {
                return false;
            }
        }
        if let Some(after) = self.after {
            if interaction.timestamp < after.timestamp() {
                return false;
            }
        }
        if let Some(before) = self.before {
            if interaction.timestamp > before.timestamp() {
                return false;
            }
        }
        if !self.include_token_transfers && interaction.is_token_transfer {
            return false;
        }
        true
    }
}

fn contains_ignore_case(
    haystack: &str,
    needle: &str,
) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Network,
    Sender,
    Receiver,
    Date,
    Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort order in "field:direction" textual form, e.g. "value:desc".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl FromStr for SortSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, direction) = match s.split_once(':') {
            Some((field, direction)) => (field, direction),
            None => (s, "asc"),
        };

        let field = match field.trim().to_lowercase().as_str() {
            "network" => SortField::Network,
            "sender" | "from" => SortField::Sender,
            "receiver" | "to" => SortField::Receiver,
            "date" | "time" => SortField::Date,
            "value" | "amount" => SortField::Value,
            other => return Err(format!("unknown sort field: {other}")),
        };

        let direction = match direction.trim().to_lowercase().as_str() {
            "asc" | "ascending" => SortDirection::Asc,
            "desc" | "descending" => SortDirection::Desc,
            other => return Err(format!("unknown sort direction: {other}")),
        };

        Ok(Self { field, direction })
    }
}

/// Apply the filter conjunction, then sort by the spec. The underlying
/// sort is stable, so equal keys keep their relative input order and the
/// whole operation is idempotent.
pub fn filter_and_sort(
    interactions: &[Interaction],
    filter: &InteractionFilter,
    sort: SortSpec,
) -> Vec<Interaction> {
    let mut selected: Vec<Interaction> =
        interactions.iter().filter(|interaction| filter.matches(interaction)).cloned().collect();
    sort_interactions(&mut selected, sort);
    selected
}

pub fn sort_interactions(
    interactions: &mut [Interaction],
    sort: SortSpec,
) {
    interactions.sort_by(|a, b| {
        let ordering = match sort.field {
            SortField::Network => a.network.cmp(&b.network),
            SortField::Sender => a.from.to_lowercase().cmp(&b.from.to_lowercase()),
            SortField::Receiver => a.to.to_lowercase().cmp(&b.to.to_lowercase()),
            SortField::Date => a.timestamp.cmp(&b.timestamp),
            SortField::Value => sort_value(a).cmp(&sort_value(b)),
        };
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Values compare as big integers; anything unparseable compares as zero.
fn sort_value(interaction: &Interaction) -> U256 {
    parse_wei(&interaction.value).unwrap_or(U256::ZERO)
}
