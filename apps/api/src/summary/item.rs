use serde::{Deserialize, Serialize};

/// Value shown next to a summary row's label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum SummaryValue {
    Text(String),
    Number(f64),
}

impl From<String> for SummaryValue {
    fn from(s: String) -> Self {
        SummaryValue::Text(s)
    }
}

impl From<&str> for SummaryValue {
    fn from(s: &str) -> Self {
        SummaryValue::Text(s.to_string())
    }
}

impl From<f64> for SummaryValue {
    fn from(n: f64) -> Self {
        SummaryValue::Number(n)
    }
}

/// One renderable unit of the aggregated summary.
///
/// `id` is the UI's render key. Uniqueness within a pass is up to the builder
/// that produced the item; the aggregator does not deduplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryItem {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<SummaryValue>,
    #[serde(default)]
    pub pill: bool,
}

impl SummaryItem {
    pub fn row(
        id: impl Into<String>,
        label: impl Into<String>,
        value: impl Into<SummaryValue>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: Some(value.into()),
            pill: false,
        }
    }

    pub fn pill(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: None,
            pill: true,
        }
    }
}
