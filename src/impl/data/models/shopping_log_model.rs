use std::str::FromStr;

use fractic_server_error::ServerError;
use serde::Deserializer;
use serde_derive::{Deserialize, Serialize};

use crate::{
    entities::{ShoppingItem, ShoppingLog},
    errors::{CorruptStoredLog, WriteError},
};

/// Persisted item: a JSON array of exactly 5 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ShoppingItemModel(String, String, String, String, String);

/// Canonical persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ShoppingLogModel {
    pub date: String,
    #[serde(deserialize_with = "deserialize_goal")]
    pub goal: f64,
    pub items: Vec<ShoppingItemModel>,
}

impl ShoppingLogModel {
    pub(crate) fn to_json(&self) -> Result<String, ServerError> {
        serde_json::to_string(self).map_err(|e| WriteError::with_debug(&e))
    }
}

impl FromStr for ShoppingLogModel {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map_err(|e| CorruptStoredLog::with_debug(&e))
    }
}

/// Older records may carry the goal as the raw form string.
fn deserialize_goal<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawGoal {
        Number(f64),
        Text(String),
    }

    match <RawGoal as serde::Deserialize>::deserialize(deserializer)? {
        RawGoal::Number(n) => Ok(n),
        RawGoal::Text(s) => coerce_goal(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("goal '{s}' is not a number"))),
    }
}

/// Numeric value of a goal given as text. Blank text counts as 0; non-finite
/// values are rejected.
pub(crate) fn coerce_goal(s: &str) -> Option<f64> {
    match s.trim() {
        "" => Some(0.0),
        t => t.parse::<f64>().ok().filter(|n| n.is_finite()),
    }
}

impl From<ShoppingItem> for ShoppingItemModel {
    fn from(item: ShoppingItem) -> Self {
        ShoppingItemModel(item.name, item.quantity, item.price, item.category, item.notes)
    }
}

impl Into<ShoppingItem> for ShoppingItemModel {
    fn into(self) -> ShoppingItem {
        let ShoppingItemModel(name, quantity, price, category, notes) = self;
        ShoppingItem {
            name,
            quantity,
            price,
            category,
            notes,
        }
    }
}

impl From<ShoppingLog> for ShoppingLogModel {
    fn from(log: ShoppingLog) -> Self {
        let (date, goal, items) = log.into_parts();
        ShoppingLogModel {
            date,
            goal,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}

impl Into<ShoppingLog> for ShoppingLogModel {
    fn into(self) -> ShoppingLog {
        ShoppingLog::from_parts(
            self.date,
            self.goal,
            self.items.into_iter().map(Into::into).collect(),
        )
    }
}
