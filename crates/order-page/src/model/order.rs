//! One entry in the cart.
//!
//! A line is identified per insertion, not per product: two lines for the same
//! [`MenuItem`](crate::model::MenuItem) have different [`LineId`]s and are removed independently.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Opaque, per-insertion identifier for order lines.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineId(String);

impl LineId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LineId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for LineId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: LineId,
    pub name: String,
    pub price: f64,
}

/// Read-only copy of the cart handed out to clients.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct OrderSnapshot {
    pub lines: Vec<OrderLine>,
    pub total: f64,
}

impl OrderSnapshot {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.name.as_str()).collect()
    }
}
