//! Item records and collection invariants

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

use crate::error::StoreError;

/// One shopping-list entry
///
/// `date` is set exactly when `purchased` is true. `value` is `0.0` until the
/// item is purchased.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Item {
    /// Item name, not unique across purchase cycles
    pub name: String,

    /// Whether the item has been bought
    pub purchased: bool,

    /// Amount paid
    pub value: f64,

    /// Local purchase time
    #[serde(deserialize_with = "required_date")]
    pub date: Option<NaiveDateTime>,
}

// Plain `Option` fields default to `None` when absent; the key must be present.
fn required_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDateTime>::deserialize(deserializer)
}

impl Item {
    /// Create an unpurchased item
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            purchased: false,
            value: 0.0,
            date: None,
        }
    }

    /// Create an item already purchased at `at`
    pub fn purchased(name: impl Into<String>, value: f64, at: NaiveDateTime) -> Self {
        let mut item = Self::new(name);
        item.purchase(value, at);
        item
    }

    /// Mark this item purchased
    pub fn purchase(&mut self, value: f64, at: NaiveDateTime) {
        self.purchased = true;
        self.value = value;
        self.date = Some(at);
    }

    /// True if this is the pending (unpurchased) entry for `name`
    pub fn is_pending(&self, name: &str) -> bool {
        !self.purchased && self.name == name
    }

    /// Check the per-item invariants
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.is_empty() {
            return Err(StoreError::InvalidRecord("empty item name".to_string()));
        }
        if self.purchased != self.date.is_some() {
            return Err(StoreError::InvalidRecord(format!(
                "item {:?}: purchased={} but date is {}",
                self.name,
                self.purchased,
                if self.date.is_some() { "set" } else { "missing" }
            )));
        }
        if !self.value.is_finite() {
            return Err(StoreError::InvalidRecord(format!(
                "item {:?}: value {} is not finite",
                self.name, self.value
            )));
        }
        Ok(())
    }
}

/// Check every item plus the one-unpurchased-entry-per-name rule
pub fn validate_collection(items: &[Item]) -> Result<(), StoreError> {
    let mut pending = HashSet::new();
    for item in items {
        item.validate()?;
        if !item.purchased && !pending.insert(item.name.as_str()) {
            return Err(StoreError::InvalidRecord(format!(
                "more than one unpurchased item named {:?}",
                item.name
            )));
        }
    }
    Ok(())
}
