//! The shopping-list service
//!
//! `ShoppingListService` is the only writer of the collection. Mutations hold
//! the write lock across check, apply and persist, so two callers can never
//! both pass the "no pending item with this name" check. Reads take the read
//! lock and see the collection as it was between two mutations.
//!
//! If a save fails the change stays applied in memory and the error is
//! returned. Memory and storage then disagree until the next successful save.

use chrono::{Datelike, Local, NaiveDateTime};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{Result, ServiceError};
use crate::model::Item;
use crate::store::Store;

/// Shared shopping list backed by a [`Store`]
#[derive(Debug)]
pub struct ShoppingListService {
    items: RwLock<Vec<Item>>,
    store: Arc<dyn Store>,
}

impl ShoppingListService {
    /// Load the collection from `store`. Fails if the stored data is corrupt.
    pub fn open(store: Arc<dyn Store>) -> Result<Self> {
        let items = store.load()?;
        tracing::info!("Shopping list opened with {} items", items.len());
        Ok(Self {
            items: RwLock::new(items),
            store,
        })
    }

    /// Add a pending item. Returns `false` if one with this name is already
    /// waiting to be bought.
    pub fn add(&self, name: &str) -> Result<bool> {
        if name.is_empty() {
            return Err(ServiceError::InvalidName);
        }

        let mut items = self.items.write();
        if items.iter().any(|i| i.is_pending(name)) {
            tracing::debug!("add {:?}: already pending", name);
            return Ok(false);
        }

        items.push(Item::new(name));
        self.persist(&items, "add")?;
        Ok(true)
    }

    /// Snapshot of the collection in insertion order
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Number of items, purchased or not
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// True if the collection holds no items
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Mark the pending item `name` as bought for `value`, dated now.
    /// The first pending match in insertion order wins.
    pub fn mark(&self, name: &str, value: f64) -> Result<bool> {
        self.mark_at(name, value, now())
    }

    /// [`mark`](Self::mark) with an explicit purchase time
    pub fn mark_at(&self, name: &str, value: f64, at: NaiveDateTime) -> Result<bool> {
        check_value(value)?;

        let mut items = self.items.write();
        let Some(item) = items.iter_mut().find(|i| i.is_pending(name)) else {
            tracing::debug!("mark {:?}: nothing pending", name);
            return Ok(false);
        };

        item.purchase(value, at);
        self.persist(&items, "mark")?;
        Ok(true)
    }

    /// Mark every pending item as bought for the same `value`. All items in
    /// the batch share one timestamp taken when the call starts.
    pub fn mark_all(&self, value: f64) -> Result<bool> {
        self.mark_all_at(value, now())
    }

    /// [`mark_all`](Self::mark_all) with an explicit purchase time
    pub fn mark_all_at(&self, value: f64, at: NaiveDateTime) -> Result<bool> {
        check_value(value)?;

        let mut items = self.items.write();
        let mut marked = 0;
        for item in items.iter_mut().filter(|i| !i.purchased) {
            item.purchase(value, at);
            marked += 1;
        }

        if marked == 0 {
            return Ok(false);
        }
        tracing::debug!("mark_all: {} items", marked);
        self.persist(&items, "mark_all")?;
        Ok(true)
    }

    /// Delete every item called `name`, including purchased history.
    pub fn remove(&self, name: &str) -> Result<bool> {
        let mut items = self.items.write();
        let before = items.len();
        items.retain(|i| i.name != name);

        if items.len() == before {
            return Ok(false);
        }
        tracing::debug!("remove {:?}: {} items", name, before - items.len());
        self.persist(&items, "remove")?;
        Ok(true)
    }

    /// Sum of purchase values dated in `year`/`month`. Months outside 1..=12
    /// match nothing.
    pub fn monthly_total(&self, year: i32, month: u32) -> f64 {
        self.items
            .read()
            .iter()
            .filter(|i| i.purchased)
            .filter_map(|i| i.date.map(|d| (d, i.value)))
            .filter(|(d, _)| d.year() == year && d.month() == month)
            .fold(0.0, |total, (_, value)| total + value)
    }

    fn persist(&self, items: &[Item], op: &str) -> Result<()> {
        self.store.save(items).map_err(|e| {
            tracing::error!(
                "{} applied in memory but not persisted, storage is now stale: {}",
                op,
                e
            );
            ServiceError::from(e)
        })
    }
}

fn check_value(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ServiceError::InvalidValue(value))
    }
}

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}
