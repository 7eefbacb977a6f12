//! JSON loaders for the catalog and order-history providers.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::{fs, path::Path};
use taste_tailor_catalog::{Catalog, MenuItem};
use taste_tailor_recommend::{OrderHistory, PastOrderRecord};

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let items: Vec<MenuItem> = read_json(path)?;
    let catalog = Catalog::try_from(items)
        .with_context(|| format!("invalid catalog in {}", path.display()))?;

    tracing::debug!(path = %path.display(), items = catalog.len(), "catalog loaded");

    Ok(catalog)
}

pub fn load_orders(path: impl AsRef<Path>) -> Result<OrderHistory> {
    let path = path.as_ref();
    let orders: Vec<PastOrderRecord> = read_json(path)?;
    let history = OrderHistory::new(orders)
        .with_context(|| format!("invalid order history in {}", path.display()))?;

    tracing::debug!(path = %path.display(), orders = history.len(), "order history loaded");

    Ok(history)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
