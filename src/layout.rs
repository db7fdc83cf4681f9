use crate::{Coord, Matrix};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Namespace prefixed to every layout key in the backing store, so a host can
/// share one store between layouts and unrelated records.
pub const LAYOUT_NAMESPACE: &str = "saved-layouts";

/// The string-keyed store the persistence codec writes into.
///
/// The codec depends only on get/set of opaque bytes; hosts supply whatever
/// backend they like. `MemoryStore` is the in-process realization.
pub trait LayoutStore {
    fn get(&self, key: &str) -> Option<&[u8]>;
    fn set(&mut self, key: &str, value: Vec<u8>);
}

/// A `LayoutStore` backed by a plain map. Useful for tests and for hosts that
/// handle durability themselves.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryStore {
    #[inline]
    fn get(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    #[inline]
    fn set(&mut self, key: &str, value: Vec<u8>) {
        self.entries.insert(key.to_string(), value);
    }
}

/// Why a layout could not be saved. Both cases are recoverable: the caller picks
/// another name or reports the failure, and the store is left untouched.
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("a layout named `{0}` is already saved")]
    NameTaken(String),
    #[error("failed to encode layout: {0}")]
    Codec(#[from] bincode::Error),
}

#[derive(Serialize, Deserialize)]
struct LayoutRecord {
    width: usize,
    height: usize,
    active: Vec<Coord>,
}

#[inline]
fn layout_key(name: &str) -> String {
    format!("{}/{}", LAYOUT_NAMESPACE, name)
}

/// Save a matrix's layout under `name`.
///
/// Names are never overwritten implicitly; saving under an existing name fails
/// with `SaveError::NameTaken` and leaves the stored record unchanged.
pub fn save<M, S>(matrix: &M, name: &str, store: &mut S) -> Result<(), SaveError>
where
    M: Matrix,
    S: LayoutStore,
{
    let key = layout_key(name);
    if store.get(&key).is_some() {
        return Err(SaveError::NameTaken(name.to_string()));
    }
    let record = LayoutRecord {
        width: matrix.width(),
        height: matrix.height(),
        active: matrix.active_cells().iter().copied().collect(),
    };
    let bytes = bincode::serialize(&record)?;
    store.set(&key, bytes);
    debug!(
        "saved layout `{}`: {}x{}, {} active cells",
        name,
        record.width,
        record.height,
        record.active.len()
    );
    Ok(())
}

/// Load the layout saved under `name`, rebuilding any `Matrix` type from it.
///
/// Returns `None` when no entry exists under `name`, when the record does not
/// decode, or when a stored coordinate falls outside the stored dimensions. A
/// malformed record is indistinguishable from a missing one here; callers that
/// need diagnostics inspect the raw store themselves.
pub fn load<M, S>(name: &str, store: &S) -> Option<M>
where
    M: Matrix,
    S: LayoutStore,
{
    let bytes = store.get(&layout_key(name))?;
    let record: LayoutRecord = bincode::deserialize(bytes).ok()?;
    if record.width == 0 || record.height == 0 {
        return None;
    }
    if record
        .active
        .iter()
        .any(|cell| cell.x >= record.width || cell.y >= record.height)
    {
        return None;
    }
    debug!(
        "loaded layout `{}`: {}x{}, {} active cells",
        name,
        record.width,
        record.height,
        record.active.len()
    );
    Some(M::new_coords(record.width, record.height, record.active))
}
