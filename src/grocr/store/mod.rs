//! # Storage Layer
//!
//! The [`Slot`] trait is the persistence boundary of grocr: an opaque
//! key-value API over string blobs, modeled on the browser-local storage the
//! list originally lived in (`load`/`save`/`clear` on a fixed key).
//!
//! Persistence is abstracted behind a trait to:
//! - Enable **testing** with [`memory::InMemorySlot`] (no filesystem needed)
//! - Allow **future backends** without touching the list logic
//! - Keep the mutation rules **decoupled** from where the blob lives
//!
//! ## Implementations
//!
//! - [`fs::FileSlot`]: production file-based storage; each key maps to a
//!   `<key>.json` file under a root directory.
//! - [`memory::InMemorySlot`]: HashMap-backed, no persistence, for tests.
//!
//! The slot stores opaque text. Serialization of the grocery list itself is
//! the caller's concern ([`crate::list::GroceryListStore`]); a slot never
//! inspects the blobs it holds.

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for a persisted key-value slot.
pub trait Slot {
    /// Read the blob stored under `key`. `Ok(None)` when the key is absent.
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous blob.
    fn save(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove the blob under `key`. Absent keys are not an error.
    fn clear(&mut self, key: &str) -> Result<()>;
}
