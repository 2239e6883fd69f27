use super::Slot;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory slot for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemorySlot {
    blobs: HashMap<String, String>,
}

impl InMemorySlot {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Slot for InMemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&mut self, key: &str) -> Result<()> {
        self.blobs.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{GroceryItem, ItemStatus};

    pub struct SlotFixture {
        pub slot: InMemorySlot,
    }

    impl Default for SlotFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SlotFixture {
        pub fn new() -> Self {
            Self {
                slot: InMemorySlot::new(),
            }
        }

        /// Seed the slot under `key` with `count` pending items, ids 1..=count.
        pub fn with_items(mut self, key: &str, count: usize) -> Self {
            let items: Vec<GroceryItem> = (1..=count as u64)
                .map(|i| GroceryItem {
                    id: i,
                    name: format!("Item {}", i),
                    amount: i as f64,
                    note: String::new(),
                    status: ItemStatus::Pending,
                })
                .collect();
            let blob = serde_json::to_string(&items).unwrap();
            self.slot.save(key, &blob).unwrap();
            self
        }

        /// Seed the slot under `key` with a blob that is not a valid item list.
        pub fn with_garbage(mut self, key: &str, blob: &str) -> Self {
            self.slot.save(key, blob).unwrap();
            self
        }
    }
}
