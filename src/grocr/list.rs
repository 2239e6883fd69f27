//! The grocery list component: mutation rules, draft/edit lifecycle, and the
//! persistence contract. Everything here is UI-agnostic; clients drive the
//! draft and call [`GroceryListStore::submit`] the way a form would.

use crate::error::{GrocrError, Result};
use crate::model::{DraftField, FormMode, GroceryItem};
use crate::store::Slot;

/// The fixed key the serialized list lives under in the slot.
pub const LIST_KEY: &str = "grocery-list";

/// Owns the in-memory grocery list, the draft item being composed or edited,
/// and the form mode; mirrors every mutation to the injected [`Slot`].
///
/// Generic over the slot backend: `FileSlot` in production, `InMemorySlot`
/// in tests. The slot is the source of truth across sessions; this store is
/// the only writer.
pub struct GroceryListStore<S: Slot> {
    slot: S,
    items: Vec<GroceryItem>,
    draft: GroceryItem,
    mode: FormMode,
    next_id: u64,
}

impl<S: Slot> GroceryListStore<S> {
    /// Build a store from the slot's current contents.
    ///
    /// Absent or malformed persisted data (unparseable text, wrong shape,
    /// unknown status strings) falls back to the empty list; loading never
    /// fails outward and never writes back.
    pub fn load(slot: S) -> Self {
        let items: Vec<GroceryItem> = slot
            .load(LIST_KEY)
            .ok()
            .flatten()
            .and_then(|blob| serde_json::from_str(&blob).ok())
            .unwrap_or_default();

        // Seed the allocator past every persisted id.
        let next_id = items.iter().map(|i| i.id).max().map_or(1, |m| m + 1);

        Self {
            slot,
            items,
            draft: GroceryItem::blank(),
            mode: FormMode::NewEntry,
            next_id,
        }
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn draft(&self) -> &GroceryItem {
        &self.draft
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Set one draft field from raw input text.
    ///
    /// Only type coercion happens here: a non-numeric amount coerces to 0,
    /// an unknown status string leaves the field unchanged. Validation
    /// proper (the required name) is submit's job.
    pub fn update_draft_field(&mut self, field: DraftField, raw: &str) {
        match field {
            DraftField::Name => self.draft.name = raw.to_string(),
            DraftField::Amount => self.draft.amount = raw.trim().parse().unwrap_or(0.0),
            DraftField::Note => self.draft.note = raw.to_string(),
            DraftField::Status => {
                if let Ok(status) = raw.parse() {
                    self.draft.status = status;
                }
            }
        }
    }

    /// Enter edit mode for `id`: the item's fields (id included) are copied
    /// into the draft. No-op when no item has that id.
    pub fn start_edit(&mut self, id: u64) -> bool {
        match self.get(id) {
            Some(item) => {
                self.draft = item.clone();
                self.mode = FormMode::Editing(id);
                true
            }
            None => false,
        }
    }

    /// Commit the draft: replace the edited item in place, or append a new
    /// one with a freshly allocated id. On success the full list is written
    /// to the slot and the draft resets to blank.
    ///
    /// An empty name is a validation failure that blocks the add/update and
    /// leaves the draft (and mode) untouched. If the item under edit was
    /// deleted before submit, nothing is updated: the draft is discarded and
    /// edit mode cleared, so the next submit starts fresh.
    pub fn submit(&mut self) -> Result<()> {
        if self.draft.name.is_empty() {
            return Err(GrocrError::Api("Name cannot be empty".into()));
        }

        match self.mode {
            FormMode::Editing(id) => {
                self.mode = FormMode::NewEntry;
                if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
                    item.name = self.draft.name.clone();
                    item.amount = self.draft.amount;
                    item.note = self.draft.note.clone();
                    item.status = self.draft.status;
                    self.persist()?;
                }
                // Stale target: the edited item is gone. No write.
            }
            FormMode::NewEntry => {
                let mut item = self.draft.clone();
                item.id = self.alloc_id();
                self.items.push(item);
                self.persist()?;
            }
        }

        self.draft = GroceryItem::blank();
        Ok(())
    }

    /// Remove the item with `id` and persist the remaining list. Returns
    /// whether anything was removed; an absent id is a no-op, not an error.
    ///
    /// Deleting the item currently under edit does not cancel edit mode;
    /// the follow-up submit hits the stale-target rule and recovers.
    pub fn delete(&mut self, id: u64) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Drop the persisted slot key and empty the in-memory list.
    pub fn clear(&mut self) -> Result<()> {
        self.slot.clear(LIST_KEY)?;
        self.items.clear();
        self.draft = GroceryItem::blank();
        self.mode = FormMode::NewEntry;
        Ok(())
    }

    fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn persist(&mut self) -> Result<()> {
        let blob = serde_json::to_string(&self.items)?;
        self.slot.save(LIST_KEY, &blob)
    }
}
