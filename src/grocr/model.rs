use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Purchase status of a grocery item.
///
/// Serialized as the lowercase strings `pending` / `purchased`, the values
/// the list blob has always carried on disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Purchased,
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemStatus::Pending => write!(f, "pending"),
            ItemStatus::Purchased => write!(f, "purchased"),
        }
    }
}

impl FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ItemStatus::Pending),
            "purchased" => Ok(ItemStatus::Purchased),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

/// One record in the grocery list.
///
/// The persisted blob is a JSON array of exactly these five fields; there is
/// no schema version, so any shape drift is treated as absent data on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroceryItem {
    pub id: u64,
    pub name: String,
    pub amount: f64,
    pub note: String,
    pub status: ItemStatus,
}

impl GroceryItem {
    /// A blank item: the state the entry form resets to after every submit.
    pub fn blank() -> Self {
        Self {
            id: 0,
            name: String::new(),
            amount: 0.0,
            note: String::new(),
            status: ItemStatus::Pending,
        }
    }
}

/// A settable field of the draft item. The draft's `id` is never set
/// directly; it comes from the item being edited or from the allocator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Name,
    Amount,
    Note,
    Status,
}

/// What a submit will do: append a new item, or replace the one being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    NewEntry,
    Editing(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_roundtrips_through_its_wire_strings() {
        assert_eq!("pending".parse::<ItemStatus>().unwrap(), ItemStatus::Pending);
        assert_eq!(
            "purchased".parse::<ItemStatus>().unwrap(),
            ItemStatus::Purchased
        );
        assert_eq!(ItemStatus::Purchased.to_string(), "purchased");
        assert!("bought".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn item_serializes_with_exactly_five_fields() {
        let item = GroceryItem {
            id: 7,
            name: "Oranges".into(),
            amount: 5.0,
            note: String::new(),
            status: ItemStatus::Pending,
        };
        let json = serde_json::to_value(&item).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 5);
        assert_eq!(obj["status"], "pending");
    }

    #[test]
    fn unknown_fields_are_rejected_on_parse() {
        let raw = r#"{"id":1,"name":"Milk","amount":1,"note":"","status":"pending","extra":true}"#;
        assert!(serde_json::from_str::<GroceryItem>(raw).is_err());
    }
}
