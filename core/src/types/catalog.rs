use super::item::{Item, ItemId};
use crate::error::ValidationError;
use std::collections::HashSet;
use std::sync::Arc;

/// Validated, ordered candidate collection.
///
/// Item ids are unique. Cloning is cheap; the items are shared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, ValidationError> {
        let mut seen: HashSet<&ItemId> = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(ValidationError::DuplicateItemId(item.id.to_string()));
            }
        }

        Ok(Self {
            items: items.into(),
        })
    }

    /// Parses a JSON array of `{ "id": .., "name": .. }` objects.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let items: Vec<Item> = serde_json::from_str(json)?;
        Self::new(items)
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
