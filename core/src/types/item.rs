use crate::error::ValidationError;
use nutype::nutype;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual item identifier. Surrounding whitespace is not significant.
#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct TextId(String);

/// Display text of an item. Kept verbatim, since highlight spans must reproduce it exactly.
#[nutype(
    validate(not_empty),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        AsRef,
        Deref,
        Hash,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct ItemName(String);

/// Stable identifier of an item within its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    Number(i64),
    Text(TextId),
}

impl ItemId {
    pub fn text(id: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = id.into();
        TextId::try_new(raw.clone())
            .map(ItemId::Text)
            .map_err(|_| ValidationError::InvalidItemId(raw))
    }
}

impl From<i64> for ItemId {
    fn from(id: i64) -> Self {
        ItemId::Number(id)
    }
}

impl From<i32> for ItemId {
    fn from(id: i32) -> Self {
        ItemId::Number(id.into())
    }
}

impl From<TextId> for ItemId {
    fn from(id: TextId) -> Self {
        ItemId::Text(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A selectable candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: ItemName,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        let name = ItemName::try_new(name.into()).map_err(|e| ValidationError::InvalidItemName {
            id: id.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { id, name })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}

#[cfg(test)]
mod tests;
