pub(crate) mod catalog;
pub use catalog::Catalog;

pub(crate) mod item;
pub use item::{Item, ItemId, ItemName, TextId};
