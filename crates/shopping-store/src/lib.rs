//! Shopping List State Store
//!
//! In-memory model of shopping lists and the operations that mutate them.
//! Browser-free so it can be tested on the host.

mod book;
mod error;
mod input;
mod intent;
mod model;

pub use book::ShoppingBook;
pub use error::StoreError;
pub use input::{normalize_name, normalize_notes, parse_quantity, DEFAULT_QUANTITY};
pub use intent::{Change, ShoppingIntent};
pub use model::{ItemId, ItemStatus, ListId, ListProgress, ShoppingItem, ShoppingList};
