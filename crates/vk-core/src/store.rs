//! The remote store contract.

use std::future::Future;

use crate::errors::StoreError;
use crate::item::{Item, ItemForm};

/// A remote collection of inventory items.
///
/// Implementations are the only components allowed to perform network I/O.
/// Every call is a single request/response with no retry.
pub trait InventoryStore {
    /// Provision a new collection with the fixed item schema and return its id.
    ///
    /// Not idempotent: each call creates an independent collection. The
    /// active collection is left unchanged.
    fn create_schema(&self) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// All non-archived items of the active collection, sorted by name ascending.
    fn list_items(&self) -> impl Future<Output = Result<Vec<Item>, StoreError>> + Send;

    /// Create one item and return its new id.
    fn create_item(
        &self,
        form: &ItemForm,
    ) -> impl Future<Output = Result<String, StoreError>> + Send;

    /// Replace all properties of the item `id`.
    fn update_item(
        &self,
        id: &str,
        form: &ItemForm,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Archive the item `id`. Archived items no longer appear in listings.
    fn delete_item(&self, id: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Id of the collection item operations target, if any.
    fn database_id(&self) -> Option<&str>;

    /// Point subsequent item operations at another collection.
    fn set_database_id(&mut self, id: String);
}
