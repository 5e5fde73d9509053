//! In-memory [`InventoryStore`] for controller tests.
//!
//! Mirrors the remote contract: listings are sorted by name, deletes archive,
//! archived records never list, and each `create_schema` makes a new empty
//! collection without switching to it.

use std::collections::HashMap;
use std::sync::Mutex;

use vk_core::{InventoryStore, Item, ItemForm, StoreError};

#[derive(Debug, Clone)]
struct Record {
    item: Item,
    archived: bool,
}

#[derive(Debug, Default)]
struct Inner {
    collections: HashMap<String, Vec<Record>>,
    next_id: u64,
    calls: Vec<&'static str>,
    fail_next: Option<fn() -> StoreError>,
    stall_next: bool,
}

impl Inner {
    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{prefix}-{}", self.next_id)
    }

    /// Record the call and return the injected failure, if any.
    fn enter(&mut self, call: &'static str) -> Result<(), StoreError> {
        self.calls.push(call);
        self.fail_next.take().map_or(Ok(()), |fail| Err(fail()))
    }
}

#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    database_id: Option<String>,
}

impl MemoryStore {
    /// A store with one empty active collection `db-0`.
    pub fn new() -> Self {
        let mut inner = Inner::default();
        inner.collections.insert("db-0".to_string(), Vec::new());
        Self {
            inner: Mutex::new(inner),
            database_id: Some("db-0".to_string()),
        }
    }

    /// A store with no active collection.
    pub fn unconfigured() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            database_id: None,
        }
    }

    /// Seed the active collection directly, bypassing call recording.
    pub fn seed(&self, form: &ItemForm) -> String {
        let mut inner = self.inner.lock().unwrap();
        let id = inner.next_id("page");
        let item = form.clone().into_item(id.clone()).unwrap();
        let database = self.database_id.clone().unwrap();
        inner
            .collections
            .entry(database)
            .or_default()
            .push(Record {
                item,
                archived: false,
            });
        id
    }

    /// Make the next store call fail with `error()`.
    pub fn fail_next(&self, error: fn() -> StoreError) {
        self.inner.lock().unwrap().fail_next = Some(error);
    }

    /// Make the next `list_items` call never complete.
    pub fn stall_next(&self) {
        self.inner.lock().unwrap().stall_next = true;
    }

    async fn stall_if_requested(&self) {
        let stall = std::mem::take(&mut self.inner.lock().unwrap().stall_next);
        if stall {
            std::future::pending::<()>().await;
        }
    }

    /// Names of store calls made so far.
    pub fn calls(&self) -> Vec<&'static str> {
        self.inner.lock().unwrap().calls.clone()
    }

    /// Whether `id` exists in the active collection, archived or not.
    pub fn is_archived(&self, id: &str) -> Option<bool> {
        let inner = self.inner.lock().unwrap();
        let database = self.database_id.as_deref()?;
        inner
            .collections
            .get(database)?
            .iter()
            .find(|record| record.item.id == id)
            .map(|record| record.archived)
    }

    fn active(&self) -> Result<String, StoreError> {
        self.database_id
            .clone()
            .ok_or(StoreError::NotConfigured("notion.database_id"))
    }
}

impl InventoryStore for MemoryStore {
    async fn create_schema(&self) -> Result<String, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter("create_schema")?;
        let id = inner.next_id("db");
        inner.collections.insert(id.clone(), Vec::new());
        Ok(id)
    }

    async fn list_items(&self) -> Result<Vec<Item>, StoreError> {
        self.stall_if_requested().await;
        let mut inner = self.inner.lock().unwrap();
        inner.enter("list_items")?;
        let database = self.active()?;
        let records = inner
            .collections
            .get(&database)
            .ok_or_else(|| StoreError::NotFound(database.clone()))?;
        let mut items: Vec<Item> = records
            .iter()
            .filter(|record| !record.archived)
            .map(|record| record.item.clone())
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }

    async fn create_item(&self, form: &ItemForm) -> Result<String, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter("create_item")?;
        let database = self.active()?;
        let id = inner.next_id("page");
        let item = form.clone().into_item(id.clone())?;
        inner
            .collections
            .get_mut(&database)
            .ok_or_else(|| StoreError::NotFound(database.clone()))?
            .push(Record {
                item,
                archived: false,
            });
        Ok(id)
    }

    async fn update_item(&self, id: &str, form: &ItemForm) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter("update_item")?;
        let database = self.active()?;
        let updated = form.clone().into_item(id)?;
        let record = inner
            .collections
            .get_mut(&database)
            .and_then(|records| records.iter_mut().find(|record| record.item.id == id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.item = updated;
        Ok(())
    }

    async fn delete_item(&self, id: &str) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.enter("delete_item")?;
        let database = self.active()?;
        let record = inner
            .collections
            .get_mut(&database)
            .and_then(|records| records.iter_mut().find(|record| record.item.id == id))
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.archived = true;
        Ok(())
    }

    fn database_id(&self) -> Option<&str> {
        self.database_id.as_deref()
    }

    fn set_database_id(&mut self, id: String) {
        self.database_id = Some(id);
    }
}
