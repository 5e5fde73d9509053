//! View controller: owns the displayed item list and turns user intents into
//! store calls.
//!
//! The row list is plain state. Rendering is a projection of it via
//! [`InventoryController::visible`], so every operation here can be tested
//! against an in-memory store without a terminal.

mod dialog;
mod notice;
mod state;

#[cfg(test)]
mod test_support;
#[cfg(test)]
mod tests;

pub use dialog::Dialogs;
pub use notice::{Notice, NoticeLevel};
pub use state::{ControllerError, ControllerState, Operation, Outcome};

use state::BusyGuard;

use vk_core::{Filter, InventoryStore, Item, ItemForm};

pub struct InventoryController<S> {
    store: S,
    rows: Vec<Item>,
    state: ControllerState,
}

impl<S: InventoryStore> InventoryController<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            rows: Vec::new(),
            state: ControllerState::Idle,
        }
    }

    /// Rows from the last refresh, in store order.
    pub fn rows(&self) -> &[Item] {
        &self.rows
    }

    pub const fn state(&self) -> ControllerState {
        self.state
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Rows passing `filter`. Never re-queries and never drops rows.
    pub fn visible(&self, filter: &Filter) -> Vec<&Item> {
        filter.apply(&self.rows)
    }

    /// Find a row by exact id, else by case-insensitive name when exactly one
    /// row carries that name.
    pub fn select(&self, key: &str) -> Option<&Item> {
        if let Some(row) = self.rows.iter().find(|row| row.id == key) {
            return Some(row);
        }
        let key = key.to_lowercase();
        let mut by_name = self
            .rows
            .iter()
            .filter(|row| row.name.to_lowercase() == key);
        match (by_name.next(), by_name.next()) {
            (Some(row), None) => Some(row),
            _ => None,
        }
    }

    /// Replace the rows with a fresh listing from the store.
    ///
    /// On failure the rows stay empty and the error is returned; the caller
    /// decides whether it is shown to the user.
    pub async fn refresh(&mut self) -> Result<usize, ControllerError> {
        let busy = BusyGuard::enter(&mut self.state, Operation::Refresh)?;
        self.rows.clear();
        let result = self.store.list_items().await;
        drop(busy);

        self.rows = result?;
        tracing::debug!(rows = self.rows.len(), "refreshed item list");
        Ok(self.rows.len())
    }

    /// Reload after a successful mutation. Failures are logged only.
    async fn reload(&mut self) {
        if let Err(error) = self.refresh().await {
            tracing::warn!(%error, "failed to reload items after change");
        }
    }

    /// Create an item, then reload. Returns the new id.
    pub async fn add_item(&mut self, form: &ItemForm) -> Result<String, ControllerError> {
        let busy = BusyGuard::enter(&mut self.state, Operation::Create)?;
        let result = self.store.create_item(form).await;
        drop(busy);

        let id = result?;
        self.reload().await;
        Ok(id)
    }

    /// Edit the selected row through `dialog`, then save and reload.
    ///
    /// Notes are carried over from the row unchanged.
    pub async fn edit<D: Dialogs>(
        &mut self,
        selected: Option<&str>,
        dialog: &mut D,
    ) -> Result<Outcome, ControllerError> {
        let Some(row) = self.selected_row(selected) else {
            return Ok(Outcome::NoSelection);
        };
        let Some(mut form) = dialog.edit_item(&row) else {
            return Ok(Outcome::Cancelled);
        };
        form.notes = row.notes;

        let busy = BusyGuard::enter(&mut self.state, Operation::Update)?;
        let result = self.store.update_item(&row.id, &form).await;
        drop(busy);

        result?;
        self.reload().await;
        Ok(Outcome::Done)
    }

    /// Delete the selected row after confirmation, then reload.
    pub async fn delete<D: Dialogs>(
        &mut self,
        selected: Option<&str>,
        dialog: &mut D,
    ) -> Result<Outcome, ControllerError> {
        let Some(row) = self.selected_row(selected) else {
            return Ok(Outcome::NoSelection);
        };
        if !dialog.confirm_delete(&row) {
            return Ok(Outcome::Declined);
        }

        let busy = BusyGuard::enter(&mut self.state, Operation::Delete)?;
        let result = self.store.delete_item(&row.id).await;
        drop(busy);

        result?;
        self.reload().await;
        Ok(Outcome::Done)
    }

    /// Refresh, reported as a notice.
    pub async fn sync_now(&mut self) -> Notice {
        match self.refresh().await {
            Ok(count) => Notice::success("Sync", format!("synced {count} items from Notion")),
            Err(error) => Notice::failure("Sync failed", &error),
        }
    }

    /// Create a new remote database. The active database is not changed; see
    /// [`InventoryController::set_active_database`].
    pub async fn provision_database(&mut self) -> (Notice, Option<String>) {
        let busy = match BusyGuard::enter(&mut self.state, Operation::Provision) {
            Ok(busy) => busy,
            Err(error) => return (Notice::failure("Create database failed", &error), None),
        };
        let result = self.store.create_schema().await;
        drop(busy);

        match result {
            Ok(id) => (
                Notice::success("Create database", format!("created database {id}")),
                Some(id),
            ),
            Err(error) => (Notice::failure("Create database failed", &error), None),
        }
    }

    /// Point subsequent item operations at `database_id`.
    ///
    /// Rows from the previous database are dropped; call
    /// [`InventoryController::refresh`] to load the new one.
    pub fn set_active_database(&mut self, database_id: impl Into<String>) {
        self.store.set_database_id(database_id.into());
        self.rows.clear();
    }

    fn selected_row(&self, selected: Option<&str>) -> Option<Item> {
        let id = selected?;
        self.rows.iter().find(|row| row.id == id).cloned()
    }
}
