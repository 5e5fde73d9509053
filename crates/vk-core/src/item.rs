use serde::{Deserialize, Serialize};

use crate::enums::{ItemType, Location};
use crate::errors::StoreError;

/// An inventory item as stored in the remote database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Remote record id, assigned once at creation.
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub power: i64,
    pub location: Location,
    #[serde(default)]
    pub notes: String,
}

impl Item {
    /// Build the edit form pre-filled with this item's values.
    #[must_use]
    pub fn to_form(&self) -> ItemForm {
        ItemForm {
            name: self.name.clone(),
            item_type: self.item_type,
            power: self.power.to_string(),
            location: self.location,
            notes: self.notes.clone(),
        }
    }
}

/// Unsaved item values as entered by the user.
///
/// `power` stays textual until it is sent to the store, where
/// [`ItemForm::power_value`] coerces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemForm {
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub power: String,
    pub location: Location,
    #[serde(default)]
    pub notes: String,
}

impl ItemForm {
    /// Coerce the power text to an integer.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Coercion`] when the text is not an integer.
    pub fn power_value(&self) -> Result<i64, StoreError> {
        self.power
            .trim()
            .parse::<i64>()
            .map_err(|_| StoreError::Coercion(self.power.clone()))
    }

    /// The item that results from saving this form under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Coercion`] when the power text is not an integer.
    pub fn into_item(self, id: impl Into<String>) -> Result<Item, StoreError> {
        let power = self.power_value()?;
        Ok(Item {
            id: id.into(),
            name: self.name,
            item_type: self.item_type,
            power,
            location: self.location,
            notes: self.notes,
        })
    }
}
