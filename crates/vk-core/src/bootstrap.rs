//! Shape of the local bootstrap file.
//!
//! The file seeds the application with characters and sample items. It is
//! never reconciled with the remote store.

use serde::{Deserialize, Serialize};

use crate::enums::{ItemType, Location};
use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BootstrapData {
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl BootstrapData {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.characters.is_empty() && self.items.is_empty()
    }

    /// The three default characters and a couple of sample items.
    ///
    /// Sample items carry `local-N` ids since they were never created remotely.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            characters: [Location::Character1, Location::Character2, Location::Character3]
                .iter()
                .map(ToString::to_string)
                .collect(),
            items: vec![
                Item {
                    id: "local-1".into(),
                    name: "Fatebringer".into(),
                    item_type: ItemType::Weapon,
                    power: 1600,
                    location: Location::Character1,
                    notes: String::new(),
                },
                Item {
                    id: "local-2".into(),
                    name: "Lion Rampant".into(),
                    item_type: ItemType::Armor,
                    power: 1590,
                    location: Location::Character2,
                    notes: String::new(),
                },
            ],
        }
    }
}
