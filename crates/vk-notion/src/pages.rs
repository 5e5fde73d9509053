//! Mapping between Notion page objects and [`Item`]s.

use std::collections::HashMap;

use serde::Deserialize;
use vk_core::{Item, ItemType, Location, StoreError};

#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<PageObject>,
    #[serde(default)]
    pub has_more: bool,
}

/// Response of create-page and create-database: only the id matters.
#[derive(Debug, Deserialize)]
pub struct Created {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct PageObject {
    pub id: String,
    #[serde(default)]
    pub properties: HashMap<String, PropertyValue>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title {
        title: Vec<RichText>,
    },
    RichText {
        rich_text: Vec<RichText>,
    },
    Select {
        select: Option<SelectOption>,
    },
    Number {
        number: Option<serde_json::Number>,
    },
    #[serde(other)]
    Other,
}

#[derive(Debug, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RichText {
    #[serde(default)]
    plain_text: Option<String>,
    #[serde(default)]
    text: Option<TextContent>,
}

#[derive(Debug, Deserialize)]
struct TextContent {
    content: String,
}

impl RichText {
    fn content(&self) -> &str {
        self.plain_text
            .as_deref()
            .or_else(|| self.text.as_ref().map(|t| t.content.as_str()))
            .unwrap_or_default()
    }
}

fn join(segments: &[RichText]) -> String {
    segments.iter().map(RichText::content).collect()
}

impl PageObject {
    /// Convert a database row into an [`Item`].
    ///
    /// A missing or empty `Notes` property yields empty notes; any other
    /// missing or unset property is a schema mismatch.
    pub fn into_item(self) -> Result<Item, StoreError> {
        let id = self.id;
        let mismatch = |what: &str| StoreError::SchemaMismatch(format!("page {id}: {what}"));

        let name = match self.properties.get("Name") {
            Some(PropertyValue::Title { title }) => join(title),
            _ => return Err(mismatch("missing 'Name' title property")),
        };

        let item_type = match self.properties.get("Type") {
            Some(PropertyValue::Select {
                select: Some(option),
            }) => option
                .name
                .parse::<ItemType>()
                .map_err(|e| mismatch(&e.to_string()))?,
            _ => return Err(mismatch("'Type' is missing or unset")),
        };

        let location = match self.properties.get("Location") {
            Some(PropertyValue::Select {
                select: Some(option),
            }) => option
                .name
                .parse::<Location>()
                .map_err(|e| mismatch(&e.to_string()))?,
            _ => return Err(mismatch("'Location' is missing or unset")),
        };

        let power = match self.properties.get("Power") {
            Some(PropertyValue::Number {
                number: Some(number),
            }) => number_to_power(number).ok_or_else(|| mismatch("'Power' is not an integer"))?,
            _ => return Err(mismatch("'Power' is missing or unset")),
        };

        let notes = match self.properties.get("Notes") {
            Some(PropertyValue::RichText { rich_text }) => join(rich_text),
            _ => String::new(),
        };

        Ok(Item {
            id,
            name,
            item_type,
            power,
            location,
            notes,
        })
    }
}

#[allow(clippy::cast_possible_truncation)]
fn number_to_power(number: &serde_json::Number) -> Option<i64> {
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|value| value.fract() == 0.0 && value.is_finite())
            .map(|value| value as i64)
    })
}
