//! Request payloads for the inventory database schema.

use serde_json::{Value, json};
use vk_core::{ItemForm, ItemType, Location, StoreError};

/// Notion rejects rich-text segments longer than this many characters.
const MAX_SEGMENT_CHARS: usize = 2000;

/// Property definitions for a newly provisioned inventory database.
pub fn database_properties() -> Value {
    let type_options: Vec<Value> = ItemType::ALL
        .iter()
        .map(|t| json!({ "name": t.as_str(), "color": t.color() }))
        .collect();
    let location_options: Vec<Value> = Location::ALL
        .iter()
        .map(|l| json!({ "name": l.as_str(), "color": "default" }))
        .collect();

    json!({
        "Name": { "title": {} },
        "Type": { "select": { "options": type_options } },
        "Power": { "number": {} },
        "Location": { "select": { "options": location_options } },
        "Notes": { "rich_text": {} },
    })
}

/// Full property set for creating or replacing a page.
///
/// Power is coerced here, before any request is built.
pub fn page_properties(form: &ItemForm) -> Result<Value, StoreError> {
    let power = form.power_value()?;
    Ok(json!({
        "Name": { "title": text_segments(&form.name) },
        "Type": { "select": { "name": form.item_type.as_str() } },
        "Power": { "number": power },
        "Location": { "select": { "name": form.location.as_str() } },
        "Notes": { "rich_text": text_segments(&form.notes) },
    }))
}

/// Title of a provisioned database.
pub fn database_title(title: &str) -> Value {
    text_segments(title)
}

/// Split text into rich-text segments Notion accepts. Empty text yields no segments.
fn text_segments(text: &str) -> Value {
    let chars: Vec<char> = text.chars().collect();
    let segments: Vec<Value> = chars
        .chunks(MAX_SEGMENT_CHARS)
        .map(|chunk| {
            let content: String = chunk.iter().collect();
            json!({ "type": "text", "text": { "content": content } })
        })
        .collect();
    Value::Array(segments)
}
