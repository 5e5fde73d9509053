use serde::Serialize;
use serde_json::Value;
use vk_core::Item;

use crate::cli::OutputFormat;
use crate::controller::{Notice, NoticeLevel};
use crate::ui;

pub mod table;

/// Column order of the item table.
const ITEM_HEADERS: [&str; 6] = ["Name", "Type", "Power", "Location", "Notes", "Id"];
const ITEM_TYPE_COLUMN: usize = 1;

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_table(value),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

/// Render items; the table form uses the fixed item column order.
pub fn render_items(items: &[&Item], format: OutputFormat) -> anyhow::Result<String> {
    if format != OutputFormat::Table {
        return render(&items, format);
    }
    if items.is_empty() {
        return Ok(String::from("(no items)"));
    }

    let rows = items
        .iter()
        .map(|item| {
            vec![
                item.name.clone(),
                item.item_type.to_string(),
                item.power.to_string(),
                item.location.to_string(),
                item.notes.clone(),
                item.id.clone(),
            ]
        })
        .collect::<Vec<_>>();
    Ok(table::render_entity_table(
        &ITEM_HEADERS,
        &rows,
        table_options(Some(ITEM_TYPE_COLUMN)),
    ))
}

pub fn output_items(items: &[&Item], format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render_items(items, format)?);
    Ok(())
}

/// Print a notice to stderr. Quiet mode keeps only failures.
pub fn notice(notice: &Notice) {
    if ui::prefs().quiet && notice.level != NoticeLevel::Failure {
        return;
    }
    eprintln!("{notice}");
}

fn table_options(type_column: Option<usize>) -> table::TableOptions {
    let prefs = ui::prefs();
    table::TableOptions {
        max_width: prefs.term_width,
        type_column: type_column.filter(|_| prefs.table_color),
    }
}

fn render_table<T: Serialize>(value: &T) -> anyhow::Result<String> {
    let options = table_options(None);

    let value = serde_json::to_value(value)?;
    match value {
        Value::Array(items) => Ok(render_array_table(&items, options)),
        Value::Object(map) => {
            let rows = map
                .into_iter()
                .map(|(key, value)| vec![key, value_to_cell(&value)])
                .collect::<Vec<_>>();
            Ok(table::render_entity_table(&["key", "value"], &rows, options))
        }
        scalar => Ok(value_to_cell(&scalar)),
    }
}

fn render_array_table(items: &[Value], options: table::TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return table::render_entity_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<String>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(key) {
                headers.push(key.clone());
            }
        }
    }

    let header_refs = headers.iter().map(String::as_str).collect::<Vec<_>>();
    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    table::render_entity_table(&header_refs, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        Value::Array(values) => values.iter().map(value_to_cell).collect::<Vec<_>>().join(", "),
        other @ Value::Object(_) => other.to_string(),
    }
}
