//! Persisting the active database id.

use std::path::Path;

use crate::ConfigError;

/// Set `notion.database_id` in the TOML file at `path`.
///
/// Other keys in the file are preserved. The file and its parent directory
/// are created when missing.
pub fn write_active_database(path: &Path, database_id: &str) -> Result<(), ConfigError> {
    let mut document = if path.exists() {
        std::fs::read_to_string(path)?.parse::<toml::Table>()?
    } else {
        toml::Table::new()
    };

    let notion = document
        .entry("notion")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()));
    let Some(notion) = notion.as_table_mut() else {
        return Err(ConfigError::InvalidValue {
            field: "notion".to_string(),
            reason: format!("expected a table in {}", path.display()),
        });
    };
    notion.insert(
        "database_id".to_string(),
        toml::Value::String(database_id.to_string()),
    );

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(&document)?)?;
    Ok(())
}
