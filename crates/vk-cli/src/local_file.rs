//! Read and write the local bootstrap file.

use std::path::Path;

use anyhow::Context;
use serde::Serialize;
use vk_core::bootstrap::BootstrapData;

/// Read `path`, or return the empty default when it does not exist.
pub fn load_or_default(path: &Path) -> anyhow::Result<BootstrapData> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            return Ok(BootstrapData::default());
        }
        Err(error) => {
            return Err(error).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    serde_json::from_str(&raw).with_context(|| format!("invalid bootstrap file {}", path.display()))
}

/// Write `data` to `path` as JSON indented by four spaces.
pub fn save(path: &Path, data: &BootstrapData) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    data.serialize(&mut serializer)
        .context("failed to serialize bootstrap data")?;
    buf.push(b'\n');

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, buf).with_context(|| format!("failed to write {}", path.display()))
}
