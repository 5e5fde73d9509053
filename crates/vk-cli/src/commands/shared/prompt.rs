//! Terminal implementation of the controller's dialogs.
//!
//! The edit "dialog" is the set of field flags given on the command line; the
//! delete confirmation is a y/N prompt on stderr when stdin is a terminal.

use std::io::{BufRead, IsTerminal, Write};

use vk_core::{Item, ItemForm, ItemType, Location};

use crate::cli::root_commands::EditArgs;
use crate::controller::Dialogs;

/// Field values supplied on the command line for `vk edit`.
#[derive(Clone, Debug, Default)]
pub struct EditOverrides {
    pub name: Option<String>,
    pub item_type: Option<ItemType>,
    pub power: Option<String>,
    pub location: Option<Location>,
}

impl EditOverrides {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.item_type.is_none()
            && self.power.is_none()
            && self.location.is_none()
    }

    /// The form for `current` with the given fields replaced.
    pub fn apply(&self, current: &Item) -> ItemForm {
        let mut form = current.to_form();
        if let Some(name) = &self.name {
            form.name.clone_from(name);
        }
        if let Some(item_type) = self.item_type {
            form.item_type = item_type;
        }
        if let Some(power) = &self.power {
            form.power.clone_from(power);
        }
        if let Some(location) = self.location {
            form.location = location;
        }
        form
    }
}

impl From<EditArgs> for EditOverrides {
    fn from(args: EditArgs) -> Self {
        Self {
            name: args.name,
            item_type: args.item_type,
            power: args.power,
            location: args.location,
        }
    }
}

pub struct CliDialogs {
    overrides: EditOverrides,
    assume_yes: bool,
}

impl CliDialogs {
    pub fn new(overrides: EditOverrides, assume_yes: bool) -> Self {
        Self {
            overrides,
            assume_yes,
        }
    }
}

impl Dialogs for CliDialogs {
    fn edit_item(&mut self, current: &Item) -> Option<ItemForm> {
        if self.overrides.is_empty() {
            return None;
        }
        Some(self.overrides.apply(current))
    }

    fn confirm_delete(&mut self, item: &Item) -> bool {
        if self.assume_yes {
            return true;
        }
        let stdin = std::io::stdin();
        if !stdin.is_terminal() {
            tracing::warn!(
                item = %item.name,
                "not a terminal; pass --yes to delete without a prompt"
            );
            return false;
        }
        let question = format!("Delete '{}' ({})? [y/N] ", item.name, item.id);
        confirm(&mut stdin.lock(), &mut std::io::stderr(), &question).unwrap_or_else(|error| {
            tracing::warn!(%error, "failed to read confirmation");
            false
        })
    }
}

/// Ask `question` on `writer` and read one line from `reader`. Only `y`/`yes`
/// (any case) confirms.
fn confirm<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
) -> std::io::Result<bool> {
    write!(writer, "{question}")?;
    writer.flush()?;

    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
