//! Fixed option sets for items.
//!
//! Both enums serialize to the option names used by the remote database
//! (`"Weapon"`, `"Character 1"`, ...). Parsing is lenient: case-insensitive,
//! `-`/`_` treated as spaces, and plural type names accepted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string does not name a known option.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {field} '{value}': expected one of {expected}")]
pub struct ParseOptionError {
    pub field: &'static str,
    pub value: String,
    pub expected: &'static str,
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_ascii_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

// ---------------------------------------------------------------------------
// ItemType
// ---------------------------------------------------------------------------

/// Kind of inventory item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Weapon,
    Armor,
    Ghost,
    Ship,
    Sparrow,
}

impl ItemType {
    pub const ALL: [Self; 5] = [
        Self::Weapon,
        Self::Armor,
        Self::Ghost,
        Self::Ship,
        Self::Sparrow,
    ];

    /// Option name in the remote select property.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Armor => "Armor",
            Self::Ghost => "Ghost",
            Self::Ship => "Ship",
            Self::Sparrow => "Sparrow",
        }
    }

    /// Select option colour used when provisioning the database.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Weapon => "red",
            Self::Armor => "blue",
            Self::Ghost => "green",
            Self::Ship => "purple",
            Self::Sparrow => "orange",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = ParseOptionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "weapon" | "weapons" => Ok(Self::Weapon),
            "armor" | "armour" => Ok(Self::Armor),
            "ghost" | "ghosts" => Ok(Self::Ghost),
            "ship" | "ships" => Ok(Self::Ship),
            "sparrow" | "sparrows" => Ok(Self::Sparrow),
            _ => Err(ParseOptionError {
                field: "type",
                value: raw.to_string(),
                expected: "Weapon, Armor, Ghost, Ship, Sparrow",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Location
// ---------------------------------------------------------------------------

/// Where an item is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    #[serde(rename = "Character 1")]
    Character1,
    #[serde(rename = "Character 2")]
    Character2,
    #[serde(rename = "Character 3")]
    Character3,
    Vault,
}

impl Location {
    pub const ALL: [Self; 4] = [
        Self::Character1,
        Self::Character2,
        Self::Character3,
        Self::Vault,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Character1 => "Character 1",
            Self::Character2 => "Character 2",
            Self::Character3 => "Character 3",
            Self::Vault => "Vault",
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Location {
    type Err = ParseOptionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match normalize(raw).as_str() {
            "character 1" | "character1" => Ok(Self::Character1),
            "character 2" | "character2" => Ok(Self::Character2),
            "character 3" | "character3" => Ok(Self::Character3),
            "vault" => Ok(Self::Vault),
            _ => Err(ParseOptionError {
                field: "location",
                value: raw.to_string(),
                expected: "Character 1, Character 2, Character 3, Vault",
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TypeFilter
// ---------------------------------------------------------------------------

/// Item type selection for list filtering. `All` disables the type predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Only(ItemType),
}

impl TypeFilter {
    #[must_use]
    pub fn matches(self, item_type: ItemType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == item_type,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(item_type) => item_type.fmt(f),
        }
    }
}

impl FromStr for TypeFilter {
    type Err = ParseOptionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if normalize(raw) == "all" {
            return Ok(Self::All);
        }
        raw.parse::<ItemType>()
            .map(Self::Only)
            .map_err(|_| ParseOptionError {
                field: "type filter",
                value: raw.to_string(),
                expected: "All, Weapon, Armor, Ghost, Ship, Sparrow",
            })
    }
}
