//! # vk-core
//!
//! Core types for Vaultkeeper, shared by the remote adapter and the CLI:
//! - [`Item`] and the unsaved [`ItemForm`] input shape
//! - the fixed [`ItemType`] and [`Location`] option sets
//! - presentational [`Filter`] predicates
//! - [`StoreError`] with its [`ErrorKind`] classification
//! - the [`InventoryStore`] contract implemented by remote adapters
//! - the local bootstrap file shape

pub mod bootstrap;
pub mod enums;
pub mod errors;
pub mod filter;
pub mod item;
pub mod store;

pub use enums::{ItemType, Location, TypeFilter};
pub use errors::{ErrorKind, StoreError};
pub use filter::Filter;
pub use item::{Item, ItemForm};
pub use store::InventoryStore;
