pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::{GitHistory, LinguistColors};
pub use crate::config::CliConfig;
pub use crate::core::builder::CatalogBuilder;
pub use crate::core::loader::{EntryLoader, MalformedPolicy};
pub use crate::domain::model::{Catalog, Entry, FilterState, SortKey, SortState};
pub use crate::domain::tags::{Api, Language};
pub use crate::utils::error::{CatalogError, Result};
