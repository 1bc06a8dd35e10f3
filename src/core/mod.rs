pub mod builder;
pub mod colors;
pub mod engine;
pub mod loader;
pub mod query;

pub use crate::domain::model::{
    Catalog, ColorMap, Descriptor, Entry, FilterState, OneOrMany, SortKey, SortState,
};
pub use crate::domain::ports::{ColorSource, ConfigProvider, History};
pub use crate::domain::tags::{Api, Language};
pub use crate::utils::error::Result;
