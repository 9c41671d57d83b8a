pub mod config;
pub mod data;
pub mod digest;
pub mod error;
pub mod view;

pub use config::{Seeding, StoreConfig};
pub use data::{
    select, CatalogStore, Category, DishDraft, DishId, DishRecord, ImageReference, SharedCatalog,
};
pub use error::{CatalogError, PickError};
