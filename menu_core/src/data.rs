mod catalog;
mod category;
mod dish;
mod seed;

pub use catalog::{select, CatalogStore, SharedCatalog};
pub use category::Category;
pub use dish::{DishDraft, DishId, DishRecord, ImageReference};
pub use seed::{seed_for, SeedDish};
