//! Headless models of the screens that read and edit the catalog. A UI layer
//! renders these; they hold no platform types.

mod browse;
mod chef;
mod picker;

pub use browse::{CategoryListing, DishDetail};
pub use chef::ChefPanel;
pub use picker::MediaPicker;
