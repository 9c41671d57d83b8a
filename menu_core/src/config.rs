/// The id given to the first dish of each category unless configured
/// otherwise.
pub const DEFAULT_FIRST_DISH_ID: u64 = 1;

/// What a freshly created store contains.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Seeding {
    /// No dishes at all. The chef control panel starts from this.
    #[default]
    Empty,
    /// The built-in restaurant menu, used by the browsing screens.
    Menu,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct StoreConfig {
    pub seeding: Seeding,
    /// The first id handed out in every category. Seeded dishes consume ids
    /// from this point onwards, same as dishes added later.
    /// Every ID up to and including `u64::MAX` is handed out; adding a dish
    /// to a category past that panics. With `Seeding::Menu` the seed itself
    /// needs up to four IDs.
    pub first_dish_id: u64,
}

impl StoreConfig {
    /// Configuration for the store behind the menu screens.
    pub fn menu() -> Self {
        StoreConfig { seeding: Seeding::Menu, ..Default::default() }
    }

    /// Configuration for the store behind the chef control panel.
    pub fn chef() -> Self {
        StoreConfig::default()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { seeding: Seeding::default(), first_dish_id: DEFAULT_FIRST_DISH_ID }
    }
}
