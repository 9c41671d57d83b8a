use std::{cell::RefCell, rc::Rc};

use tracing::{debug, info};

use crate::{
    config::{Seeding, StoreConfig},
    digest::{hash_digest, DigestOutput, Digestible},
    error::CatalogError,
};

use super::{
    category::Category,
    dish::{DishDraft, DishId, DishRecord},
    seed::seed_for,
};

/// A store handed to every screen that reads or edits the menu. The
/// application is single-threaded, so a `RefCell` is enough.
pub type SharedCatalog = Rc<RefCell<CatalogStore>>;

/// Owns the dishes of every category. This is the only place where the
/// collections are modified.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CatalogStore {
    manifest: CatalogManifest,
    /// One collection per category, indexed by `Category::index`. Each
    /// collection is in insertion order, and the IDs within it are unique.
    sections: [Vec<DishRecord>; 3],
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
struct CatalogManifest {
    /// The next ID to be assigned to a dish, per category. Only ever grows,
    /// so IDs of removed dishes are never handed out again. None once the
    /// last ID of the category has been handed out.
    next_dish_ids: [Option<DishId>; 3],
}

impl CatalogStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        CatalogStore::empty()
    }

    /// Creates a store with no dishes, as the chef control panel starts.
    pub fn empty() -> Self {
        CatalogStore::with_config(StoreConfig::chef())
    }

    /// Creates a store holding the built-in menu.
    pub fn menu() -> Self {
        CatalogStore::with_config(StoreConfig::menu())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        let mut store = CatalogStore {
            manifest: CatalogManifest { next_dish_ids: [Some(DishId(config.first_dish_id)); 3] },
            sections: Default::default(),
        };

        if config.seeding == Seeding::Menu {
            for category in Category::ALL {
                for dish in seed_for(category) {
                    store.insert(category, dish.to_draft());
                }
            }
        }

        debug!(
            seeding = ?config.seeding,
            first_dish_id = config.first_dish_id,
            "created catalog store"
        );
        store
    }

    pub fn into_shared(self) -> SharedCatalog {
        Rc::new(RefCell::new(self))
    }

    // Returns a unique `DishId` for the category and marks that ID as used.
    // `u64::MAX` is still handed out; panics on the call after that.
    fn gen_unique_dish_id(&mut self, category: Category) -> DishId {
        let next = &mut self.manifest.next_dish_ids[category.index()];
        let id = next.expect("dish ID space exhausted");
        *next = id.0.checked_add(1).map(DishId);
        id
    }

    fn insert(&mut self, category: Category, draft: DishDraft) -> DishRecord {
        let id = self.gen_unique_dish_id(category);
        let record = draft.into_record(id);
        self.sections[category.index()].push(record.clone());
        record
    }

    /// Appends a new dish to the end of the category and returns it with its
    /// freshly assigned ID. The fields are stored as given; empty strings are
    /// accepted.
    pub fn add(&mut self, category: Category, draft: DishDraft) -> DishRecord {
        let record = self.insert(category, draft);
        info!(%category, id = %record.id, name = %record.name, "added dish");
        record
    }

    /// Same as `add`, for a category given by its key. Fails without touching
    /// the store if the key names no category.
    pub fn add_by_key(&mut self, key: &str, draft: DishDraft) -> Result<DishRecord, CatalogError> {
        let category = key.parse()?;
        Ok(self.add(category, draft))
    }

    /// Removes the dish with the given ID from the category, returning it.
    /// Removing an ID that is not present does nothing.
    pub fn remove(&mut self, category: Category, id: DishId) -> Option<DishRecord> {
        let section = &mut self.sections[category.index()];
        let Some(index) = section.iter().position(|dish| dish.id == id) else {
            debug!(%category, %id, "no dish to remove");
            return None;
        };

        let removed = section.remove(index);
        info!(%category, %id, name = %removed.name, "removed dish");
        Some(removed)
    }

    /// Same as `remove`, for a category given by its key.
    pub fn remove_by_key(
        &mut self,
        key: &str,
        id: DishId,
    ) -> Result<Option<DishRecord>, CatalogError> {
        let category = key.parse()?;
        Ok(self.remove(category, id))
    }

    /// The dishes of the category in the order they were added.
    pub fn list(&self, category: Category) -> &[DishRecord] {
        &self.sections[category.index()]
    }

    pub fn get(&self, category: Category, id: DishId) -> Option<&DishRecord> {
        self.list(category).iter().find(|dish| dish.id == id)
    }

    pub fn len(&self, category: Category) -> usize {
        self.list(category).len()
    }

    /// Whether every category is empty.
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(Vec::is_empty)
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        CatalogStore::new()
    }
}

impl Digestible for CatalogStore {
    fn digest(&self) -> DigestOutput {
        hash_digest(&(&self.manifest, &self.sections))
    }
}

/// Hands a dish chosen on a listing over to the detail view. No lookup is
/// performed; the record comes back exactly as given.
pub fn select(record: DishRecord) -> DishRecord {
    debug!(id = %record.id, name = %record.name, "selected dish");
    record
}
