use tracing::debug;

use crate::{
    data::{select, Category, DishId, DishRecord, ImageReference, SharedCatalog},
    digest::{DigestOutput, Digestible},
};

/// The cards of one category, as shown on the starters, mains and desserts
/// screens.
pub struct CategoryListing {
    catalog: SharedCatalog,
    category: Category,
    /// Snapshot of the category taken at the last refresh.
    cards: Vec<DishRecord>,
    /// Digest of the store when `cards` was taken.
    seen_digest: DigestOutput,
}

impl CategoryListing {
    pub fn new(catalog: SharedCatalog, category: Category) -> Self {
        let (cards, seen_digest) = {
            let store = catalog.borrow();
            (store.list(category).to_vec(), store.digest())
        };
        Self { catalog, category, cards, seen_digest }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The screen title, e.g. "Available Starters (3)".
    pub fn header(&self) -> String {
        format!("Available {} ({})", self.category, self.cards.len())
    }

    pub fn cards(&self) -> &[DishRecord] {
        &self.cards
    }

    /// Re-reads the category if the store changed since the last snapshot.
    /// Returns whether the cards changed.
    pub fn refresh(&mut self) -> bool {
        let store = self.catalog.borrow();
        let digest = store.digest();
        if digest == self.seen_digest {
            return false;
        }
        self.seen_digest = digest;

        let section = store.list(self.category);
        if section == self.cards.as_slice() {
            // another category changed
            return false;
        }
        debug!(category = %self.category, count = section.len(), "refreshed listing");
        self.cards = section.to_vec();
        true
    }

    /// Opens the detail view for the card with the given ID. Returns None if
    /// no card in the current snapshot has that ID.
    pub fn choose(&self, id: DishId) -> Option<DishDetail> {
        let card = self.cards.iter().find(|card| card.id == id)?;
        Some(DishDetail::new(select(card.clone())))
    }
}

/// The read-only detail view of a single dish.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DishDetail {
    record: DishRecord,
}

impl DishDetail {
    pub const TITLE: &'static str = "Chef's Selection";

    pub fn new(record: DishRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &DishRecord {
        &self.record
    }

    pub fn name(&self) -> &str {
        &self.record.name
    }

    pub fn price(&self) -> &str {
        &self.record.price
    }

    pub fn description(&self) -> &str {
        &self.record.description
    }

    pub fn image(&self) -> Option<&ImageReference> {
        self.record.image.as_ref()
    }
}

#[cfg(test)]
mod test {
    use crate::data::{CatalogStore, DishDraft};

    use super::*;

    #[test]
    fn listing_header_counts_cards() {
        let catalog = CatalogStore::menu().into_shared();
        assert_eq!(
            CategoryListing::new(catalog.clone(), Category::Starters).header(),
            "Available Starters (3)"
        );
        assert_eq!(CategoryListing::new(catalog, Category::Mains).header(), "Available Mains (4)");
    }

    #[test]
    fn listing_refresh_after_add() {
        let catalog = CatalogStore::menu().into_shared();
        let mut listing = CategoryListing::new(catalog.clone(), Category::Desserts);
        assert!(!listing.refresh());

        let added =
            catalog.borrow_mut().add(Category::Desserts, DishDraft::new("Malva Pudding", "R90", ""));
        // snapshot is stale until refreshed
        assert_eq!(listing.cards().len(), 4);

        assert!(listing.refresh());
        assert_eq!(listing.cards().last(), Some(&added));
        assert_eq!(listing.header(), "Available Desserts (5)");
        assert!(!listing.refresh());
    }

    #[test]
    fn listing_ignores_other_categories() {
        let catalog = CatalogStore::menu().into_shared();
        let mut listing = CategoryListing::new(catalog.clone(), Category::Starters);
        let before = listing.cards().to_vec();

        catalog.borrow_mut().add(Category::Mains, DishDraft::new("Bobotie", "R150", ""));
        assert!(!listing.refresh());
        assert_eq!(listing.cards(), before.as_slice());
    }

    #[test]
    fn listing_refresh_after_remove() {
        let catalog = CatalogStore::menu().into_shared();
        let mut listing = CategoryListing::new(catalog.clone(), Category::Mains);
        let steak = listing.cards()[1].clone();

        catalog.borrow_mut().remove(Category::Mains, steak.id);
        assert!(listing.refresh());
        assert!(!listing.cards().contains(&steak));
        assert!(listing.choose(steak.id).is_none());
    }

    #[test]
    fn choose_opens_detail() {
        let catalog = CatalogStore::menu().into_shared();
        let listing = CategoryListing::new(catalog, Category::Starters);
        let soup = listing.cards()[0].clone();

        let detail = listing.choose(soup.id).unwrap();
        assert_eq!(DishDetail::TITLE, "Chef's Selection");
        assert_eq!(detail.record(), &soup);
        assert_eq!(detail.name(), "Tomato Soup");
        assert_eq!(detail.price(), "R85");
        assert_eq!(detail.description(), "A creamy and flavorful tomato soup.");
        assert_eq!(detail.image().map(ImageReference::as_str), Some("tomato-soup.png"));
    }
}
