use tracing::{info, warn};

use crate::{
    data::{Category, DishDraft, DishId, DishRecord, ImageReference, SharedCatalog},
    error::{CatalogError, PickError},
};

use super::picker::MediaPicker;

/// The chef control panel: a form for new dishes plus removal of existing
/// ones.
pub struct ChefPanel {
    catalog: SharedCatalog,
    name: String,
    price: String,
    description: String,
    image: Option<ImageReference>,
    /// A message for the user, set when picking an image fails.
    notice: Option<String>,
}

impl ChefPanel {
    pub const TITLE: &'static str = "Chef's Control Panel";

    pub fn new(catalog: SharedCatalog) -> Self {
        Self {
            catalog,
            name: String::new(),
            price: String::new(),
            description: String::new(),
            image: None,
            notice: None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The image that will be attached to the next dish, shown as a preview.
    pub fn image(&self) -> Option<&ImageReference> {
        self.image.as_ref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Lets the user pick an image from the gallery for the next dish. If
    /// permission is denied or the gallery fails, the form keeps its current
    /// image and a notice is shown. Backing out of the gallery changes
    /// nothing.
    pub fn pick_image<P: MediaPicker>(&mut self, picker: &mut P) -> Result<(), PickError> {
        if !picker.request_permission() {
            let err = PickError::PermissionDenied;
            warn!("gallery permission denied");
            self.notice = Some(err.to_string());
            return Err(err);
        }
        self.notice = None;

        let picked = picker.launch().inspect_err(|err| {
            warn!(%err, "gallery closed without a pick");
            self.notice = Some(err.to_string());
        })?;
        if let Some(uri) = picked {
            info!(%uri, "picked dish image");
            self.image = Some(ImageReference::DeviceUri(uri));
        }
        Ok(())
    }

    /// Adds the dish described by the form to the category and clears the
    /// form.
    pub fn add_dish(&mut self, category: Category) -> DishRecord {
        let draft = self.take_draft();
        self.catalog.borrow_mut().add(category, draft)
    }

    /// Same as `add_dish`, for a category given by its key. On an unknown key
    /// the form is left as it was.
    pub fn add_dish_to(&mut self, key: &str) -> Result<DishRecord, CatalogError> {
        let category: Category = key.parse()?;
        Ok(self.add_dish(category))
    }

    pub fn remove_dish(&mut self, category: Category, id: DishId) -> Option<DishRecord> {
        self.catalog.borrow_mut().remove(category, id)
    }

    /// The dishes of the category as currently held by the store.
    pub fn dishes(&self, category: Category) -> Vec<DishRecord> {
        self.catalog.borrow().list(category).to_vec()
    }

    fn take_draft(&mut self) -> DishDraft {
        self.notice = None;
        DishDraft {
            name: std::mem::take(&mut self.name),
            price: std::mem::take(&mut self.price),
            description: std::mem::take(&mut self.description),
            image: self.image.take(),
        }
    }
}
