use std::fmt;

/// A unique ID that can be used to refer to a dish within its category.
///
/// IDs are only unique per category; the same ID may appear in two different
/// categories.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, PartialOrd, Ord)]
pub struct DishId(pub u64);

impl fmt::Display for DishId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Where the photo of a dish comes from.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub enum ImageReference {
    /// An image shipped with the application, e.g. "tomato-soup.png".
    BundledAsset(String),
    /// A local URI returned by the device gallery.
    DeviceUri(String),
}

impl ImageReference {
    pub fn as_str(&self) -> &str {
        match self {
            ImageReference::BundledAsset(path) | ImageReference::DeviceUri(path) => path,
        }
    }
}

/// One item on the menu.
#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct DishRecord {
    pub id: DishId,
    /// Display name, e.g. "Tomato Soup".
    pub name: String,
    /// Price label shown as-is, e.g. "R85". Never parsed.
    pub price: String,
    pub description: String,
    /// None means no image is shown.
    pub image: Option<ImageReference>,
}

/// The fields of a dish that has not been given an ID yet.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct DishDraft {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: Option<ImageReference>,
}

impl DishDraft {
    pub fn new(
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        DishDraft {
            name: name.into(),
            price: price.into(),
            description: description.into(),
            image: None,
        }
    }

    pub fn with_image(mut self, image: ImageReference) -> Self {
        self.image = Some(image);
        self
    }

    pub(crate) fn into_record(self, id: DishId) -> DishRecord {
        let DishDraft { name, price, description, image } = self;
        DishRecord { id, name, price, description, image }
    }
}
