use thiserror::Error;

/// Error type for catalog operations addressed by a category key.
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CatalogError {
    /// The key does not name one of the menu sections.
    #[error("Unknown menu category \"{0}\".")]
    UnknownCategory(String),
}

/// Error type for picking an image from the device gallery.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum PickError {
    #[error("Permission to access gallery is required!")]
    PermissionDenied,
    /// The gallery closed without the user backing out, e.g. the system
    /// dismissed it.
    #[error("The gallery was closed before an image was chosen.")]
    Cancelled,
}
