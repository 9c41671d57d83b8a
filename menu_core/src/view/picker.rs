use crate::error::PickError;

/// Access to the device photo gallery.
pub trait MediaPicker {
    /// Asks the user for gallery access. Returns whether it was granted.
    fn request_permission(&mut self) -> bool;

    /// Opens the gallery and returns the local URI of the chosen image, or
    /// None if the user backed out without choosing.
    fn launch(&mut self) -> Result<Option<String>, PickError>;
}
