use std::error::Error;

/// A single text view layered over the camera preview.
pub trait DeviceDisplay: Send + Sync {
    /// Bring up the display surface.
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Remove all text from the display.
    fn clear(&mut self) -> Result<(), Box<dyn Error + Send + Sync>>;

    /// Replace the displayed text. Lines are separated by `\n`.
    fn write_text(&mut self, text: &str) -> Result<(), Box<dyn Error + Send + Sync>>;
}
