use crate::detection::domain::gray_image::GrayImage;
use crate::shared::region::Region;

/// A single pre-trained sliding-window classifier (e.g. one Haar cascade).
///
/// Receives an already equalized grayscale image; detection parameters are
/// the implementation's concern.
pub trait FaceClassifier: Send {
    /// Short name used in log output.
    fn name(&self) -> &str;

    fn detect(&mut self, gray: &GrayImage) -> Result<Vec<Region>, Box<dyn std::error::Error>>;
}
