use crate::detection::domain::gray_image::GrayImage;
use crate::shared::frame::Frame;

/// Turns a colour frame into the image the classifiers scan.
pub trait FramePreprocessor: Send {
    fn prepare(&self, frame: &Frame) -> Result<GrayImage, Box<dyn std::error::Error>>;
}
