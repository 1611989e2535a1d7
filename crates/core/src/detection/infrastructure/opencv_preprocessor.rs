use opencv::core::Mat;
use opencv::imgproc;
use opencv::prelude::*;

use crate::detection::domain::frame_preprocessor::FramePreprocessor;
use crate::detection::domain::gray_image::GrayImage;
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::frame_to_mat;

/// Grayscale conversion followed by histogram equalization, both in OpenCV.
pub struct OpencvPreprocessor;

impl OpencvPreprocessor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpencvPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl FramePreprocessor for OpencvPreprocessor {
    fn prepare(&self, frame: &Frame) -> Result<GrayImage, Box<dyn std::error::Error>> {
        let rgb = frame_to_mat(frame)?;

        let mut gray = Mat::default();
        imgproc::cvt_color_def(&rgb, &mut gray, imgproc::COLOR_RGB2GRAY)?;

        let mut equalized = Mat::default();
        imgproc::equalize_hist(&gray, &mut equalized)?;

        Ok(GrayImage::new(
            equalized.data_bytes()?.to_vec(),
            frame.width(),
            frame.height(),
        ))
    }
}
