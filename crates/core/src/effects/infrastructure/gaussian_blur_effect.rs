use std::cell::RefCell;

use crate::effects::domain::face_effect::FaceEffect;
use crate::shared::frame::{Frame, CHANNELS};
use crate::shared::region::Region;

use super::gaussian;
use super::resample;

/// Gaussian-blurs the padded rectangle around each region.
///
/// The blur only reads pixels inside the padded rectangle, so edges
/// replicate the rectangle's own border rather than the surrounding frame.
pub struct GaussianBlurEffect {
    kernel: Vec<f32>,
    padding: u32,
    roi_buf: RefCell<Vec<u8>>,
    blur_temp: RefCell<Vec<f32>>,
}

impl GaussianBlurEffect {
    /// `kernel_size` must be a positive odd number.
    pub fn new(kernel_size: usize, padding: u32) -> Result<Self, String> {
        if kernel_size == 0 || kernel_size % 2 == 0 {
            return Err(format!(
                "Blur kernel size must be a positive odd integer, got {kernel_size}"
            ));
        }
        Ok(Self {
            kernel: gaussian::gaussian_kernel_1d(kernel_size),
            padding,
            roi_buf: RefCell::new(Vec::new()),
            blur_temp: RefCell::new(Vec::new()),
        })
    }
}

impl FaceEffect for GaussianBlurEffect {
    fn apply(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (fw, fh) = (frame.width(), frame.height());
        let data = frame.data_mut();
        let mut roi = self.roi_buf.borrow_mut();
        let mut temp = self.blur_temp.borrow_mut();

        for region in regions {
            let rect = region.padded(self.padding, fw, fh);
            if rect.is_empty() {
                continue;
            }
            let (rw, rh) = (rect.width as usize, rect.height as usize);

            resample::extract_roi(data, fw as usize, CHANNELS, &rect, &mut roi);
            gaussian::separable_gaussian_blur(&mut roi, rw, rh, CHANNELS, &self.kernel, &mut temp);
            resample::write_roi_back(data, &roi, fw as usize, CHANNELS, &rect);
        }

        Ok(())
    }
}
