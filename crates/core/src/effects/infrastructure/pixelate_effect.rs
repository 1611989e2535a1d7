use std::cell::RefCell;

use crate::effects::domain::face_effect::FaceEffect;
use crate::shared::frame::{Frame, CHANNELS};
use crate::shared::region::Region;

use super::resample;

/// Replaces the padded rectangle around each region with coarse blocks.
///
/// The rectangle is shrunk to `max(1, w / pixel_size) x max(1, h / pixel_size)`
/// with linear filtering, then blown back up with nearest-neighbour sampling.
pub struct PixelateEffect {
    pixel_size: u32,
    padding: u32,
    roi_buf: RefCell<Vec<u8>>,
}

impl PixelateEffect {
    pub fn new(pixel_size: u32, padding: u32) -> Result<Self, String> {
        if pixel_size == 0 {
            return Err("Pixel size must be at least 1".to_string());
        }
        Ok(Self {
            pixel_size,
            padding,
            roi_buf: RefCell::new(Vec::new()),
        })
    }

    /// Dimensions of the intermediate low-resolution image.
    pub fn block_grid(&self, width: usize, height: usize) -> (usize, usize) {
        let p = self.pixel_size as usize;
        ((width / p).max(1), (height / p).max(1))
    }
}

impl FaceEffect for PixelateEffect {
    fn apply(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (fw, fh) = (frame.width(), frame.height());
        let data = frame.data_mut();
        let mut roi = self.roi_buf.borrow_mut();

        for region in regions {
            let rect = region.padded(self.padding, fw, fh);
            if rect.is_empty() {
                continue;
            }
            let (rw, rh) = (rect.width as usize, rect.height as usize);
            let (sw, sh) = self.block_grid(rw, rh);

            resample::extract_roi(data, fw as usize, CHANNELS, &rect, &mut roi);
            let small = resample::resize_linear(&roi, rw, rh, CHANNELS, sw, sh);
            let blocky = resample::resize_nearest(&small, sw, sh, CHANNELS, rw, rh);
            resample::write_roi_back(data, &blocky, fw as usize, CHANNELS, &rect);
        }

        Ok(())
    }
}
