use ndarray::s;

use crate::effects::domain::face_effect::FaceEffect;
use crate::shared::avatar::Avatar;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Stretches the avatar over the padded rectangle around each region.
///
/// RGBA avatars are alpha-composited onto the frame; RGB avatars overwrite
/// the rectangle outright.
pub struct AvatarOverlayEffect {
    avatar: Avatar,
    padding: u32,
}

impl AvatarOverlayEffect {
    pub fn new(avatar: Avatar, padding: u32) -> Self {
        Self { avatar, padding }
    }
}

impl FaceEffect for AvatarOverlayEffect {
    fn apply(
        &self,
        frame: &mut Frame,
        regions: &[Region],
    ) -> Result<(), Box<dyn std::error::Error>> {
        let (fw, fh) = (frame.width(), frame.height());

        for region in regions {
            let rect = region.padded(self.padding, fw, fh);
            if rect.is_empty() {
                continue;
            }
            let (x, y) = (rect.x as usize, rect.y as usize);
            let (w, h) = (rect.width as usize, rect.height as usize);

            let resized = self.avatar.resized(w as u32, h as u32);
            let mut view = frame.as_ndarray_mut();
            let mut roi = view.slice_mut(s![y..y + h, x..x + w, ..]);

            match &resized {
                Avatar::Rgb(img) => {
                    for (px, py, pixel) in img.enumerate_pixels() {
                        let (row, col) = (py as usize, px as usize);
                        for c in 0..3 {
                            roi[[row, col, c]] = pixel.0[c];
                        }
                    }
                }
                Avatar::Rgba(img) => {
                    for (px, py, pixel) in img.enumerate_pixels() {
                        let (row, col) = (py as usize, px as usize);
                        let alpha = pixel.0[3] as f32 / 255.0;
                        for c in 0..3 {
                            let background = roi[[row, col, c]] as f32;
                            let blended = alpha * pixel.0[c] as f32 + (1.0 - alpha) * background;
                            roi[[row, col, c]] = blended.clamp(0.0, 255.0) as u8;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}
