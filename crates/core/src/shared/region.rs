/// An axis-aligned face rectangle in frame pixel coordinates.
///
/// Produced by a detector or by the manual-fallback estimate. Regions carry
/// no identity; every frame is detected from scratch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre-biased guess for a single subject in a portrait video:
    /// `(w/4, h/8, w/2, h/2)`.
    pub fn estimated_face(frame_width: u32, frame_height: u32) -> Self {
        let (fw, fh) = (frame_width as i32, frame_height as i32);
        Self::new(fw / 4, fh / 8, fw / 2, fh / 2)
    }

    /// Grows the region by `padding` on every side and clamps it to the frame.
    ///
    /// Both edges are clamped independently, so a region clipped on the left
    /// loses width rather than shifting right. A region wholly outside the
    /// frame comes back with zero width or height.
    pub fn padded(&self, padding: u32, frame_width: u32, frame_height: u32) -> Region {
        // Widened so any u32 padding around any i32 region cannot overflow.
        let p = i64::from(padding);
        let fw = i64::from(frame_width).min(i64::from(i32::MAX));
        let fh = i64::from(frame_height).min(i64::from(i32::MAX));
        let (x, y) = (i64::from(self.x), i64::from(self.y));

        let x0 = (x - p).clamp(0, fw);
        let y0 = (y - p).clamp(0, fh);
        let x1 = (x + i64::from(self.width) + p).clamp(0, fw);
        let y1 = (y + i64::from(self.height) + p).clamp(0, fh);

        Region::new(
            x0 as i32,
            y0 as i32,
            (x1 - x0).max(0) as i32,
            (y1 - y0).max(0) as i32,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[cfg(test)]
    pub(crate) fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}
