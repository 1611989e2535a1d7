use ndarray::{s, ArrayView3, ArrayViewMut3};

/// Bytes per pixel. Frames are always packed RGB.
pub const CHANNELS: usize = 3;

/// A single decoded video frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; effects and detectors
/// work on this packed layout directly.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
            index,
        }
    }

    /// A black frame of the given size.
    pub fn blank(width: u32, height: u32, index: usize) -> Self {
        Self::new(
            vec![0u8; width as usize * height as usize * CHANNELS],
            width,
            height,
            index,
        )
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    #[cfg(test)]
    pub(crate) fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    pub fn as_ndarray_mut(&mut self) -> ArrayViewMut3<'_, u8> {
        ArrayViewMut3::from_shape(self.shape(), &mut self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Copies `other` into this frame with its top-left corner at `(x, y)`.
    ///
    /// Whatever falls outside this frame is dropped.
    pub fn paste(&mut self, other: &Frame, x: u32, y: u32) {
        if x >= self.width || y >= self.height {
            return;
        }
        let w = other.width.min(self.width - x) as usize;
        let h = other.height.min(self.height - y) as usize;
        let (x, y) = (x as usize, y as usize);
        let src = other.as_ndarray();
        self.as_ndarray_mut()
            .slice_mut(s![y..y + h, x..x + w, ..])
            .assign(&src.slice(s![..h, ..w, ..]));
    }

    fn shape(&self) -> (usize, usize, usize) {
        (self.height as usize, self.width as usize, CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Frame {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[x as u8, y as u8, 7]);
            }
        }
        Frame::new(data, width, height, 0)
    }

    #[test]
    fn test_construction_and_accessors() {
        let data = vec![0u8; 12]; // 2x2x3
        let frame = Frame::new(data.clone(), 2, 2, 5);
        assert_eq!(frame.width(), 2);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.index(), 5);
        assert_eq!(frame.data(), &data[..]);
    }

    #[test]
    fn test_clone_is_independent() {
        let frame = Frame::new(vec![100u8; 12], 2, 2, 0);
        let mut cloned = frame.clone();
        cloned.data_mut()[0] = 0;
        assert_eq!(frame.data()[0], 100);
        assert_eq!(cloned.data()[0], 0);
    }

    #[test]
    #[should_panic(expected = "data length must equal width * height * 3")]
    fn test_mismatched_data_length_panics_in_debug() {
        Frame::new(vec![0u8; 10], 2, 2, 0);
    }

    #[test]
    fn test_blank_is_black() {
        let frame = Frame::blank(4, 3, 9);
        assert_eq!(frame.data().len(), 36);
        assert!(frame.data().iter().all(|&v| v == 0));
        assert_eq!(frame.index(), 9);
    }

    #[test]
    fn test_as_ndarray_shape() {
        let frame = Frame::new(vec![0u8; 24], 4, 2, 0);
        assert_eq!(frame.as_ndarray().shape(), &[2, 4, 3]);
    }

    #[test]
    fn test_pixel_reads_row_major() {
        let frame = gradient(5, 4);
        assert_eq!(frame.pixel(3, 2), [3, 2, 7]);
    }

    #[test]
    fn test_paste_writes_at_offset() {
        let mut canvas = Frame::blank(6, 6, 0);
        let patch = Frame::new(vec![200u8; 2 * 2 * 3], 2, 2, 0);
        canvas.paste(&patch, 3, 1);
        assert_eq!(canvas.pixel(3, 1), [200, 200, 200]);
        assert_eq!(canvas.pixel(4, 2), [200, 200, 200]);
        assert_eq!(canvas.pixel(2, 1), [0, 0, 0]);
        assert_eq!(canvas.pixel(3, 3), [0, 0, 0]);
    }

    #[test]
    fn test_paste_clips_at_edges() {
        let mut canvas = Frame::blank(4, 4, 0);
        let patch = Frame::new(vec![50u8; 3 * 3 * 3], 3, 3, 0);
        canvas.paste(&patch, 2, 2);
        assert_eq!(canvas.pixel(3, 3), [50, 50, 50]);
        canvas.paste(&patch, 10, 10);
    }
}
