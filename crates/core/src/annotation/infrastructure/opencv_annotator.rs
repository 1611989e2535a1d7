use opencv::core::{Point, Scalar};
use opencv::imgproc;

use crate::annotation::domain::frame_annotator::{Color, FrameAnnotator, TextStyle};
use crate::shared::frame::Frame;
use crate::shared::opencv_mat::{copy_back, frame_to_mat};
use crate::shared::region::Region;

/// Draws with OpenCV's `imgproc` primitives and the Hershey simplex font.
///
/// The frame is copied into a `Mat` as-is (RGB order), so colours are
/// passed through in RGB as well.
pub struct OpencvAnnotator;

impl OpencvAnnotator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OpencvAnnotator {
    fn default() -> Self {
        Self::new()
    }
}

fn scalar(color: Color) -> Scalar {
    Scalar::new(color.0 as f64, color.1 as f64, color.2 as f64, 0.0)
}

impl FrameAnnotator for OpencvAnnotator {
    fn draw_box(
        &self,
        frame: &mut Frame,
        region: &Region,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut mat = frame_to_mat(frame)?;
        imgproc::rectangle_points(
            &mut mat,
            Point::new(region.x, region.y),
            Point::new(region.x + region.width, region.y + region.height),
            scalar(color),
            thickness,
            imgproc::LINE_8,
            0,
        )?;
        copy_back(&mat, frame)?;
        Ok(())
    }

    fn draw_text(
        &self,
        frame: &mut Frame,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut mat = frame_to_mat(frame)?;
        imgproc::put_text(
            &mut mat,
            text,
            Point::new(x, y),
            imgproc::FONT_HERSHEY_SIMPLEX,
            style.scale,
            scalar(style.color),
            style.thickness,
            imgproc::LINE_8,
            false,
        )?;
        copy_back(&mat, frame)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_outline_drawn_in_rgb() {
        let mut frame = Frame::blank(40, 40, 0);
        OpencvAnnotator::new()
            .draw_box(&mut frame, &Region::new(10, 10, 20, 20), Color::BLUE, 2)
            .unwrap();

        assert_eq!(frame.pixel(10, 10), [0, 0, 255]);
        assert_eq!(frame.pixel(20, 10), [0, 0, 255]);
        assert_eq!(frame.pixel(20, 20), [0, 0, 0], "interior stays untouched");
        assert_eq!(frame.pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn test_text_marks_pixels_near_origin() {
        let mut frame = Frame::blank(200, 60, 0);
        OpencvAnnotator::new()
            .draw_text(&mut frame, "Face", 10, 40, &TextStyle::GRID_CAPTION)
            .unwrap();

        let yellow = (0..200u32)
            .flat_map(|x| (0..60u32).map(move |y| (x, y)))
            .filter(|&(x, y)| frame.pixel(x, y) == [255, 255, 0])
            .count();
        assert!(yellow > 0);
        assert_eq!(frame.pixel(190, 5), [0, 0, 0]);
    }

    #[test]
    fn test_text_above_frame_is_clipped_silently() {
        let mut frame = Frame::blank(50, 50, 0);
        OpencvAnnotator::new()
            .draw_text(&mut frame, "Face", 0, -10, &TextStyle::DETECTION)
            .unwrap();
    }

    #[test]
    fn test_frame_index_preserved() {
        let mut frame = Frame::blank(20, 20, 17);
        OpencvAnnotator::new()
            .draw_box(&mut frame, &Region::new(1, 1, 5, 5), Color::GREEN, 1)
            .unwrap();
        assert_eq!(frame.index(), 17);
    }
}
