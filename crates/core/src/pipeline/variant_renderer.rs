use std::path::{Path, PathBuf};

use crate::annotation::domain::frame_annotator::{Color, FrameAnnotator, TextStyle};
use crate::effects::domain::face_effect::FaceEffect;
use crate::effects::infrastructure::avatar_overlay_effect::AvatarOverlayEffect;
use crate::effects::infrastructure::gaussian_blur_effect::GaussianBlurEffect;
use crate::effects::infrastructure::pixelate_effect::PixelateEffect;
use crate::shared::avatar::Avatar;
use crate::shared::frame::Frame;
use crate::shared::region::Region;
use crate::video::domain::image_writer::ImageWriter;

const BOX_THICKNESS: i32 = 2;
/// Labels sit this far above the top edge of their box.
const LABEL_OFFSET: i32 = 10;

/// One frame rendered four ways.
#[derive(Clone, Debug)]
pub struct Variants {
    pub original: Frame,
    pub blur: Frame,
    pub pixelate: Frame,
    pub avatar: Frame,
}

impl Variants {
    /// Writes `{prefix}_{original,blur,pixelate,avatar}.png` into `dir`.
    pub fn write_all(
        &self,
        writer: &dyn ImageWriter,
        dir: &Path,
        prefix: &str,
    ) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
        let mut written = Vec::with_capacity(4);
        for (suffix, frame) in [
            ("original", &self.original),
            ("blur", &self.blur),
            ("pixelate", &self.pixelate),
            ("avatar", &self.avatar),
        ] {
            let path = dir.join(format!("{prefix}_{suffix}.png"));
            writer.write(&path, frame)?;
            written.push(path);
        }
        Ok(written)
    }
}

/// Applies the blur, pixelate and avatar effects to copies of a frame.
pub struct VariantRenderer {
    blur: Box<dyn FaceEffect>,
    pixelate: Box<dyn FaceEffect>,
    avatar: Box<dyn FaceEffect>,
}

impl VariantRenderer {
    pub fn new(
        blur: Box<dyn FaceEffect>,
        pixelate: Box<dyn FaceEffect>,
        avatar: Box<dyn FaceEffect>,
    ) -> Self {
        Self {
            blur,
            pixelate,
            avatar,
        }
    }

    /// Builds the standard effect trio sharing one padding value.
    pub fn with_effects(
        avatar: Avatar,
        padding: u32,
        blur_kernel: usize,
        pixel_size: u32,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(Self::new(
            Box::new(GaussianBlurEffect::new(blur_kernel, padding)?),
            Box::new(PixelateEffect::new(pixel_size, padding)?),
            Box::new(AvatarOverlayEffect::new(avatar, padding)),
        ))
    }

    /// The `original` variant is an untouched copy.
    pub fn render(
        &self,
        frame: &Frame,
        regions: &[Region],
    ) -> Result<Variants, Box<dyn std::error::Error>> {
        let mut blur = frame.clone();
        self.blur.apply(&mut blur, regions)?;
        let mut pixelate = frame.clone();
        self.pixelate.apply(&mut pixelate, regions)?;
        let mut avatar = frame.clone();
        self.avatar.apply(&mut avatar, regions)?;

        Ok(Variants {
            original: frame.clone(),
            blur,
            pixelate,
            avatar,
        })
    }
}

/// Outlines each detection in green and tags it "Face".
pub fn mark_detections(
    annotator: &dyn FrameAnnotator,
    frame: &mut Frame,
    regions: &[Region],
) -> Result<(), Box<dyn std::error::Error>> {
    for region in regions {
        annotator.draw_box(frame, region, Color::GREEN, BOX_THICKNESS)?;
        annotator.draw_text(
            frame,
            "Face",
            region.x,
            region.y - LABEL_OFFSET,
            &TextStyle::DETECTION,
        )?;
    }
    Ok(())
}

/// Outlines the heuristic face position in blue.
pub fn mark_estimate(
    annotator: &dyn FrameAnnotator,
    frame: &mut Frame,
    region: &Region,
) -> Result<(), Box<dyn std::error::Error>> {
    annotator.draw_box(frame, region, Color::BLUE, BOX_THICKNESS)?;
    annotator.draw_text(
        frame,
        "Estimated face area",
        region.x,
        region.y - LABEL_OFFSET,
        &TextStyle::ESTIMATE,
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Debug, PartialEq)]
    pub(crate) enum Mark {
        Box(Region, Color),
        Text(String, i32, i32, Color),
    }

    /// Records every call and leaves the frame untouched.
    #[derive(Clone, Default)]
    pub(crate) struct RecordingAnnotator {
        pub(crate) marks: Arc<Mutex<Vec<Mark>>>,
    }

    impl FrameAnnotator for RecordingAnnotator {
        fn draw_box(
            &self,
            _frame: &mut Frame,
            region: &Region,
            color: Color,
            _thickness: i32,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.marks.lock().unwrap().push(Mark::Box(*region, color));
            Ok(())
        }

        fn draw_text(
            &self,
            _frame: &mut Frame,
            text: &str,
            x: i32,
            y: i32,
            style: &TextStyle,
        ) -> Result<(), Box<dyn std::error::Error>> {
            self.marks
                .lock()
                .unwrap()
                .push(Mark::Text(text.to_string(), x, y, style.color));
            Ok(())
        }
    }

    struct FillEffect(u8);

    impl FaceEffect for FillEffect {
        fn apply(
            &self,
            frame: &mut Frame,
            regions: &[Region],
        ) -> Result<(), Box<dyn std::error::Error>> {
            if !regions.is_empty() {
                frame.data_mut().fill(self.0);
            }
            Ok(())
        }
    }

    struct RecordingWriter {
        paths: Arc<Mutex<Vec<PathBuf>>>,
    }

    impl ImageWriter for RecordingWriter {
        fn write(&self, path: &Path, _frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.paths.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    fn fill_renderer() -> VariantRenderer {
        VariantRenderer::new(
            Box::new(FillEffect(1)),
            Box::new(FillEffect(2)),
            Box::new(FillEffect(3)),
        )
    }

    #[test]
    fn test_each_variant_gets_its_own_effect() {
        let frame = Frame::blank(4, 4, 9);
        let variants = fill_renderer()
            .render(&frame, &[Region::new(0, 0, 2, 2)])
            .unwrap();

        assert_eq!(variants.original, frame);
        assert_eq!(variants.blur.pixel(3, 3), [1, 1, 1]);
        assert_eq!(variants.pixelate.pixel(3, 3), [2, 2, 2]);
        assert_eq!(variants.avatar.pixel(3, 3), [3, 3, 3]);
        assert_eq!(variants.avatar.index(), 9);
    }

    #[test]
    fn test_source_frame_is_not_mutated() {
        let frame = Frame::blank(4, 4, 0);
        let snapshot = frame.clone();
        fill_renderer()
            .render(&frame, &[Region::new(0, 0, 4, 4)])
            .unwrap();
        assert_eq!(frame, snapshot);
    }

    #[test]
    fn test_with_effects_rejects_even_kernel() {
        let avatar = Avatar::Rgb(image::RgbImage::new(2, 2));
        assert!(VariantRenderer::with_effects(avatar, 0, 50, 12).is_err());
    }

    #[test]
    fn test_with_effects_rejects_zero_pixel_size() {
        let avatar = Avatar::Rgb(image::RgbImage::new(2, 2));
        assert!(VariantRenderer::with_effects(avatar, 0, 51, 0).is_err());
    }

    #[test]
    fn test_write_all_names_files_by_prefix() {
        let paths = Arc::new(Mutex::new(Vec::new()));
        let writer = RecordingWriter {
            paths: paths.clone(),
        };
        let frame = Frame::blank(2, 2, 0);
        let variants = fill_renderer().render(&frame, &[]).unwrap();

        let written = variants
            .write_all(&writer, Path::new("out"), "frame_0025")
            .unwrap();

        let expected: Vec<PathBuf> = ["original", "blur", "pixelate", "avatar"]
            .iter()
            .map(|s| Path::new("out").join(format!("frame_0025_{s}.png")))
            .collect();
        assert_eq!(written, expected);
        assert_eq!(*paths.lock().unwrap(), expected);
    }

    #[test]
    fn test_mark_detections_boxes_and_labels_every_region() {
        let annotator = RecordingAnnotator::default();
        let mut frame = Frame::blank(100, 100, 0);
        let regions = [Region::new(10, 20, 30, 30), Region::new(50, 5, 20, 20)];

        mark_detections(&annotator, &mut frame, &regions).unwrap();

        let marks = annotator.marks.lock().unwrap();
        assert_eq!(
            *marks,
            vec![
                Mark::Box(regions[0], Color::GREEN),
                Mark::Text("Face".into(), 10, 10, Color::GREEN),
                Mark::Box(regions[1], Color::GREEN),
                Mark::Text("Face".into(), 50, -5, Color::GREEN),
            ]
        );
    }

    #[test]
    fn test_mark_estimate_is_blue() {
        let annotator = RecordingAnnotator::default();
        let mut frame = Frame::blank(100, 100, 0);
        let region = Region::estimated_face(100, 100);

        mark_estimate(&annotator, &mut frame, &region).unwrap();

        let marks = annotator.marks.lock().unwrap();
        assert_eq!(marks[0], Mark::Box(region, Color::BLUE));
        assert_eq!(
            marks[1],
            Mark::Text("Estimated face area".into(), 25, 2, Color::BLUE)
        );
    }
}
