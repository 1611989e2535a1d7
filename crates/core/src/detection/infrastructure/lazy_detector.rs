use crate::detection::domain::face_detector::FaceDetector;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

pub type DetectorBuilder =
    Box<dyn FnOnce() -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> + Send>;

/// Defers building a detector until the first frame needs one.
///
/// A run that fails before its first detection never builds the detector.
/// A failed build keeps failing on every later call.
pub struct LazyDetector {
    builder: Option<DetectorBuilder>,
    inner: Option<Box<dyn FaceDetector>>,
    build_failed: bool,
}

impl LazyDetector {
    pub fn new(builder: DetectorBuilder) -> Self {
        Self {
            builder: Some(builder),
            inner: None,
            build_failed: false,
        }
    }

    fn detector(&mut self) -> Result<&mut Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
        if self.inner.is_none() {
            let builder = match self.builder.take() {
                Some(b) => b,
                None if self.build_failed => return Err("face detector failed to build".into()),
                None => return Err("face detector builder missing".into()),
            };
            match builder() {
                Ok(detector) => self.inner = Some(detector),
                Err(e) => {
                    self.build_failed = true;
                    return Err(e);
                }
            }
        }
        self.inner
            .as_mut()
            .ok_or_else(|| "face detector unavailable".into())
    }
}

impl FaceDetector for LazyDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        self.detector()?.detect(frame)
    }
}
