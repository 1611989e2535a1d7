use crate::detection::domain::face_classifier::FaceClassifier;
use crate::detection::domain::face_detector::FaceDetector;
use crate::detection::domain::frame_preprocessor::FramePreprocessor;
use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Runs classifiers in priority order and returns the first non-empty result.
///
/// The frame is preprocessed once; every classifier sees the same image.
/// Detections are returned as the winning classifier produced them,
/// overlaps included.
pub struct CascadeFallbackDetector {
    preprocessor: Box<dyn FramePreprocessor>,
    classifiers: Vec<Box<dyn FaceClassifier>>,
}

impl CascadeFallbackDetector {
    pub fn new(
        preprocessor: Box<dyn FramePreprocessor>,
        classifiers: Vec<Box<dyn FaceClassifier>>,
    ) -> Result<Self, &'static str> {
        if classifiers.is_empty() {
            return Err("at least one classifier is required");
        }
        Ok(Self {
            preprocessor,
            classifiers,
        })
    }
}

impl FaceDetector for CascadeFallbackDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let gray = self.preprocessor.prepare(frame)?;

        for classifier in self.classifiers.iter_mut() {
            let faces = classifier.detect(&gray)?;
            if !faces.is_empty() {
                log::debug!(
                    "{} found {} face(s) in frame {}",
                    classifier.name(),
                    faces.len(),
                    frame.index()
                );
                return Ok(faces);
            }
        }

        Ok(Vec::new())
    }
}
