use std::path::PathBuf;

/// Frame rates above this are treated as a container glitch.
const MAX_PLAUSIBLE_FPS: f64 = 60.0;
const FALLBACK_FPS: f64 = 30.0;

#[derive(Clone, Debug, PartialEq)]
pub struct VideoMetadata {
    pub width: u32,
    pub height: u32,
    pub fps: f64,
    pub total_frames: usize,
    pub codec: String,
    pub source_path: Option<PathBuf>,
}

impl VideoMetadata {
    /// Reported fps, or 30 when the container claims something above 60
    /// (common with WebM streams that carry a 1000 Hz timebase).
    pub fn normalized_fps(&self) -> f64 {
        if self.fps > MAX_PLAUSIBLE_FPS {
            FALLBACK_FPS
        } else {
            self.fps
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn meta(fps: f64) -> VideoMetadata {
        VideoMetadata {
            width: 720,
            height: 1280,
            fps,
            total_frames: 383,
            codec: "vp9".to_string(),
            source_path: Some(PathBuf::from("/tmp/clip.webm")),
        }
    }

    #[test]
    fn test_construction() {
        let m = meta(29.97);
        assert_eq!(m.width, 720);
        assert_eq!(m.height, 1280);
        assert_eq!(m.total_frames, 383);
        assert_eq!(m.codec, "vp9");
        assert_eq!(m.source_path, Some(PathBuf::from("/tmp/clip.webm")));
    }

    #[rstest]
    #[case(24.0, 24.0)]
    #[case(60.0, 60.0)]
    #[case(60.5, 30.0)]
    #[case(1000.0, 30.0)]
    #[case(0.0, 0.0)]
    fn test_normalized_fps(#[case] reported: f64, #[case] expected: f64) {
        assert_relative_eq!(meta(reported).normalized_fps(), expected);
    }
}
