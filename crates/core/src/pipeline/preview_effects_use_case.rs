use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::annotation::domain::frame_annotator::FrameAnnotator;
use crate::detection::domain::face_detector::FaceDetector;
use crate::pipeline::comparison_grid::build_grid;
use crate::pipeline::frame_buffer::buffer_frames;
use crate::pipeline::sample_plan::{middle_index, sample_indices};
use crate::pipeline::variant_renderer::{mark_detections, mark_estimate, VariantRenderer};
use crate::shared::constants::{
    CHECK_FRAME_NAME, COMPARISON_GRID_NAME, DEFAULT_BLUR_KERNEL, DEFAULT_OUTPUT_DIR,
    DEFAULT_PADDING, DEFAULT_PIXEL_SIZE, MANUAL_PADDING, MANUAL_PIXEL_SIZE, MAX_BUFFERED_FRAMES,
};
use crate::shared::region::Region;
use crate::video::domain::avatar_reader::AvatarReader;
use crate::video::domain::image_writer::ImageWriter;
use crate::video::domain::video_reader::VideoReader;

#[derive(Error, Debug)]
pub enum PreviewError {
    #[error("could not load avatar image {path}: {reason}")]
    AvatarLoad { path: PathBuf, reason: String },
    #[error("could not open video {path}: {reason}")]
    VideoOpen { path: PathBuf, reason: String },
    #[error("no frames could be read from {path}")]
    NoFrames { path: PathBuf },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewSettings {
    pub output_dir: PathBuf,
    pub max_frames: usize,
    /// Margin added around detections for the per-sample and grid renders.
    pub padding: u32,
    pub blur_kernel: usize,
    pub pixel_size: u32,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            max_frames: MAX_BUFFERED_FRAMES,
            padding: DEFAULT_PADDING,
            blur_kernel: DEFAULT_BLUR_KERNEL,
            pixel_size: DEFAULT_PIXEL_SIZE,
        }
    }
}

/// Face count for one sampled frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleDetections {
    pub frame_index: usize,
    pub faces: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PreviewReport {
    pub frames_read: usize,
    pub samples: Vec<SampleDetections>,
    pub used_manual_fallback: bool,
    /// Region the comparison grid was rendered around.
    pub grid_region: Region,
    pub written: Vec<PathBuf>,
}

/// Renders blur, pixelate and avatar previews for a handful of frames.
///
/// Buffers the start of the video, detects faces on the quartile frames,
/// writes four variants for each frame with faces, falls back to an
/// estimated face position when nothing is found, and finishes with a
/// 2x2 comparison grid of the middle frame.
pub struct PreviewEffectsUseCase {
    reader: Box<dyn VideoReader>,
    avatar_reader: Box<dyn AvatarReader>,
    image_writer: Box<dyn ImageWriter>,
    detector: Box<dyn FaceDetector>,
    annotator: Box<dyn FrameAnnotator>,
    settings: PreviewSettings,
}

impl PreviewEffectsUseCase {
    pub fn new(
        reader: Box<dyn VideoReader>,
        avatar_reader: Box<dyn AvatarReader>,
        image_writer: Box<dyn ImageWriter>,
        detector: Box<dyn FaceDetector>,
        annotator: Box<dyn FrameAnnotator>,
        settings: PreviewSettings,
    ) -> Self {
        Self {
            reader,
            avatar_reader,
            image_writer,
            detector,
            annotator,
            settings,
        }
    }

    pub fn execute(
        &mut self,
        video_path: &Path,
        avatar_path: &Path,
    ) -> Result<PreviewReport, Box<dyn std::error::Error>> {
        let avatar = self
            .avatar_reader
            .read(avatar_path)
            .map_err(|e| PreviewError::AvatarLoad {
                path: avatar_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        log::info!("Avatar loaded: {}x{}", avatar.width(), avatar.height());

        let renderer = VariantRenderer::with_effects(
            avatar.clone(),
            self.settings.padding,
            self.settings.blur_kernel,
            self.settings.pixel_size,
        )?;

        let metadata = self
            .reader
            .open(video_path)
            .map_err(|e| PreviewError::VideoOpen {
                path: video_path.to_path_buf(),
                reason: e.to_string(),
            })?;
        let fps = metadata.normalized_fps();
        if fps != metadata.fps {
            log::info!("Reported fps {:.1} is implausible, assuming {fps}", metadata.fps);
        }
        log::info!(
            "Video: {}x{} @ {fps:.2} fps, {} frames ({})",
            metadata.width,
            metadata.height,
            metadata.total_frames,
            metadata.codec
        );

        let frames = buffer_frames(self.reader.as_mut(), self.settings.max_frames);
        self.reader.close();
        log::info!("Read {} frames", frames.len());
        if frames.is_empty() {
            return Err(PreviewError::NoFrames {
                path: video_path.to_path_buf(),
            }
            .into());
        }

        let out_dir = self.settings.output_dir.clone();
        let writer = self.image_writer.as_ref();
        let annotator = self.annotator.as_ref();
        let mut written = Vec::new();

        let check_path = out_dir.join(CHECK_FRAME_NAME);
        writer.write(&check_path, &frames[0])?;
        log::info!("Saved first frame to {}", check_path.display());
        written.push(check_path);

        let indices = sample_indices(frames.len());
        log::info!("Processing sample frames: {indices:?}");

        let mut samples = Vec::with_capacity(indices.len());
        let mut first_face: Option<Region> = None;
        for idx in indices {
            let frame = &frames[idx];
            let faces = self.detector.detect(frame)?;
            log::info!("Frame {idx}: found {} face(s)", faces.len());
            samples.push(SampleDetections {
                frame_index: idx,
                faces: faces.len(),
            });

            let Some(&first) = faces.first() else {
                continue;
            };
            first_face.get_or_insert(first);

            let mut variants = renderer.render(frame, &faces)?;
            mark_detections(annotator, &mut variants.original, &faces)?;
            written.extend(variants.write_all(writer, &out_dir, &format!("frame_{idx:04}"))?);
            log::info!("Saved 4 versions for frame {idx}");
        }

        let middle = &frames[middle_index(frames.len())];
        let used_manual_fallback = first_face.is_none();
        let grid_region = match first_face {
            Some(region) => region,
            None => {
                log::warn!("No faces detected; previewing an estimated face position instead");
                let estimate = Region::estimated_face(middle.width(), middle.height());
                let manual = VariantRenderer::with_effects(
                    avatar,
                    MANUAL_PADDING,
                    self.settings.blur_kernel,
                    MANUAL_PIXEL_SIZE,
                )?;
                let mut variants = manual.render(middle, &[estimate])?;
                mark_estimate(annotator, &mut variants.original, &estimate)?;
                written.extend(variants.write_all(writer, &out_dir, "manual")?);
                log::info!("Saved manual preview around {estimate:?}");
                estimate
            }
        };

        let grid_variants = renderer.render(middle, &[grid_region])?;
        let grid = build_grid(&grid_variants, annotator)?;
        let grid_path = out_dir.join(COMPARISON_GRID_NAME);
        writer.write(&grid_path, &grid)?;
        log::info!("Saved {}", grid_path.display());
        written.push(grid_path);

        Ok(PreviewReport {
            frames_read: frames.len(),
            samples,
            used_manual_fallback,
            grid_region,
            written,
        })
    }
}
