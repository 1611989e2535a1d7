use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use cover_preview_core::annotation::infrastructure::opencv_annotator::OpencvAnnotator;
use cover_preview_core::detection::domain::face_classifier::FaceClassifier;
use cover_preview_core::detection::domain::face_detector::FaceDetector;
use cover_preview_core::detection::infrastructure::cascade_fallback_detector::CascadeFallbackDetector;
use cover_preview_core::detection::infrastructure::cascade_resolver;
use cover_preview_core::detection::infrastructure::lazy_detector::LazyDetector;
use cover_preview_core::detection::infrastructure::opencv_cascade_classifier::OpencvCascadeClassifier;
use cover_preview_core::detection::infrastructure::opencv_preprocessor::OpencvPreprocessor;
use cover_preview_core::pipeline::preview_effects_use_case::{
    PreviewEffectsUseCase, PreviewSettings,
};
use cover_preview_core::shared::constants::{
    CASCADE_FILES, DEFAULT_BLUR_KERNEL, DEFAULT_OUTPUT_DIR, DEFAULT_PADDING, DEFAULT_PIXEL_SIZE,
    MAX_BUFFERED_FRAMES,
};
use cover_preview_core::video::infrastructure::avatar_file_reader::AvatarFileReader;
use cover_preview_core::video::infrastructure::ffmpeg_reader::FfmpegReader;
use cover_preview_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Preview blur, pixelation and avatar face covers on sample frames of a video.
#[derive(Parser)]
#[command(name = "cover-preview")]
struct Cli {
    /// Input video file.
    video: PathBuf,

    /// Replacement image for the avatar effect (PNG alpha is honoured).
    avatar: PathBuf,

    /// Directory the preview images are written to.
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Directory holding the Haar cascade XML files.
    #[arg(long)]
    cascade_dir: Option<PathBuf>,

    /// Maximum number of frames read from the start of the video.
    #[arg(long, default_value_t = MAX_BUFFERED_FRAMES)]
    max_frames: usize,

    /// Pixels added around each face before applying an effect.
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    padding: u32,

    /// Gaussian blur kernel size (must be odd).
    #[arg(long, default_value_t = DEFAULT_BLUR_KERNEL)]
    blur_strength: usize,

    /// Block size for the pixelate effect.
    #[arg(long, default_value_t = DEFAULT_PIXEL_SIZE)]
    pixel_size: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    // Cascades are resolved, and possibly downloaded, only once the avatar
    // and video have loaded and the first frame needs detecting.
    let cascade_dir = cli.cascade_dir.clone();
    let detector = LazyDetector::new(Box::new(move || build_detector(cascade_dir.as_deref())));
    let settings = PreviewSettings {
        output_dir: cli.output_dir.clone(),
        max_frames: cli.max_frames,
        padding: cli.padding,
        blur_kernel: cli.blur_strength,
        pixel_size: cli.pixel_size,
    };

    let mut use_case = PreviewEffectsUseCase::new(
        Box::new(FfmpegReader::new()),
        Box::new(AvatarFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(detector),
        Box::new(OpencvAnnotator::new()),
        settings,
    );
    let report = use_case.execute(&cli.video, &cli.avatar)?;

    if report.used_manual_fallback {
        log::info!("No faces were detected; manual_*.png show the estimated position");
    }
    log::info!(
        "Done! {} images written to {}",
        report.written.len(),
        cli.output_dir.display()
    );
    Ok(())
}

fn build_detector(
    cascade_dir: Option<&Path>,
) -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
    let mut classifiers: Vec<Box<dyn FaceClassifier>> = Vec::with_capacity(CASCADE_FILES.len());
    for name in CASCADE_FILES {
        let path = cascade_resolver::resolve(name, cascade_dir, Some(Box::new(download_progress)))?;
        classifiers.push(Box::new(OpencvCascadeClassifier::load(&path)?));
    }
    Ok(Box::new(CascadeFallbackDetector::new(
        Box::new(OpencvPreprocessor::new()),
        classifiers,
    )?))
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.avatar.exists() {
        return Err(format!("Avatar image not found: {}", cli.avatar.display()).into());
    }
    if !cli.video.exists() {
        return Err(format!("Video file not found: {}", cli.video.display()).into());
    }
    if cli.blur_strength == 0 || cli.blur_strength % 2 == 0 {
        return Err(format!(
            "Blur strength must be a positive odd integer, got {}",
            cli.blur_strength
        )
        .into());
    }
    if cli.pixel_size == 0 {
        return Err("Pixel size must be at least 1".into());
    }
    if cli.max_frames == 0 {
        return Err("Max frames must be at least 1".into());
    }
    if let Some(dir) = &cli.cascade_dir {
        if !dir.is_dir() {
            return Err(format!("Cascade directory not found: {}", dir.display()).into());
        }
    }
    Ok(())
}

fn download_progress(downloaded: u64, total: u64) {
    if total > 0 {
        let pct = (downloaded as f64 / total as f64 * 100.0) as u32;
        eprint!("\rDownloading cascade... {pct}%");
    } else {
        eprint!("\rDownloading cascade... {downloaded} bytes");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("cover-preview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_mirror_preview_settings() {
        let cli = parse(&["in.webm", "avatar.png"]);
        let defaults = PreviewSettings::default();
        assert_eq!(cli.output_dir, defaults.output_dir);
        assert_eq!(cli.max_frames, defaults.max_frames);
        assert_eq!(cli.padding, defaults.padding);
        assert_eq!(cli.blur_strength, defaults.blur_kernel);
        assert_eq!(cli.pixel_size, defaults.pixel_size);
        assert!(cli.cascade_dir.is_none());
    }

    #[test]
    fn test_avatar_is_required() {
        assert!(Cli::try_parse_from(["cover-preview", "in.webm"]).is_err());
    }

    #[test]
    fn test_validate_rejects_even_blur() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("in.webm");
        let avatar = dir.path().join("avatar.png");
        std::fs::write(&video, b"").unwrap();
        std::fs::write(&avatar, b"").unwrap();

        let mut cli = parse(&[video.to_str().unwrap(), avatar.to_str().unwrap()]);
        assert!(validate(&cli).is_ok());

        cli.blur_strength = 50;
        assert!(validate(&cli).is_err());
        cli.blur_strength = 51;
        cli.pixel_size = 0;
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn test_validate_reports_avatar_before_video() {
        let cli = parse(&["/nonexistent/in.webm", "/nonexistent/avatar.png"]);
        let err = validate(&cli).unwrap_err();
        assert!(err.to_string().contains("Avatar image not found"));
    }

    #[test]
    fn test_validate_missing_video() {
        let dir = tempfile::tempdir().unwrap();
        let avatar = dir.path().join("avatar.png");
        std::fs::write(&avatar, b"").unwrap();

        let cli = parse(&["/nonexistent/in.webm", avatar.to_str().unwrap()]);
        let err = validate(&cli).unwrap_err();
        assert!(err.to_string().contains("Video file not found"));
    }

    #[test]
    fn test_missing_avatar_fails_before_cascades_resolve() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("in.webm");
        std::fs::write(&video, b"").unwrap();

        let detector = LazyDetector::new(Box::new(
            || -> Result<Box<dyn FaceDetector>, Box<dyn std::error::Error>> {
                panic!("cascades must not be resolved before the avatar loads")
            },
        ));
        let mut use_case = PreviewEffectsUseCase::new(
            Box::new(FfmpegReader::new()),
            Box::new(AvatarFileReader::new()),
            Box::new(ImageFileWriter::new()),
            Box::new(detector),
            Box::new(OpencvAnnotator::new()),
            PreviewSettings {
                output_dir: dir.path().join("out"),
                ..PreviewSettings::default()
            },
        );

        let err = use_case
            .execute(&video, &dir.path().join("missing.png"))
            .unwrap_err();
        assert!(err.to_string().contains("missing.png"));
    }
}
