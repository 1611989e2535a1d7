/// Haar cascades tried in priority order: frontal, alternate frontal, profile.
pub const CASCADE_FILES: [&str; 3] = [
    "haarcascade_frontalface_default.xml",
    "haarcascade_frontalface_alt2.xml",
    "haarcascade_profileface.xml",
];
pub const CASCADE_BASE_URL: &str =
    "https://raw.githubusercontent.com/opencv/opencv/4.x/data/haarcascades";

/// Where distro and Homebrew OpenCV packages install their cascades.
pub const SYSTEM_CASCADE_DIRS: &[&str] = &[
    "/usr/share/opencv4/haarcascades",
    "/usr/local/share/opencv4/haarcascades",
    "/opt/homebrew/share/opencv4/haarcascades",
    "/usr/share/opencv/haarcascades",
];

pub const DETECT_SCALE_FACTOR: f64 = 1.05;
pub const DETECT_MIN_NEIGHBORS: i32 = 3;
pub const DETECT_MIN_SIZE: i32 = 30;

pub const MAX_BUFFERED_FRAMES: usize = 100;
pub const DEFAULT_PADDING: u32 = 50;
pub const DEFAULT_BLUR_KERNEL: usize = 51;
pub const DEFAULT_PIXEL_SIZE: u32 = 12;
/// The estimated-face preview uses coarser blocks and no padding.
pub const MANUAL_PIXEL_SIZE: u32 = 15;
pub const MANUAL_PADDING: u32 = 0;

pub const DEFAULT_OUTPUT_DIR: &str = "simulation_output";
pub const CHECK_FRAME_NAME: &str = "check_frame_0.png";
pub const COMPARISON_GRID_NAME: &str = "comparison_grid.png";
