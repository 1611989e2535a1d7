use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// Domain interface for covering face regions within a frame.
///
/// Implementations pad and clamp each region themselves and modify the
/// frame in place; pixels outside the padded regions are left untouched.
pub trait FaceEffect: Send {
    fn apply(&self, frame: &mut Frame, regions: &[Region])
        -> Result<(), Box<dyn std::error::Error>>;
}
