use crate::shared::frame::Frame;
use crate::shared::region::Region;

/// An RGB colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u8, pub u8, pub u8);

impl Color {
    pub const GREEN: Color = Color(0, 255, 0);
    pub const BLUE: Color = Color(0, 0, 255);
    pub const YELLOW: Color = Color(255, 255, 0);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    pub color: Color,
    pub scale: f64,
    pub thickness: i32,
}

impl TextStyle {
    /// "Face" tag above each detection.
    pub const DETECTION: TextStyle = TextStyle {
        color: Color::GREEN,
        scale: 0.6,
        thickness: 2,
    };
    /// "Estimated face area" tag on the manual preview.
    pub const ESTIMATE: TextStyle = TextStyle {
        color: Color::BLUE,
        scale: 0.5,
        thickness: 2,
    };
    /// Tile captions on the comparison grid.
    pub const GRID_CAPTION: TextStyle = TextStyle {
        color: Color::YELLOW,
        scale: 0.8,
        thickness: 2,
    };
}

/// Draws outlines and text onto frames in place.
pub trait FrameAnnotator: Send {
    fn draw_box(
        &self,
        frame: &mut Frame,
        region: &Region,
        color: Color,
        thickness: i32,
    ) -> Result<(), Box<dyn std::error::Error>>;

    /// `(x, y)` is the bottom-left corner of the text baseline.
    fn draw_text(
        &self,
        frame: &mut Frame,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
