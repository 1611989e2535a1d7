use crate::annotation::domain::frame_annotator::{FrameAnnotator, TextStyle};
use crate::effects::infrastructure::resample::resize_linear;
use crate::pipeline::variant_renderer::Variants;
use crate::shared::frame::{Frame, CHANNELS};

/// Caption position inside each tile, relative to the tile's top-left corner.
const CAPTION_X: u32 = 10;
const CAPTION_Y: u32 = 30;

/// Tiles the four variants into a captioned 2x2 mosaic at half scale.
///
/// Layout is original and blur on top, pixelate and avatar below. The
/// result is `2 * (w / 2)` by `2 * (h / 2)`; a side of one pixel keeps a
/// single-pixel tile.
pub fn build_grid(
    variants: &Variants,
    annotator: &dyn FrameAnnotator,
) -> Result<Frame, Box<dyn std::error::Error>> {
    let tile_w = (variants.original.width() / 2).max(1);
    let tile_h = (variants.original.height() / 2).max(1);

    let mut grid = Frame::blank(tile_w * 2, tile_h * 2, variants.original.index());
    let tiles = [
        (&variants.original, "Original", 0, 0),
        (&variants.blur, "Blur", tile_w, 0),
        (&variants.pixelate, "Pixelate", 0, tile_h),
        (&variants.avatar, "Avatar", tile_w, tile_h),
    ];

    for (frame, _, x, y) in &tiles {
        grid.paste(&shrink(frame, tile_w, tile_h), *x, *y);
    }
    for (_, caption, x, y) in &tiles {
        annotator.draw_text(
            &mut grid,
            caption,
            (x + CAPTION_X) as i32,
            (y + CAPTION_Y) as i32,
            &TextStyle::GRID_CAPTION,
        )?;
    }

    Ok(grid)
}

fn shrink(frame: &Frame, width: u32, height: u32) -> Frame {
    let data = resize_linear(
        frame.data(),
        frame.width() as usize,
        frame.height() as usize,
        CHANNELS,
        width as usize,
        height as usize,
    );
    Frame::new(data, width, height, frame.index())
}
