//! Buffer-level helpers shared by the effects and the comparison grid.
//!
//! All buffers are packed 8-bit pixels with `channels` bytes per pixel.

use crate::shared::region::Region;

/// Copy the pixels under `rect` out of frame data into a reusable buffer.
pub fn extract_roi(data: &[u8], frame_width: usize, channels: usize, rect: &Region, roi: &mut Vec<u8>) {
    let (x, y) = (rect.x as usize, rect.y as usize);
    let (w, h) = (rect.width as usize, rect.height as usize);
    roi.resize(w * h * channels, 0);
    for row in 0..h {
        let src_offset = ((y + row) * frame_width + x) * channels;
        let dst_offset = row * w * channels;
        roi[dst_offset..dst_offset + w * channels]
            .copy_from_slice(&data[src_offset..src_offset + w * channels]);
    }
}

/// Write an ROI buffer back into frame data at `rect`.
pub fn write_roi_back(data: &mut [u8], roi: &[u8], frame_width: usize, channels: usize, rect: &Region) {
    let (x, y) = (rect.x as usize, rect.y as usize);
    let (w, h) = (rect.width as usize, rect.height as usize);
    for row in 0..h {
        let dst_offset = ((y + row) * frame_width + x) * channels;
        let src_offset = row * w * channels;
        data[dst_offset..dst_offset + w * channels]
            .copy_from_slice(&roi[src_offset..src_offset + w * channels]);
    }
}

/// Bilinear resize with pixel-centre alignment (OpenCV's `INTER_LINEAR`).
///
/// Downscaling samples only the two nearest source pixels per axis with no
/// area filtering, which the pixelate block colours depend on.
/// `imageops::resize` with `Triangle` averages over the whole footprint and
/// gives different blocks.
pub fn resize_linear(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; target_w * target_h * channels];
    if width == 0 || height == 0 {
        return out;
    }

    let scale_x = width as f32 / target_w as f32;
    let scale_y = height as f32 / target_h as f32;

    for y in 0..target_h {
        let (y0, y1, fy) = source_span(y, scale_y, height);
        for x in 0..target_w {
            let (x0, x1, fx) = source_span(x, scale_x, width);
            for c in 0..channels {
                let v00 = data[(y0 * width + x0) * channels + c] as f32;
                let v10 = data[(y0 * width + x1) * channels + c] as f32;
                let v01 = data[(y1 * width + x0) * channels + c] as f32;
                let v11 = data[(y1 * width + x1) * channels + c] as f32;

                let val = v00 * (1.0 - fx) * (1.0 - fy)
                    + v10 * fx * (1.0 - fy)
                    + v01 * (1.0 - fx) * fy
                    + v11 * fx * fy;
                out[(y * target_w + x) * channels + c] = val.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}

/// Source sample pair and weight for destination coordinate `d`.
fn source_span(d: usize, scale: f32, len: usize) -> (usize, usize, f32) {
    let src = ((d as f32 + 0.5) * scale - 0.5).max(0.0);
    let i0 = (src.floor() as usize).min(len - 1);
    let i1 = (i0 + 1).min(len - 1);
    let frac = if i0 == i1 { 0.0 } else { src - i0 as f32 };
    (i0, i1, frac)
}

/// Nearest-neighbour resize (OpenCV's `INTER_NEAREST`): every destination
/// pixel copies source pixel `floor(d * src / dst)`.
pub fn resize_nearest(
    data: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    target_w: usize,
    target_h: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; target_w * target_h * channels];
    if width == 0 || height == 0 {
        return out;
    }

    for y in 0..target_h {
        let sy = (y * height / target_h).min(height - 1);
        for x in 0..target_w {
            let sx = (x * width / target_w).min(width - 1);
            let src = (sy * width + sx) * channels;
            let dst = (y * target_w + x) * channels;
            out[dst..dst + channels].copy_from_slice(&data[src..src + channels]);
        }
    }

    out
}
