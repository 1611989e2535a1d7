use crate::shared::frame::Frame;
use crate::video::domain::video_reader::VideoReader;

/// Decodes up to `max_frames` frames from an opened reader into memory.
///
/// Decoding stops at the first frame that fails; whatever was read before
/// it is kept.
pub fn buffer_frames(reader: &mut dyn VideoReader, max_frames: usize) -> Vec<Frame> {
    let mut frames = Vec::with_capacity(max_frames.min(1024));
    for result in reader.frames().take(max_frames) {
        match result {
            Ok(frame) => frames.push(frame),
            Err(e) => {
                log::warn!("Stopped reading after {} frame(s): {e}", frames.len());
                break;
            }
        }
    }
    frames
}
