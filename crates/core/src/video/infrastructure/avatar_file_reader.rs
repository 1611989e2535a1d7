use std::path::Path;

use crate::shared::avatar::Avatar;
use crate::video::domain::avatar_reader::AvatarReader;

/// Decodes an avatar image from disk with the `image` crate.
///
/// Images whose colour type carries alpha are kept as RGBA so the overlay
/// can blend; everything else is converted to RGB.
pub struct AvatarFileReader;

impl AvatarFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AvatarFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl AvatarReader for AvatarFileReader {
    fn read(&self, path: &Path) -> Result<Avatar, Box<dyn std::error::Error>> {
        let img = image::open(path)?;
        let avatar = if img.color().has_alpha() {
            Avatar::Rgba(img.to_rgba8())
        } else {
            Avatar::Rgb(img.to_rgb8())
        };
        log::debug!(
            "Loaded avatar {}x{} (alpha: {})",
            avatar.width(),
            avatar.height(),
            avatar.has_alpha()
        );
        Ok(avatar)
    }
}
