use std::path::Path;

use crate::shared::avatar::Avatar;

/// Loads the replacement image used by the avatar effect.
pub trait AvatarReader: Send {
    /// Returns the image with its alpha channel when the file carries one.
    fn read(&self, path: &Path) -> Result<Avatar, Box<dyn std::error::Error>>;
}
