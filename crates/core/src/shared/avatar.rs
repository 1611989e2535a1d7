use image::imageops::{self, FilterType};
use image::{RgbImage, RgbaImage};

/// The still image laid over detected faces.
///
/// Loaded once and never mutated; each overlay works on a resized copy.
#[derive(Clone, Debug)]
pub enum Avatar {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl Avatar {
    pub fn width(&self) -> u32 {
        match self {
            Avatar::Rgb(img) => img.width(),
            Avatar::Rgba(img) => img.width(),
        }
    }

    pub fn height(&self) -> u32 {
        match self {
            Avatar::Rgb(img) => img.height(),
            Avatar::Rgba(img) => img.height(),
        }
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, Avatar::Rgba(_))
    }

    /// Bilinear resize to exactly `width` x `height`.
    pub fn resized(&self, width: u32, height: u32) -> Avatar {
        match self {
            Avatar::Rgb(img) => {
                Avatar::Rgb(imageops::resize(img, width, height, FilterType::Triangle))
            }
            Avatar::Rgba(img) => {
                Avatar::Rgba(imageops::resize(img, width, height, FilterType::Triangle))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn test_dimensions_and_alpha_flag() {
        let rgb = Avatar::Rgb(RgbImage::new(4, 3));
        let rgba = Avatar::Rgba(RgbaImage::new(5, 6));
        assert_eq!((rgb.width(), rgb.height()), (4, 3));
        assert_eq!((rgba.width(), rgba.height()), (5, 6));
        assert!(!rgb.has_alpha());
        assert!(rgba.has_alpha());
    }

    #[test]
    fn test_resized_keeps_kind_and_colour() {
        let avatar = Avatar::Rgba(RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 255])));
        let resized = avatar.resized(3, 17);
        assert!(resized.has_alpha());
        assert_eq!((resized.width(), resized.height()), (3, 17));
        let Avatar::Rgba(img) = resized else {
            panic!("expected rgba");
        };
        assert_eq!(img.get_pixel(1, 9).0, [10, 20, 30, 255]);
    }

    #[test]
    fn test_resized_rgb() {
        let avatar = Avatar::Rgb(RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])));
        let resized = avatar.resized(9, 4);
        assert!(!resized.has_alpha());
        assert_eq!((resized.width(), resized.height()), (9, 4));
    }
}
