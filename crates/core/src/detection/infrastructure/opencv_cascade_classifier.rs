use std::path::Path;

use opencv::core::{Mat, Rect, Scalar, Size, Vector, CV_8UC1};
use opencv::objdetect::CascadeClassifier;
use opencv::prelude::*;

use crate::detection::domain::face_classifier::FaceClassifier;
use crate::detection::domain::gray_image::GrayImage;
use crate::shared::constants::{DETECT_MIN_NEIGHBORS, DETECT_MIN_SIZE, DETECT_SCALE_FACTOR};
use crate::shared::region::Region;

/// One OpenCV Haar cascade loaded from an XML file.
///
/// Detection parameters are fixed: scale factor 1.05, three neighbours,
/// minimum face size 30x30, no maximum.
pub struct OpencvCascadeClassifier {
    name: String,
    cascade: CascadeClassifier,
}

impl OpencvCascadeClassifier {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let path_str = path
            .to_str()
            .ok_or_else(|| format!("Cascade path is not valid UTF-8: {}", path.display()))?;
        let cascade = CascadeClassifier::new(path_str)?;
        if cascade.empty()? {
            return Err(format!("Failed to load cascade from {}", path.display()).into());
        }

        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path_str.to_string());
        Ok(Self { name, cascade })
    }
}

fn gray_to_mat(gray: &GrayImage) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        gray.height() as i32,
        gray.width() as i32,
        CV_8UC1,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(gray.data());
    Ok(mat)
}

impl FaceClassifier for OpencvCascadeClassifier {
    fn name(&self) -> &str {
        &self.name
    }

    fn detect(&mut self, gray: &GrayImage) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
        let mat = gray_to_mat(gray)?;
        let mut faces = Vector::<Rect>::new();
        self.cascade.detect_multi_scale(
            &mat,
            &mut faces,
            DETECT_SCALE_FACTOR,
            DETECT_MIN_NEIGHBORS,
            0,
            Size::new(DETECT_MIN_SIZE, DETECT_MIN_SIZE),
            Size::new(0, 0),
        )?;

        Ok(faces
            .iter()
            .map(|r| Region::new(r.x, r.y, r.width, r.height))
            .collect())
    }
}
