use opencv::core::{Mat, Scalar, CV_8UC3};
use opencv::prelude::*;

use crate::shared::frame::Frame;

/// Copies a packed RGB frame into a continuous `CV_8UC3` matrix.
pub(crate) fn frame_to_mat(frame: &Frame) -> opencv::Result<Mat> {
    let mut mat = Mat::new_rows_cols_with_default(
        frame.height() as i32,
        frame.width() as i32,
        CV_8UC3,
        Scalar::all(0.0),
    )?;
    mat.data_bytes_mut()?.copy_from_slice(frame.data());
    Ok(mat)
}

pub(crate) fn copy_back(mat: &Mat, frame: &mut Frame) -> opencv::Result<()> {
    frame.data_mut().copy_from_slice(mat.data_bytes()?);
    Ok(())
}
