pub mod avatar;
pub mod constants;
pub mod frame;
pub(crate) mod opencv_mat;
pub mod region;
pub mod video_metadata;
