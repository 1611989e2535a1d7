pub mod face_classifier;
pub mod face_detector;
pub mod frame_preprocessor;
pub mod gray_image;
