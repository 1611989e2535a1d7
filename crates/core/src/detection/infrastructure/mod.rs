pub mod cascade_fallback_detector;
pub mod cascade_resolver;
pub mod lazy_detector;
pub mod opencv_cascade_classifier;
pub mod opencv_preprocessor;
