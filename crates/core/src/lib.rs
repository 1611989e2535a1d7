pub mod annotation;
pub mod detection;
pub mod effects;
pub mod pipeline;
pub mod shared;
pub mod video;
