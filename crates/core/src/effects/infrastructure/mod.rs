pub mod avatar_overlay_effect;
mod gaussian;
pub mod gaussian_blur_effect;
pub mod pixelate_effect;
pub mod resample;
