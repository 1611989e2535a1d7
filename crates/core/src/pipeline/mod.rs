pub mod comparison_grid;
pub mod frame_buffer;
pub mod preview_effects_use_case;
pub mod sample_plan;
pub mod variant_renderer;
