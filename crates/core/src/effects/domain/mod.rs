pub mod face_effect;
