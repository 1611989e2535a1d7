pub mod avatar_reader;
pub mod image_writer;
pub mod video_reader;
