pub mod avatar_file_reader;
pub mod ffmpeg_reader;
pub mod image_file_writer;
