pub mod google;
pub mod log_file;
pub mod map;
